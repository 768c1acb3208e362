use std::collections::BTreeSet;

use crate::error::Result;
use crate::geometry::{LineGeometry, Network, PlanarGeometry};

use super::validate_min_length;

/// Removes short segments that touch nothing else.
///
/// Unlike a dead end, which still meets the network at one end, a disjoint
/// segment has no geometric contact with any other segment. Every ordered
/// pair of distinct segments is tested, so the cost is quadratic in the
/// segment count.
#[derive(Debug, Clone, Copy)]
pub struct DisjointRemover {
    min_length: f64,
}

impl DisjointRemover {
    /// Creates a new disjoint-segment removal operation.
    #[must_use]
    pub fn new(min_length: f64) -> Self {
        Self { min_length }
    }

    /// Executes removal with the bundled [`PlanarGeometry`].
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidArgument` if `min_length` is negative
    /// or NaN.
    pub fn execute(&self, network: &Network) -> Result<Network> {
        self.execute_with(network, &PlanarGeometry)
    }

    /// Executes removal with a caller-supplied geometry kernel.
    ///
    /// # Errors
    ///
    /// Same as [`DisjointRemover::execute`].
    pub fn execute_with<G: LineGeometry + ?Sized>(
        &self,
        network: &Network,
        geometry: &G,
    ) -> Result<Network> {
        validate_min_length(self.min_length)?;
        let isolated = isolated_segments(network, self.min_length, geometry);
        Ok(network.retain_except(&isolated))
    }
}

/// Returns the indices of segments shorter than `min_length` that intersect
/// no other segment.
pub(crate) fn isolated_segments<G: LineGeometry + ?Sized>(
    network: &Network,
    min_length: f64,
    geometry: &G,
) -> BTreeSet<usize> {
    let segments = network.segments();
    segments
        .iter()
        .enumerate()
        .filter(|&(i, seg)| {
            geometry.length(seg) < min_length
                && !segments
                    .iter()
                    .enumerate()
                    .any(|(j, other)| j != i && geometry.intersects(seg, other))
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Network {
        Network::from_coords(&[
            // Connected pair.
            &[(0.0, 0.0), (100.0, 0.0)],
            &[(100.0, 0.0), (100.0, 100.0)],
            // Short, floating alone.
            &[(500.0, 500.0), (510.0, 500.0)],
            // Long, floating alone.
            &[(1000.0, 0.0), (3000.0, 0.0)],
            // Short, crossing the first segment mid-edge.
            &[(50.0, -5.0), (50.0, 5.0)],
        ])
        .unwrap()
    }

    #[test]
    fn removes_only_short_isolated() {
        let net = sample();
        let filtered = DisjointRemover::new(60.0).execute(&net).unwrap();
        assert_eq!(filtered.len(), 4);
        assert!(!filtered.segments().contains(&net.segments()[2]));
        assert!(filtered.segments().contains(&net.segments()[3]));
        assert!(filtered.segments().contains(&net.segments()[4]));
    }

    #[test]
    fn removed_segments_are_short_and_untouched() {
        let net = sample();
        let min_length = 5000.0;
        let isolated = isolated_segments(&net, min_length, &PlanarGeometry);
        assert_eq!(isolated, BTreeSet::from([2, 3]));
        for &i in &isolated {
            let seg = &net.segments()[i];
            assert!(seg.length() < min_length);
            for (j, other) in net.iter().enumerate() {
                if j != i {
                    assert!(!PlanarGeometry.intersects(seg, other));
                }
            }
        }
    }

    #[test]
    fn duplicates_touch_each_other() {
        let net = Network::from_coords(&[
            &[(0.0, 0.0), (1.0, 0.0)],
            &[(0.0, 0.0), (1.0, 0.0)],
        ])
        .unwrap();
        let filtered = DisjointRemover::new(100.0).execute(&net).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn lone_short_segment_is_removed() {
        let net = Network::from_coords(&[&[(0.0, 0.0), (1.0, 0.0)]]).unwrap();
        assert!(DisjointRemover::new(100.0).execute(&net).unwrap().is_empty());
    }

    #[test]
    fn empty_network() {
        assert!(DisjointRemover::new(10.0)
            .execute(&Network::empty())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn negative_threshold_rejected() {
        assert!(DisjointRemover::new(-5.0).execute(&sample()).is_err());
    }
}
