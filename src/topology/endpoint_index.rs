use std::collections::HashMap;

use crate::geometry::{Network, Segment};
use crate::math::{Point2, PointKey};

/// Degree of every segment endpoint in a network.
///
/// Maps each distinct start/end coordinate to the number of segment ends that
/// coincide with it. Every segment contributes exactly two ends, so the
/// degrees always sum to twice the segment count. Coordinates are compared
/// exactly. The index is derived state: build a fresh one whenever the
/// network changes.
#[derive(Debug, Clone, Default)]
pub struct EndpointIndex {
    degrees: HashMap<PointKey, usize>,
}

impl EndpointIndex {
    /// Builds the index for `network`.
    #[must_use]
    pub fn build(network: &Network) -> Self {
        let mut degrees: HashMap<PointKey, usize> = HashMap::with_capacity(network.len() * 2);
        for seg in network {
            let (s, e) = seg.endpoint_keys();
            *degrees.entry(s).or_insert(0) += 1;
            *degrees.entry(e).or_insert(0) += 1;
        }
        Self { degrees }
    }

    /// Returns the degree at `point`, or `0` if no segment ends there.
    #[must_use]
    pub fn degree(&self, point: &Point2) -> usize {
        self.degree_of_key(PointKey::new(point))
    }

    /// Returns the degree at an exact coordinate key.
    #[must_use]
    pub fn degree_of_key(&self, key: PointKey) -> usize {
        self.degrees.get(&key).copied().unwrap_or(0)
    }

    /// Returns `(degree at start, degree at end)` for `segment`.
    #[must_use]
    pub fn end_degrees(&self, segment: &Segment) -> (usize, usize) {
        let (s, e) = segment.endpoint_keys();
        (self.degree_of_key(s), self.degree_of_key(e))
    }

    /// Sum of all degrees.
    #[must_use]
    pub fn total_degree(&self) -> usize {
        self.degrees.values().sum()
    }

    /// Number of distinct endpoint coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Returns `true` if the index holds no endpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn spur_network() -> Network {
        Network::from_coords(&[
            &[(0.0, 0.0), (0.0, 100.0)],
            &[(0.0, 100.0), (100.0, 100.0)],
            &[(0.0, 100.0), (0.0, 150.0)],
        ])
        .unwrap()
    }

    #[test]
    fn junction_degrees() {
        let index = EndpointIndex::build(&spur_network());
        assert_eq!(index.len(), 4);
        assert_eq!(index.degree(&Point2::new(0.0, 100.0)), 3);
        assert_eq!(index.degree(&Point2::new(0.0, 150.0)), 1);
        assert_eq!(index.degree(&Point2::new(0.0, 0.0)), 1);
        assert_eq!(index.degree(&Point2::new(42.0, 42.0)), 0);
    }

    #[test]
    fn degrees_sum_to_twice_segment_count() {
        let net = spur_network();
        assert_eq!(EndpointIndex::build(&net).total_degree(), 2 * net.len());
    }

    #[test]
    fn ring_counts_twice_at_its_node() {
        let net = Network::from_coords(&[&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)]])
            .unwrap();
        let index = EndpointIndex::build(&net);
        assert_eq!(index.len(), 1);
        assert_eq!(index.degree(&Point2::new(5.0, 5.0)), 2);
    }

    #[test]
    fn interior_vertices_are_ignored() {
        let net = Network::from_coords(&[&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]]).unwrap();
        let index = EndpointIndex::build(&net);
        assert_eq!(index.degree(&Point2::new(1.0, 1.0)), 0);
        assert_eq!(index.end_degrees(&net.segments()[0]), (1, 1));
    }

    #[test]
    fn empty_network() {
        let index = EndpointIndex::build(&Network::empty());
        assert!(index.is_empty());
        assert_eq!(index.total_degree(), 0);
    }
}
