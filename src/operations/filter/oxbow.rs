use std::collections::{BTreeSet, HashMap};

use crate::geometry::{LineGeometry, Network, PlanarGeometry};
use crate::math::PointKey;

/// Collapses parallel channels that join the same two nodes.
///
/// When several segments connect the same endpoint pair (in either
/// direction), only the shortest is kept. On an exact length tie the segment
/// that comes first in the network wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct OxbowResolver;

impl OxbowResolver {
    /// Creates a new oxbow resolution operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the resolution with the bundled [`PlanarGeometry`].
    #[must_use]
    pub fn execute(&self, network: &Network) -> Network {
        self.execute_with(network, &PlanarGeometry)
    }

    /// Executes the resolution, measuring lengths with `geometry`.
    #[must_use]
    pub fn execute_with<G: LineGeometry + ?Sized>(
        &self,
        network: &Network,
        geometry: &G,
    ) -> Network {
        network.retain_except(&oxbow_segments(network, geometry))
    }
}

/// Returns the indices of segments that lose to a shorter segment sharing
/// their endpoint pair.
///
/// Segments are bucketed by undirected endpoint pair, then every pair
/// `i < j` inside a bucket marks the longer one, or `j` on a tie.
pub(crate) fn oxbow_segments<G: LineGeometry + ?Sized>(
    network: &Network,
    geometry: &G,
) -> BTreeSet<usize> {
    let mut buckets: HashMap<(PointKey, PointKey), Vec<usize>> = HashMap::new();
    for (i, seg) in network.iter().enumerate() {
        buckets.entry(seg.undirected_ends()).or_default().push(i);
    }

    let segments = network.segments();
    let mut longer = BTreeSet::new();
    for members in buckets.values().filter(|m| m.len() > 1) {
        let lengths: Vec<f64> = members
            .iter()
            .map(|&i| geometry.length(&segments[i]))
            .collect();
        for a in 0..members.len() {
            for b in (a + 1)..members.len() {
                if lengths[a] > lengths[b] {
                    longer.insert(members[a]);
                } else {
                    longer.insert(members[b]);
                }
            }
        }
    }
    longer
}
