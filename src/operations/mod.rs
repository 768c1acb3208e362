pub mod filter;
pub mod simplify;

use crate::error::Result;
use crate::geometry::Network;

use filter::{DeadEndPruner, DisjointRemover, OxbowResolver, PruneMode, RingRemover};
use simplify::{SimplifyConfig, Simplifier};

/// Removes short dead ends; see [`DeadEndPruner`].
///
/// # Errors
///
/// Returns `OperationError::InvalidArgument` for a negative threshold or a
/// zero pass count.
pub fn prune_dead_ends(network: &Network, min_length: f64, mode: PruneMode) -> Result<Network> {
    DeadEndPruner::new(min_length, mode).execute(network)
}

/// Removes short segments touching nothing else; see [`DisjointRemover`].
///
/// # Errors
///
/// Returns `OperationError::InvalidArgument` for a negative threshold.
pub fn remove_disjoint(network: &Network, min_length: f64) -> Result<Network> {
    DisjointRemover::new(min_length).execute(network)
}

/// Removes closed loops; see [`RingRemover`].
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSegment` for a zero-length closed segment.
pub fn remove_rings(network: &Network) -> Result<Network> {
    RingRemover::new().execute(network)
}

/// Keeps the shortest of each group of parallel channels; see [`OxbowResolver`].
#[must_use]
pub fn remove_oxbows(network: &Network) -> Network {
    OxbowResolver::new().execute(network)
}

/// Runs the full pipeline; see [`Simplifier`].
///
/// # Errors
///
/// See [`Simplifier::execute`].
pub fn simplify(network: &Network, config: &SimplifyConfig) -> Result<Network> {
    Simplifier::new(*config).execute(network)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ring_scenario() {
        let net = Network::from_coords(&[
            &[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)],
            &[(5.0, 5.0), (0.0, 0.0)],
        ])
        .unwrap();
        let out = remove_rings(&net).unwrap();
        assert_eq!(out.len(), 1);
        assert!(!out.segments()[0].is_ring());
    }

    #[test]
    fn free_functions_match_operations() {
        let net = Network::from_coords(&[
            &[(0.0, 0.0), (0.0, 100.0)],
            &[(0.0, 100.0), (100.0, 100.0)],
            &[(0.0, 100.0), (0.0, 150.0)],
        ])
        .unwrap();
        assert_eq!(
            prune_dead_ends(&net, 60.0, PruneMode::ToFixedPoint).unwrap(),
            DeadEndPruner::new(60.0, PruneMode::ToFixedPoint)
                .execute(&net)
                .unwrap()
        );
        assert_eq!(remove_disjoint(&net, 60.0).unwrap(), net);
        assert_eq!(remove_oxbows(&net), net);
        let config = SimplifyConfig::default().with_min_length(60.0);
        assert_eq!(simplify(&net, &config).unwrap().len(), 1);
    }

    #[test]
    fn bounded_zero_is_invalid() {
        let net = Network::empty();
        assert!(prune_dead_ends(&net, 1.0, PruneMode::BoundedPasses(0)).is_err());
    }
}
