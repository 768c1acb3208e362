use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{LineGeometry, Network, PlanarGeometry};
use crate::topology::EndpointIndex;

use super::validate_min_length;

/// How many pruning passes [`DeadEndPruner`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneMode {
    /// Repeat until a pass leaves the segment count unchanged.
    #[default]
    ToFixedPoint,
    /// Run exactly this many passes. Must be positive.
    BoundedPasses(u32),
}

impl PruneMode {
    /// Checks that a bounded pass count is positive.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidArgument` for `BoundedPasses(0)`.
    pub fn validate(self) -> Result<()> {
        match self {
            Self::BoundedPasses(0) => Err(OperationError::InvalidArgument(
                "bounded pass count must be positive".to_owned(),
            )
            .into()),
            _ => Ok(()),
        }
    }
}

/// Outcome of a pruning run.
#[derive(Debug, Clone)]
pub struct PruneReport {
    /// The pruned and merged network.
    pub network: Network,
    /// Number of passes executed.
    pub passes: usize,
    /// Total number of dead-end segments cut across all passes.
    pub removed: usize,
}

/// Iteratively removes short dangling branches.
///
/// A segment is a dead end when exactly one of its ends has degree 1 and the
/// other has degree greater than 1, and it is strictly shorter than
/// `min_length`. Segments with both ends free are isolated rather than
/// dangling and are left alone.
///
/// Each pass classifies against a fresh [`EndpointIndex`], drops every dead
/// end at once, then re-merges the survivors into maximal chains. Merging is
/// what exposes the next spur: a branch split at a degree-2 node only becomes
/// a single dangling segment once it is rejoined.
#[derive(Debug, Clone, Copy)]
pub struct DeadEndPruner {
    min_length: f64,
    mode: PruneMode,
}

impl DeadEndPruner {
    /// Creates a new dead-end pruning operation.
    #[must_use]
    pub fn new(min_length: f64, mode: PruneMode) -> Self {
        Self { min_length, mode }
    }

    /// Executes pruning with the bundled [`PlanarGeometry`].
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidArgument` if `min_length` is negative
    /// or NaN, or if the mode is `BoundedPasses(0)`.
    pub fn execute(&self, network: &Network) -> Result<Network> {
        self.execute_with(network, &PlanarGeometry)
    }

    /// Executes pruning with a caller-supplied geometry kernel.
    ///
    /// # Errors
    ///
    /// Same as [`DeadEndPruner::execute`].
    pub fn execute_with<G: LineGeometry + ?Sized>(
        &self,
        network: &Network,
        geometry: &G,
    ) -> Result<Network> {
        self.execute_with_report(network, geometry).map(|report| report.network)
    }

    /// Executes pruning and reports how many passes ran and what was cut.
    ///
    /// # Errors
    ///
    /// Same as [`DeadEndPruner::execute`].
    pub fn execute_with_report<G: LineGeometry + ?Sized>(
        &self,
        network: &Network,
        geometry: &G,
    ) -> Result<PruneReport> {
        validate_min_length(self.min_length)?;
        self.mode.validate()?;

        let mut current = network.clone();
        let mut passes = 0;
        let mut removed = 0;

        match self.mode {
            PruneMode::ToFixedPoint => {
                // Converged once a pass leaves the segment count unchanged.
                // Every other pass shrinks the network, so the input size
                // bounds the number of passes.
                let cap = network.len().max(1);
                while !current.is_empty() && passes < cap {
                    let (next, cut) = prune_pass(&current, self.min_length, geometry);
                    passes += 1;
                    removed += cut;
                    let converged = cut == 0 && next.len() == current.len();
                    current = next;
                    if converged {
                        break;
                    }
                }
                if passes == cap && !current.is_empty() {
                    debug!(cap, "dead-end pruning stopped at pass cap");
                }
            }
            PruneMode::BoundedPasses(k) => {
                for _ in 0..k {
                    let (next, cut) = prune_pass(&current, self.min_length, geometry);
                    passes += 1;
                    removed += cut;
                    current = next;
                }
            }
        }

        debug!(
            passes,
            removed,
            remaining = current.len(),
            "dead-end pruning finished"
        );
        Ok(PruneReport {
            network: current,
            passes,
            removed,
        })
    }
}

/// Returns the indices of short dead-end segments.
fn dead_end_segments<G: LineGeometry + ?Sized>(
    network: &Network,
    index: &EndpointIndex,
    min_length: f64,
    geometry: &G,
) -> BTreeSet<usize> {
    network
        .iter()
        .enumerate()
        .filter(|(_, seg)| {
            let (ds, de) = index.end_degrees(seg);
            let dangling = (ds == 1 && de > 1) || (ds > 1 && de == 1);
            dangling && geometry.length(seg) < min_length
        })
        .map(|(i, _)| i)
        .collect()
}

/// Runs one pass: classify, drop, re-merge. Returns the new network and the
/// number of segments cut.
fn prune_pass<G: LineGeometry + ?Sized>(
    network: &Network,
    min_length: f64,
    geometry: &G,
) -> (Network, usize) {
    let index = EndpointIndex::build(network);
    let doomed = dead_end_segments(network, &index, min_length, geometry);
    let survivors = network.retain_except(&doomed);
    let merged = Network::new(geometry.merge(survivors.segments()));
    trace!(
        cut = doomed.len(),
        before = network.len(),
        after = merged.len(),
        "dead-end pass"
    );
    (merged, doomed.len())
}
