use std::collections::BTreeSet;

use tracing::debug;

use crate::error::Result;
use crate::geometry::{LineGeometry, Network, PlanarGeometry};

use super::filter::{
    ensure_rings_measurable, isolated_segments, oxbow_segments, ring_segments,
    validate_min_length, DeadEndPruner, PruneMode,
};

/// Default length threshold, in network units.
pub const DEFAULT_MIN_LENGTH: f64 = 1000.0;

/// Settings for [`Simplifier`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifyConfig {
    /// Dead-end and disjoint segments shorter than this are removed.
    pub min_length: f64,
    /// How many dead-end pruning passes to run.
    pub prune_mode: PruneMode,
    /// Remove closed loops.
    pub remove_rings: bool,
    /// Keep only the shortest of segments sharing an endpoint pair.
    pub remove_oxbows: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            prune_mode: PruneMode::ToFixedPoint,
            remove_rings: true,
            remove_oxbows: true,
        }
    }
}

impl SimplifyConfig {
    /// Sets the length threshold.
    #[must_use]
    pub fn with_min_length(mut self, min_length: f64) -> Self {
        self.min_length = min_length;
        self
    }

    /// Sets the pruning mode.
    #[must_use]
    pub fn with_prune_mode(mut self, prune_mode: PruneMode) -> Self {
        self.prune_mode = prune_mode;
        self
    }

    /// Enables or disables ring removal.
    #[must_use]
    pub fn with_remove_rings(mut self, remove_rings: bool) -> Self {
        self.remove_rings = remove_rings;
        self
    }

    /// Enables or disables oxbow resolution.
    #[must_use]
    pub fn with_remove_oxbows(mut self, remove_oxbows: bool) -> Self {
        self.remove_oxbows = remove_oxbows;
        self
    }

    /// Checks the threshold and pass count.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidArgument` if `min_length` is negative
    /// or NaN, or if the mode is `BoundedPasses(0)`.
    pub fn validate(&self) -> Result<()> {
        validate_min_length(self.min_length)?;
        self.prune_mode.validate()
    }
}

/// Outcome of a simplification run.
///
/// The per-stage counts are the sizes of each stage's removal set; a segment
/// claimed by several stages is counted in each but removed once.
#[derive(Debug, Clone)]
pub struct SimplifyReport {
    /// The simplified network.
    pub network: Network,
    /// Dead-end pruning passes executed.
    pub prune_passes: usize,
    /// Dead-end segments cut during pruning.
    pub dead_ends: usize,
    /// Short isolated segments found in the pruned network.
    pub isolated: usize,
    /// Rings found in the pruned network (zero when disabled).
    pub rings: usize,
    /// Oxbow channels found in the pruned network (zero when disabled).
    pub oxbows: usize,
}

/// Runs the full cleaning pipeline.
///
/// 1. Prune dead ends (fixed point or bounded passes).
/// 2. Collect short isolated segments of the pruned network.
/// 3. Collect rings and oxbows of the pruned network, if enabled.
/// 4. Drop the union of the collected sets.
///
/// Stages 2 and 3 all read the same pruned snapshot, so their order does not
/// affect the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simplifier {
    config: SimplifyConfig,
}

impl Simplifier {
    /// Creates a new simplifier.
    #[must_use]
    pub fn new(config: SimplifyConfig) -> Self {
        Self { config }
    }

    /// Executes the pipeline with the bundled [`PlanarGeometry`].
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidArgument` for an invalid configuration,
    /// or `GeometryError::DegenerateSegment` when ring removal is enabled and
    /// the input holds a zero-length closed segment.
    pub fn execute(&self, network: &Network) -> Result<Network> {
        self.execute_with(network, &PlanarGeometry)
    }

    /// Executes the pipeline with a caller-supplied geometry kernel.
    ///
    /// # Errors
    ///
    /// Same as [`Simplifier::execute`].
    pub fn execute_with<G: LineGeometry + ?Sized>(
        &self,
        network: &Network,
        geometry: &G,
    ) -> Result<Network> {
        self.execute_with_report(network, geometry).map(|report| report.network)
    }

    /// Executes the pipeline and reports what each stage claimed.
    ///
    /// # Errors
    ///
    /// Same as [`Simplifier::execute`].
    pub fn execute_with_report<G: LineGeometry + ?Sized>(
        &self,
        network: &Network,
        geometry: &G,
    ) -> Result<SimplifyReport> {
        let config = &self.config;
        config.validate()?;
        if config.remove_rings {
            ensure_rings_measurable(network)?;
        }

        let pruned = DeadEndPruner::new(config.min_length, config.prune_mode)
            .execute_with_report(network, geometry)?;
        let base = &pruned.network;

        let isolated = isolated_segments(base, config.min_length, geometry);
        let rings = if config.remove_rings {
            ring_segments(base)?
        } else {
            BTreeSet::new()
        };
        let oxbows = if config.remove_oxbows {
            oxbow_segments(base, geometry)
        } else {
            BTreeSet::new()
        };

        let mut removed = isolated.clone();
        removed.extend(rings.iter().copied());
        removed.extend(oxbows.iter().copied());
        let network = base.retain_except(&removed);

        debug!(
            passes = pruned.passes,
            dead_ends = pruned.removed,
            isolated = isolated.len(),
            rings = rings.len(),
            oxbows = oxbows.len(),
            remaining = network.len(),
            "simplification finished"
        );

        Ok(SimplifyReport {
            network,
            prune_passes: pruned.passes,
            dead_ends: pruned.removed,
            isolated: isolated.len(),
            rings: rings.len(),
            oxbows: oxbows.len(),
        })
    }
}
