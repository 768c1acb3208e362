use std::collections::BTreeSet;

use crate::error::{GeometryError, Result};
use crate::geometry::Network;

/// Removes closed loops.
///
/// A ring is a segment whose first and last vertex are exactly equal. Rings
/// are removed whatever their length or connectivity.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingRemover;

impl RingRemover {
    /// Creates a new ring removal operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the removal, returning only the non-ring segments.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSegment` if a closed segment has zero
    /// length, since that usually means corrupted input rather than a loop.
    pub fn execute(&self, network: &Network) -> Result<Network> {
        let rings = ring_segments(network)?;
        Ok(network.retain_except(&rings))
    }
}

/// Returns the indices of ring segments.
///
/// # Errors
///
/// See [`ensure_rings_measurable`].
pub(crate) fn ring_segments(network: &Network) -> Result<BTreeSet<usize>> {
    ensure_rings_measurable(network)?;
    Ok(network
        .iter()
        .enumerate()
        .filter(|(_, seg)| seg.is_ring())
        .map(|(i, _)| i)
        .collect())
}

/// Fails on the first closed segment whose vertices all coincide.
pub(crate) fn ensure_rings_measurable(network: &Network) -> Result<()> {
    match network
        .iter()
        .position(|seg| seg.is_ring() && seg.length() <= 0.0)
    {
        Some(i) => Err(GeometryError::DegenerateSegment(format!(
            "segment {i} is closed but has zero length"
        ))
        .into()),
        None => Ok(()),
    }
}
