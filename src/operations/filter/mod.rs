mod dead_end;
mod disjoint;
mod oxbow;
mod ring;

pub use dead_end::{DeadEndPruner, PruneMode, PruneReport};
pub use disjoint::DisjointRemover;
pub use oxbow::OxbowResolver;
pub use ring::RingRemover;

pub(crate) use disjoint::isolated_segments;
pub(crate) use oxbow::oxbow_segments;
pub(crate) use ring::{ensure_rings_measurable, ring_segments};

use crate::error::{OperationError, Result};

/// Checks a length threshold: it must be a non-negative number.
///
/// `f64::INFINITY` is accepted and makes every candidate short enough.
pub(crate) fn validate_min_length(min_length: f64) -> Result<()> {
    if min_length.is_nan() || min_length < 0.0 {
        return Err(OperationError::InvalidArgument(format!(
            "minimum length must be non-negative, got {min_length}"
        ))
        .into());
    }
    Ok(())
}
