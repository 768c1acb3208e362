pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Exact, hashable key for a 2D coordinate.
///
/// Two points map to the same key only when their coordinates are bit-for-bit
/// equal, with `-0.0` folded onto `0.0`. No snapping or tolerance is applied;
/// input is expected to be snapped upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    x: u64,
    y: u64,
}

impl PointKey {
    /// Creates the key of a point.
    #[must_use]
    pub fn new(point: &Point2) -> Self {
        Self {
            x: canonical_bits(point.x),
            y: canonical_bits(point.y),
        }
    }
}

/// Adding `+0.0` maps `-0.0` to `+0.0` and leaves every other value unchanged.
fn canonical_bits(value: f64) -> u64 {
    (value + 0.0).to_bits()
}
