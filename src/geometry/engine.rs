use crate::math::intersect_2d::segments_intersect_2d;

use super::merge::merge_lines;
use super::Segment;

/// Geometry primitives the network filters depend on.
///
/// The filters only ever ask three questions of the geometry: whether two
/// segments touch, how to coalesce a segment set into maximal chains, and how
/// long a segment is. Implement this trait to plug in a different kernel.
pub trait LineGeometry {
    /// Returns `true` if the two segments share at least one point.
    fn intersects(&self, a: &Segment, b: &Segment) -> bool;

    /// Coalesces segments that meet end-to-end into maximal chains.
    fn merge(&self, segments: &[Segment]) -> Vec<Segment>;

    /// Returns the length of a segment.
    fn length(&self, segment: &Segment) -> f64 {
        segment.length()
    }
}

/// Exact planar implementation of [`LineGeometry`].
///
/// - `intersects` tests every edge pair after a bounding-box rejection.
/// - `merge` drops duplicate edges, then joins chains through nodes where
///   exactly two segment ends meet. Interior crossings are not noded.
/// - `length` is the Euclidean polyline length.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarGeometry;

impl LineGeometry for PlanarGeometry {
    fn intersects(&self, a: &Segment, b: &Segment) -> bool {
        if !a.bounds().overlaps(&b.bounds()) {
            return false;
        }
        a.points().windows(2).any(|ea| {
            b.points()
                .windows(2)
                .any(|eb| segments_intersect_2d(&ea[0], &ea[1], &eb[0], &eb[1]))
        })
    }

    fn merge(&self, segments: &[Segment]) -> Vec<Segment> {
        merge_lines(segments)
    }
}
