use crate::error::{GeometryError, Result};
use crate::math::{Point2, PointKey};

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner of the box.
    pub min: Point2,
    /// Maximum corner of the box.
    pub max: Point2,
}

impl Bounds {
    /// Returns `true` if the two closed boxes share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// A single polyline edge of a line network.
///
/// Holds an ordered sequence of at least two finite 2D vertices. Two segments
/// are equal when their vertex sequences are equal; a segment and its
/// [`reversed`](Self::reversed) copy describe the same physical edge and share
/// the same [`undirected_ends`](Self::undirected_ends).
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    points: Vec<Point2>,
}

impl Segment {
    /// Creates a segment from its vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSegment` if fewer than two points are
    /// given, or `GeometryError::NonFiniteCoordinate` if any coordinate is NaN
    /// or infinite.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::DegenerateSegment(format!(
                "segment needs at least 2 points, got {}",
                points.len()
            ))
            .into());
        }
        if let Some(bad) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate { x: bad.x, y: bad.y }.into());
        }
        Ok(Self { points })
    }

    /// Creates a segment from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Segment::new`].
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Wraps points already known to satisfy the segment invariants.
    pub(crate) fn from_valid_points(points: Vec<Point2>) -> Self {
        debug_assert!(points.len() >= 2);
        Self { points }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.points[0]
    }

    /// Returns the last vertex.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.points[self.points.len() - 1]
    }

    /// Sum of the Euclidean lengths of consecutive vertex pairs.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| nalgebra::distance(&w[0], &w[1]))
            .sum()
    }

    /// Returns `true` if the first and last vertex are exactly equal.
    #[must_use]
    pub fn is_ring(&self) -> bool {
        PointKey::new(self.start()) == PointKey::new(self.end())
    }

    /// Returns `(start, end)` as exact keys.
    #[must_use]
    pub fn endpoint_keys(&self) -> (PointKey, PointKey) {
        (PointKey::new(self.start()), PointKey::new(self.end()))
    }

    /// Returns the endpoint pair with direction discarded.
    ///
    /// A segment and its reverse produce the same pair.
    #[must_use]
    pub fn undirected_ends(&self) -> (PointKey, PointKey) {
        let (a, b) = self.endpoint_keys();
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Returns a copy traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns the axis-aligned bounding box of the vertices.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let mut min = *self.start();
        let mut max = *self.start();
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Bounds { min, max }
    }
}
