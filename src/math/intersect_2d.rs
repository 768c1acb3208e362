use super::Point2;

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// Positive when `c` lies to the left of `a → b`, negative to the right,
/// zero when the three points are collinear.
#[must_use]
pub fn orient_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Returns `true` if `p` lies inside the axis-aligned box spanned by `a` and `b`.
///
/// Only meaningful when `p` is already known to be collinear with `a → b`.
fn within_span(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Closed segment-segment intersection test in 2D.
///
/// Returns `true` when the segments `a0 → a1` and `b0 → b1` share at least one
/// point: a proper crossing, an endpoint touching the other segment, or a
/// collinear overlap. No tolerance is applied.
#[must_use]
pub fn segments_intersect_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = orient_2d(b0, b1, a0);
    let d2 = orient_2d(b0, b1, a1);
    let d3 = orient_2d(a0, a1, b0);
    let d4 = orient_2d(a0, a1, b1);

    let straddles_b = (d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0);
    let straddles_a = (d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0);
    if straddles_a && straddles_b {
        return true;
    }

    (d1 == 0.0 && within_span(b0, b1, a0))
        || (d2 == 0.0 && within_span(b0, b1, a1))
        || (d3 == 0.0 && within_span(a0, a1, b0))
        || (d4 == 0.0 && within_span(a0, a1, b1))
}
