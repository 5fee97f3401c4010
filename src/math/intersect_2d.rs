use super::{Point2, Vector2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Parallel (including collinear) segments return `None`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = Vector2::new(a1.x - a0.x, a1.y - a0.y);
    let db = Vector2::new(b1.x - b0.x, b1.y - b0.y);

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = Point2::new(a0.x + da.x * t_clamped, a0.y + da.y * t_clamped);
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Proper-crossing test: true iff the segments intersect at a point that is
/// at least `tol` away from all four endpoints.
///
/// Endpoint touches and collinear (flush) contact do not count as crossings,
/// so a footprint edge lying exactly on a wall never trips this test.
#[must_use]
pub fn segments_properly_cross_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tol: f64,
) -> bool {
    let Some((pt, _, _)) = segment_segment_intersect_2d(a0, a1, b0, b1) else {
        return false;
    };
    let dist = |e: &Point2| ((pt.x - e.x).powi(2) + (pt.y - e.y).powi(2)).sqrt();
    dist(a0) > tol && dist(a1) > tol && dist(b0) > tol && dist(b1) > tol
}
