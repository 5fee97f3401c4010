use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Absolute polygon area.
#[must_use]
pub fn area_2d(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}

/// Returns the minimum distance from point `p` to the segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < TOLERANCE * TOLERANCE {
        // Degenerate segment (zero length).
        return ((p.x - a.x).powi(2) + (p.y - a.y).powi(2)).sqrt();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let cx = a.x + t * dx;
    let cy = a.y + t * dy;
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}

/// Boundary-inclusive point-in-polygon test.
///
/// A point within `tol` of any boundary edge counts as inside, so that
/// wall-flush placements are never rejected by the containment rule.
/// Interior classification uses even-odd ray casting.
#[must_use]
pub fn point_in_polygon(p: &Point2, polygon: &[Point2], tol: f64) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        if point_to_segment_dist(p, a, b) <= tol {
            return true;
        }
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &polygon[i];
        let pj = &polygon[j];
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = pi.x + (p.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Clips a convex polygon `subject` against a convex polygon `clip`
/// (Sutherland-Hodgman). Both are reoriented counter-clockwise internally.
///
/// Returns the intersection polygon, possibly empty.
#[must_use]
pub fn clip_convex_2d(subject: &[Point2], clip: &[Point2]) -> Vec<Point2> {
    let mut output: Vec<Point2> = if signed_area_2d(subject) < 0.0 {
        subject.iter().rev().copied().collect()
    } else {
        subject.to_vec()
    };
    let clip_ccw: Vec<Point2> = if signed_area_2d(clip) < 0.0 {
        clip.iter().rev().copied().collect()
    } else {
        clip.to_vec()
    };

    let n = clip_ccw.len();
    for i in 0..n {
        if output.is_empty() {
            break;
        }
        let a = clip_ccw[i];
        let b = clip_ccw[(i + 1) % n];
        let edge = Vector2::new(b.x - a.x, b.y - a.y);

        let input = std::mem::take(&mut output);
        let m = input.len();
        for k in 0..m {
            let cur = input[k];
            let next = input[(k + 1) % m];
            let cur_side = edge.x * (cur.y - a.y) - edge.y * (cur.x - a.x);
            let next_side = edge.x * (next.y - a.y) - edge.y * (next.x - a.x);

            if cur_side >= -TOLERANCE {
                output.push(cur);
            }
            if (cur_side > TOLERANCE && next_side < -TOLERANCE)
                || (cur_side < -TOLERANCE && next_side > TOLERANCE)
            {
                let t = cur_side / (cur_side - next_side);
                output.push(Point2::new(
                    cur.x + t * (next.x - cur.x),
                    cur.y + t * (next.y - cur.y),
                ));
            }
        }
    }
    output
}

/// Area of the intersection of two convex polygons.
#[must_use]
pub fn overlap_area_2d(a: &[Point2], b: &[Point2]) -> f64 {
    area_2d(&clip_convex_2d(a, b))
}

/// True iff the intersection area of two convex polygons exceeds `area_eps`.
///
/// Exact edge-to-edge contact has zero intersection area and passes, which
/// is what wall-flush placement relies on.
#[must_use]
pub fn polygons_overlap_2d(a: &[Point2], b: &[Point2], area_eps: f64) -> bool {
    overlap_area_2d(a, b) > area_eps
}

/// Projects a set of points onto a direction, returning `(min, max)` of the
/// dot products.
#[must_use]
pub fn projection_span_2d(points: &[Point2], dir: &Vector2) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        let d = p.x * dir.x + p.y * dir.y;
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = (d.x * d.x + d.y * d.y).sqrt();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(Vector2::new(d.x / len, d.y / len))
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}
