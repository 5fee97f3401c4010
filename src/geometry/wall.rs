use crate::math::polygon_2d::{left_normal, point_in_polygon, segment_direction};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Fraction of the wall length used to displace the normal probe point.
const PROBE_FRACTION: f64 = 1e-3;

/// A directed edge of the room boundary with its unit direction and the unit
/// normal pointing into the room.
#[derive(Debug, Clone, Copy)]
pub struct WallSegment {
    pub start: Point2,
    pub end: Point2,
    pub direction: Vector2,
    pub normal: Vector2,
    pub length: f64,
}

impl WallSegment {
    /// Builds a wall segment between two consecutive boundary vertices.
    ///
    /// The inward normal is resolved by displacing the wall midpoint a small
    /// step along each normal candidate and keeping the side that lands
    /// inside `boundary`. Returns `None` for zero-length edges.
    #[must_use]
    pub fn between(start: Point2, end: Point2, boundary: &[Point2]) -> Option<Self> {
        let direction = segment_direction(&start, &end).ok()?;
        let length = (end - start).norm();

        let mut normal = left_normal(&direction);
        let mid = Point2::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
        let probe = mid + normal * (length * PROBE_FRACTION);
        if !point_in_polygon(&probe, boundary, TOLERANCE) {
            normal = -normal;
        }

        Some(Self {
            start,
            end,
            direction,
            normal,
            length,
        })
    }

    /// Angle of the wall direction in degrees.
    #[must_use]
    pub fn angle_deg(&self) -> f64 {
        self.direction.y.atan2(self.direction.x).to_degrees()
    }

    /// Point on the wall at distance `d` from its start.
    #[must_use]
    pub fn point_at(&self, d: f64) -> Point2 {
        self.start + self.direction * d
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 3.0),
            Point2::new(0.0, 3.0),
        ]
    }

    #[test]
    fn bottom_wall_normal_points_up() {
        let b = square();
        let wall = WallSegment::between(b[0], b[1], &b).unwrap();
        assert!((wall.normal.x).abs() < TOLERANCE);
        assert!((wall.normal.y - 1.0).abs() < TOLERANCE);
        assert!((wall.length - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn normals_point_inward_for_clockwise_boundary() {
        let b: Vec<Point2> = square().into_iter().rev().collect();
        // Top wall listed first when reversed; its normal must point down.
        let wall = WallSegment::between(b[0], b[1], &b).unwrap();
        let probe = Point2::new(
            (wall.start.x + wall.end.x) / 2.0 + wall.normal.x,
            (wall.start.y + wall.end.y) / 2.0 + wall.normal.y,
        );
        assert!(point_in_polygon(&probe, &b, TOLERANCE));
    }

    #[test]
    fn zero_length_edge_is_skipped() {
        let b = square();
        assert!(WallSegment::between(b[0], b[0], &b).is_none());
    }

    #[test]
    fn angle_of_vertical_wall() {
        let b = square();
        let wall = WallSegment::between(b[1], b[2], &b).unwrap();
        assert!((wall.angle_deg() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn point_at_midpoint() {
        let b = square();
        let wall = WallSegment::between(b[0], b[1], &b).unwrap();
        let p = wall.point_at(2.0);
        assert!((p.x - 2.0).abs() < TOLERANCE);
        assert!(p.y.abs() < TOLERANCE);
    }
}
