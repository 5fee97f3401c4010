use crate::error::{InputError, Result};
use crate::geometry::wall::WallSegment;
use crate::math::polygon_2d::{point_in_polygon, point_to_segment_dist};
use crate::math::intersect_2d::segments_properly_cross_2d;
use crate::math::{Point2, TOLERANCE};

/// The immutable description of the room for one solve: boundary polygon,
/// door segment, and door swing direction.
#[derive(Debug, Clone)]
pub struct RoomSpec {
    boundary: Vec<Point2>,
    door: [Point2; 2],
    door_opens_inward: bool,
}

impl RoomSpec {
    /// Creates a room from its boundary vertices and door segment.
    ///
    /// A duplicated closing vertex (`first == last`) is dropped, so the
    /// boundary is stored open and treated as implicitly closed.
    #[must_use]
    pub fn new(mut boundary: Vec<Point2>, door: [Point2; 2], door_opens_inward: bool) -> Self {
        if boundary.len() > 1 {
            let first = boundary[0];
            let last = boundary[boundary.len() - 1];
            if (first - last).norm() < TOLERANCE {
                boundary.pop();
            }
        }
        Self {
            boundary,
            door,
            door_opens_inward,
        }
    }

    /// Checks the fatal preconditions of the room description.
    ///
    /// # Errors
    ///
    /// Returns `InputError::TooFewBoundaryPoints` or
    /// `InputError::ZeroLengthDoor`.
    pub fn validate(&self) -> Result<()> {
        if self.boundary.len() < 3 {
            return Err(InputError::TooFewBoundaryPoints(self.boundary.len()).into());
        }
        if (self.door[1] - self.door[0]).norm() < TOLERANCE {
            return Err(InputError::ZeroLengthDoor.into());
        }
        Ok(())
    }

    #[must_use]
    pub fn boundary(&self) -> &[Point2] {
        &self.boundary
    }

    #[must_use]
    pub fn door(&self) -> &[Point2; 2] {
        &self.door
    }

    #[must_use]
    pub fn door_opens_inward(&self) -> bool {
        self.door_opens_inward
    }

    /// Axis-aligned bounding box of the boundary as `(min, max)` corners.
    #[must_use]
    pub fn bounding_box(&self) -> (Point2, Point2) {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.boundary {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Boundary-inclusive point containment.
    #[must_use]
    pub fn contains_point(&self, p: &Point2, tol: f64) -> bool {
        point_in_polygon(p, &self.boundary, tol)
    }

    /// True iff a convex quad lies fully inside the room.
    ///
    /// Every corner must be inside (boundary contact allowed) and no quad
    /// edge may properly cross a boundary edge, which also covers non-convex
    /// rooms where corner containment alone is not enough.
    #[must_use]
    pub fn contains_quad(&self, corners: &[Point2], tol: f64) -> bool {
        for c in corners {
            if !point_in_polygon(c, &self.boundary, tol) {
                return false;
            }
        }
        let n = self.boundary.len();
        let m = corners.len();
        for i in 0..m {
            let a0 = &corners[i];
            let a1 = &corners[(i + 1) % m];
            for j in 0..n {
                let b0 = &self.boundary[j];
                let b1 = &self.boundary[(j + 1) % n];
                if segments_properly_cross_2d(a0, a1, b0, b1, tol) {
                    return false;
                }
            }
        }
        true
    }

    /// Minimum distance from a point to the room boundary.
    #[must_use]
    pub fn distance_to_boundary(&self, p: &Point2) -> f64 {
        let n = self.boundary.len();
        let mut best = f64::INFINITY;
        for i in 0..n {
            let a = &self.boundary[i];
            let b = &self.boundary[(i + 1) % n];
            best = best.min(point_to_segment_dist(p, a, b));
        }
        best
    }

    /// Derives the wall segments in boundary order, each with its inward
    /// normal. Zero-length edges are skipped.
    #[must_use]
    pub fn walls(&self) -> Vec<WallSegment> {
        let n = self.boundary.len();
        let mut walls = Vec::with_capacity(n);
        for i in 0..n {
            let start = self.boundary[i];
            let end = self.boundary[(i + 1) % n];
            if let Some(wall) = WallSegment::between(start, end, &self.boundary) {
                walls.push(wall);
            }
        }
        walls
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rect_room() -> RoomSpec {
        RoomSpec::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4000.0, 0.0),
                Point2::new(4000.0, 3000.0),
                Point2::new(0.0, 3000.0),
            ],
            [Point2::new(1000.0, 0.0), Point2::new(1900.0, 0.0)],
            false,
        )
    }

    #[test]
    fn closing_vertex_is_dropped() {
        let room = RoomSpec::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 0.0),
            ],
            [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            false,
        );
        assert_eq!(room.boundary().len(), 3);
    }

    #[test]
    fn validate_rejects_small_boundary() {
        let room = RoomSpec::new(
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            false,
        );
        assert!(room.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_length_door() {
        let room = RoomSpec::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
            ],
            [Point2::new(0.5, 0.0), Point2::new(0.5, 0.0)],
            false,
        );
        assert!(room.validate().is_err());
    }

    #[test]
    fn bounding_box_of_rect_room() {
        let (min, max) = rect_room().bounding_box();
        assert!((min.x).abs() < TOLERANCE && (min.y).abs() < TOLERANCE);
        assert!((max.x - 4000.0).abs() < TOLERANCE);
        assert!((max.y - 3000.0).abs() < TOLERANCE);
    }

    #[test]
    fn walls_in_boundary_order_with_inward_normals() {
        let walls = rect_room().walls();
        assert_eq!(walls.len(), 4);
        // Bottom wall normal points up, top wall normal points down.
        assert!(walls[0].normal.y > 0.9);
        assert!(walls[2].normal.y < -0.9);
    }

    #[test]
    fn quad_flush_with_wall_is_contained() {
        let room = rect_room();
        let quad = [
            Point2::new(0.0, 0.0),
            Point2::new(700.0, 0.0),
            Point2::new(700.0, 600.0),
            Point2::new(0.0, 600.0),
        ];
        assert!(room.contains_quad(&quad, 1e-6));
    }

    #[test]
    fn quad_sticking_out_is_rejected() {
        let room = rect_room();
        let quad = [
            Point2::new(-100.0, 0.0),
            Point2::new(600.0, 0.0),
            Point2::new(600.0, 600.0),
            Point2::new(-100.0, 600.0),
        ];
        assert!(!room.contains_quad(&quad, 1e-6));
    }

    #[test]
    fn quad_crossing_notch_is_rejected() {
        // L-shaped room; a quad bridging the notch has all corners inside the
        // bounding region but crosses the reentrant walls.
        let room = RoomSpec::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(2000.0, 0.0),
                Point2::new(2000.0, 1000.0),
                Point2::new(1000.0, 1000.0),
                Point2::new(1000.0, 2000.0),
                Point2::new(0.0, 2000.0),
            ],
            [Point2::new(100.0, 0.0), Point2::new(900.0, 0.0)],
            false,
        );
        let inside = [
            Point2::new(500.0, 500.0),
            Point2::new(1900.0, 500.0),
            Point2::new(1900.0, 900.0),
            Point2::new(500.0, 900.0),
        ];
        assert!(room.contains_quad(&inside, 1e-6));
        // Slanted slab from the bottom arm to the left arm: every corner is
        // inside, but one edge cuts through the notch corner region.
        let bridging = [
            Point2::new(1400.0, 500.0),
            Point2::new(1500.0, 600.0),
            Point2::new(500.0, 1500.0),
            Point2::new(400.0, 1400.0),
        ];
        assert!(!room.contains_quad(&bridging, 1e-6));
    }
}
