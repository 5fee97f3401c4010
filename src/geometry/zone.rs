use crate::geometry::footprint::place_local_quad;
use crate::geometry::room::RoomSpec;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, TOLERANCE};

/// Fraction of the door length used to displace the interior probe point.
const PROBE_FRACTION: f64 = 1e-3;

/// A rectangular clearance region that placed items must keep free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearanceZone {
    corners: [Point2; 4],
}

impl ClearanceZone {
    #[must_use]
    pub fn corners(&self) -> &[Point2] {
        &self.corners
    }
}

/// Euclidean length of the door segment.
#[must_use]
pub fn door_width(door: &[Point2; 2]) -> f64 {
    (door[1] - door[0]).norm()
}

/// Builds the avoidance zone of an inward-opening door: an N x N square
/// (N = door width) with one edge coincident with the door segment, extruded
/// to the room-interior side.
///
/// The interior side is resolved the same way as wall normals, by probing a
/// point displaced from the door midpoint. Returns `None` when the door
/// opens outward (no interior swing footprint) or is degenerate.
#[must_use]
pub fn door_avoidance_zone(room: &RoomSpec) -> Option<ClearanceZone> {
    if !room.door_opens_inward() {
        return None;
    }
    let door = room.door();
    let dir = segment_direction(&door[0], &door[1]).ok()?;
    let n = door_width(door);

    let mut normal = left_normal(&dir);
    let mid = Point2::new((door[0].x + door[1].x) / 2.0, (door[0].y + door[1].y) / 2.0);
    let probe = mid + normal * (n * PROBE_FRACTION);
    if !room.contains_point(&probe, TOLERANCE) {
        normal = -normal;
    }

    let corners = [
        door[0],
        door[1],
        door[1] + normal * n,
        door[0] + normal * n,
    ];
    Some(ClearanceZone { corners })
}

/// Builds the door-swing clearance of an appliance footprint: a rectangle of
/// width `length` and depth `length / 2`, flush with the door-bearing edge
/// (the +width face, parallel to `length`).
///
/// Rebuilt for every candidate, since it depends on the candidate's center
/// and rotation.
#[must_use]
pub fn appliance_door_zone(
    center: Point2,
    length: f64,
    width: f64,
    rotation: f64,
) -> ClearanceZone {
    let hl = length / 2.0;
    let hw = width / 2.0;
    let depth = length / 2.0;
    let local = [
        Point2::new(-hl, hw),
        Point2::new(hl, hw),
        Point2::new(hl, hw + depth),
        Point2::new(-hl, hw + depth),
    ];
    ClearanceZone {
        corners: place_local_quad(&local, &center, rotation),
    }
}
