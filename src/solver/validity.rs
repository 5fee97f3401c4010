use crate::geometry::{ClearanceZone, Footprint, RoomSpec};
use crate::math::polygon_2d::polygons_overlap_2d;
use crate::solver::config::SolverConfig;
use crate::solver::state::SolverState;

/// The multi-rule admissibility check for one candidate placement.
///
/// Rejects when the footprint leaves the room, enters the door avoidance
/// zone, or collides with any accepted footprint or appliance clearance; an
/// appliance's own clearance is held to the same rules. All overlap tests
/// tolerate up to `area_epsilon` of intersection so exact edge-to-edge
/// contact is never misclassified as collision.
#[must_use]
pub fn is_valid_position(
    footprint: &Footprint,
    clearance: Option<&ClearanceZone>,
    state: &SolverState,
    room: &RoomSpec,
    door_zone: Option<&ClearanceZone>,
    config: &SolverConfig,
) -> bool {
    let eps = config.area_epsilon;

    if !room.contains_quad(footprint.corners(), config.containment_epsilon) {
        return false;
    }

    if let Some(zone) = door_zone {
        if polygons_overlap_2d(footprint.corners(), zone.corners(), eps) {
            return false;
        }
    }

    for placed in state.iter() {
        if polygons_overlap_2d(footprint.corners(), placed.footprint.corners(), eps) {
            return false;
        }
        if let Some(pc) = &placed.clearance {
            if polygons_overlap_2d(footprint.corners(), pc.corners(), eps) {
                return false;
            }
        }
    }

    if let Some(cz) = clearance {
        if !room.contains_quad(cz.corners(), config.containment_epsilon) {
            return false;
        }
        if let Some(zone) = door_zone {
            if polygons_overlap_2d(cz.corners(), zone.corners(), eps) {
                return false;
            }
        }
        for placed in state.iter() {
            if polygons_overlap_2d(cz.corners(), placed.footprint.corners(), eps) {
                return false;
            }
            if let Some(pc) = &placed.clearance {
                if polygons_overlap_2d(cz.corners(), pc.corners(), eps) {
                    return false;
                }
            }
        }
    }

    true
}
