use crate::geometry::{ClearanceZone, Item, RoomSpec};
use crate::math::{Point2, TOLERANCE};
use crate::solver::config::SolverConfig;
use crate::solver::state::SolverState;
use crate::solver::wall_search::try_candidate;
use crate::solver::PlacementCandidate;

/// Rotations tried at each grid point, in ascending order.
const ROTATIONS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// Free-placement fallback: row-major grid scan of the room's bounding box,
/// trying all four rotations at each grid point. Used only after the
/// wall-hugging search has exhausted every wall.
pub(crate) fn free_placement_search(
    item: &Item,
    room: &RoomSpec,
    door_zone: Option<&ClearanceZone>,
    state: &SolverState,
    config: &SolverConfig,
) -> Option<PlacementCandidate> {
    let (min, max) = room.bounding_box();

    let mut y = min.y;
    while y <= max.y + TOLERANCE {
        let mut x = min.x;
        while x <= max.x + TOLERANCE {
            let center = Point2::new(x, y);
            if room.contains_point(&center, config.containment_epsilon) {
                for rotation in ROTATIONS {
                    if let Some(candidate) =
                        try_candidate(item, center, rotation, room, door_zone, state, config)
                    {
                        log::debug!(
                            "{}: free placement at ({x:.1}, {y:.1}) rotation {rotation:.0}",
                            item.name
                        );
                        return Some(candidate);
                    }
                }
            }
            x += config.grid_step;
        }
        y += config.grid_step;
    }
    None
}
