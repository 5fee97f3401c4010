use crate::geometry::{appliance_door_zone, ClearanceZone, Footprint, Item, ItemKind, RoomSpec, WallSegment};
use crate::math::polygon_2d::projection_span_2d;
use crate::math::{Point2, TOLERANCE};
use crate::solver::config::SolverConfig;
use crate::solver::state::SolverState;
use crate::solver::validity::is_valid_position;
use crate::solver::PlacementCandidate;

/// Wall-hugging search: enumerates wall / rotation-class / slide candidates
/// that put one edge of the item exactly flush against a wall, and returns
/// the first admissible one.
///
/// Walls are visited in boundary order; per wall, the parallel rotation
/// class (length edge along the wall) is tried before the perpendicular one,
/// and slide positions run from the wall start in `wall_step` increments,
/// always including the far end of the usable span.
pub(crate) fn wall_hugging_search(
    item: &Item,
    walls: &[WallSegment],
    room: &RoomSpec,
    door_zone: Option<&ClearanceZone>,
    state: &SolverState,
    config: &SolverConfig,
) -> Option<PlacementCandidate> {
    for (wall_index, wall) in walls.iter().enumerate() {
        for class in [0.0, 90.0] {
            let rotation = wall.angle_deg() + class;

            // Footprint at the origin, only to measure its projections.
            let probe = Footprint::new(Point2::origin(), item.length, item.width, rotation);
            let (min_normal, _) = projection_span_2d(probe.corners(), &wall.normal);
            let (min_along, max_along) = projection_span_2d(probe.corners(), &wall.direction);

            // The footprint straddles the origin, so the wall side is the
            // negative-normal side; shifting by -min_normal makes the nearest
            // edge flush with the wall.
            let normal_offset = -min_normal;
            let span = max_along - min_along;
            if span > wall.length + TOLERANCE {
                continue;
            }
            let max_slide = wall.length - span;

            let mut slide = 0.0;
            loop {
                let base = wall.point_at(slide - min_along);
                let center = base + wall.normal * normal_offset;
                if let Some(candidate) =
                    try_candidate(item, center, rotation, room, door_zone, state, config)
                {
                    log::debug!(
                        "{}: wall {} rotation {:.1} slide {:.1}",
                        item.name,
                        wall_index,
                        rotation,
                        slide
                    );
                    return Some(candidate);
                }
                if slide >= max_slide {
                    break;
                }
                slide = (slide + config.wall_step).min(max_slide);
            }
        }
    }
    None
}

pub(crate) fn try_candidate(
    item: &Item,
    center: Point2,
    rotation: f64,
    room: &RoomSpec,
    door_zone: Option<&ClearanceZone>,
    state: &SolverState,
    config: &SolverConfig,
) -> Option<PlacementCandidate> {
    let footprint = Footprint::new(center, item.length, item.width, rotation);
    let clearance = match item.kind {
        ItemKind::DoorSwingAppliance => {
            Some(appliance_door_zone(center, item.length, item.width, rotation))
        }
        ItemKind::Generic => None,
    };
    if is_valid_position(
        &footprint,
        clearance.as_ref(),
        state,
        room,
        door_zone,
        config,
    ) {
        Some(PlacementCandidate {
            footprint,
            clearance,
        })
    } else {
        None
    }
}
