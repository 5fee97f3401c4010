pub mod config;
pub mod free_search;
pub mod state;
pub mod validity;
pub mod wall_search;

use indexmap::IndexMap;

use crate::error::Result;
use crate::geometry::{door_avoidance_zone, ClearanceZone, Footprint, Item, RoomSpec, WallSegment};
use crate::math::Point2;

pub use config::SolverConfig;
pub use state::{PlacedItem, SolverState};

/// Outcome for one item: a position or a rejection message.
///
/// Rejection is a normal, expected result carried as data; it never
/// surfaces as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Placed { center: Point2, rotation: f64 },
    Rejected { reason: String },
}

impl Placement {
    #[must_use]
    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }
}

/// A concrete admissible position for one item, as returned by the searches.
#[derive(Debug, Clone)]
pub struct PlacementCandidate {
    pub footprint: Footprint,
    pub clearance: Option<ClearanceZone>,
}

/// Result of a full solve, keyed by item name in input order.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    placements: IndexMap<String, Placement>,
}

impl LayoutResult {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Placement> {
        self.placements.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Placement)> {
        self.placements.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// True iff every item was placed.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.placements.values().all(Placement::is_placed)
    }
}

/// The placement solver for one room.
///
/// Walls and the door avoidance zone are derived once at construction; each
/// [`solve`](Self::solve) run owns a fresh [`SolverState`].
#[derive(Debug, Clone)]
pub struct LayoutSolver {
    room: RoomSpec,
    config: SolverConfig,
    walls: Vec<WallSegment>,
    door_zone: Option<ClearanceZone>,
}

impl LayoutSolver {
    /// Creates a solver with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` if the room description is invalid.
    pub fn new(room: RoomSpec) -> Result<Self> {
        Self::with_config(room, SolverConfig::default())
    }

    /// Creates a solver with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` if the room description is invalid.
    pub fn with_config(room: RoomSpec, config: SolverConfig) -> Result<Self> {
        room.validate()?;
        let walls = room.walls();
        let door_zone = door_avoidance_zone(&room);
        Ok(Self {
            room,
            config,
            walls,
            door_zone,
        })
    }

    #[must_use]
    pub fn room(&self) -> &RoomSpec {
        &self.room
    }

    #[must_use]
    pub fn door_zone(&self) -> Option<&ClearanceZone> {
        self.door_zone.as_ref()
    }

    /// Standalone query: finds a position for one item against the given
    /// state without mutating anything.
    ///
    /// Wall-hugging search first, free-placement grid as fallback.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` if the item's dimensions are invalid.
    pub fn find_position(
        &self,
        item: &Item,
        state: &SolverState,
    ) -> Result<Option<PlacementCandidate>> {
        item.validate()?;
        Ok(self.search(item, state))
    }

    /// Places all items in their declared order, accumulating state as it
    /// goes: earlier items constrain later ones.
    ///
    /// Items that cannot be placed are recorded as `Placement::Rejected` and
    /// leave the state untouched.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` if any item has invalid dimensions; this is
    /// checked up front, before any placement attempt.
    pub fn solve(&self, items: &[Item]) -> Result<LayoutResult> {
        for item in items {
            item.validate()?;
        }

        let mut state = SolverState::new();
        let mut placements = IndexMap::with_capacity(items.len());
        for item in items {
            match self.search(item, &state) {
                Some(candidate) => {
                    placements.insert(
                        item.name.clone(),
                        Placement::Placed {
                            center: candidate.footprint.center(),
                            rotation: candidate.footprint.rotation(),
                        },
                    );
                    state.push(PlacedItem {
                        name: item.name.clone(),
                        footprint: candidate.footprint,
                        clearance: candidate.clearance,
                    });
                }
                None => {
                    log::warn!("{}: no valid position found", item.name);
                    placements.insert(
                        item.name.clone(),
                        Placement::Rejected {
                            reason: "no valid position found within the room".into(),
                        },
                    );
                }
            }
        }
        Ok(LayoutResult { placements })
    }

    fn search(&self, item: &Item, state: &SolverState) -> Option<PlacementCandidate> {
        wall_search::wall_hugging_search(
            item,
            &self.walls,
            &self.room,
            self.door_zone.as_ref(),
            state,
            &self.config,
        )
        .or_else(|| {
            log::debug!("{}: wall-hugging exhausted, trying free placement", item.name);
            free_search::free_placement_search(
                item,
                &self.room,
                self.door_zone.as_ref(),
                state,
                &self.config,
            )
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::ItemKind;

    fn rect_room(inward: bool) -> RoomSpec {
        RoomSpec::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4000.0, 0.0),
                Point2::new(4000.0, 3000.0),
                Point2::new(0.0, 3000.0),
            ],
            [Point2::new(1000.0, 0.0), Point2::new(1900.0, 0.0)],
            inward,
        )
    }

    #[test]
    fn invalid_item_fails_before_placement() {
        let solver = LayoutSolver::new(rect_room(false)).unwrap();
        let items = vec![
            Item::new("table", 900.0, 600.0, ItemKind::Generic),
            Item::new("broken", 0.0, 600.0, ItemKind::Generic),
        ];
        assert!(solver.solve(&items).is_err());
    }

    #[test]
    fn earlier_items_constrain_later_ones() {
        let solver = LayoutSolver::new(rect_room(false)).unwrap();
        let items = vec![
            Item::new("table_a", 900.0, 600.0, ItemKind::Generic),
            Item::new("table_b", 900.0, 600.0, ItemKind::Generic),
        ];
        let result = solver.solve(&items).unwrap();
        assert!(result.is_feasible());
        let Placement::Placed { center: a, .. } = result.get("table_a").unwrap() else {
            panic!("table_a not placed");
        };
        let Placement::Placed { center: b, .. } = result.get("table_b").unwrap() else {
            panic!("table_b not placed");
        };
        assert!((a - b).norm() > 1.0, "items stacked at the same spot");
    }

    #[test]
    fn find_position_does_not_mutate_state() {
        let solver = LayoutSolver::new(rect_room(false)).unwrap();
        let state = SolverState::new();
        let item = Item::new("table", 900.0, 600.0, ItemKind::Generic);
        let first = solver.find_position(&item, &state).unwrap().unwrap();
        let second = solver.find_position(&item, &state).unwrap().unwrap();
        assert!(state.is_empty());
        assert_eq!(first.footprint.center(), second.footprint.center());
    }

    #[test]
    fn rejection_is_data_not_error() {
        let solver = LayoutSolver::new(rect_room(false)).unwrap();
        let items = vec![Item::new("slab", 6000.0, 5000.0, ItemKind::Generic)];
        let result = solver.solve(&items).unwrap();
        assert!(!result.is_feasible());
        let Placement::Rejected { reason } = result.get("slab").unwrap() else {
            panic!("slab unexpectedly placed");
        };
        assert!(!reason.is_empty());
    }

    #[test]
    fn solve_is_deterministic() {
        let solver = LayoutSolver::new(rect_room(true)).unwrap();
        let items = vec![
            Item::new("fridge", 700.0, 600.0, ItemKind::DoorSwingAppliance),
            Item::new("table", 1200.0, 800.0, ItemKind::Generic),
            Item::new("stool", 400.0, 400.0, ItemKind::Generic),
        ];
        let a = solver.solve(&items).unwrap();
        let b = solver.solve(&items).unwrap();
        for ((name_a, pa), (name_b, pb)) in a.iter().zip(b.iter()) {
            assert_eq!(name_a, name_b);
            assert_eq!(pa, pb);
        }
    }
}
