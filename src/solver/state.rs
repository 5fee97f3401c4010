use crate::geometry::{ClearanceZone, Footprint};

/// An accepted placement: the item's footprint plus its door-swing clearance
/// when the item is an appliance.
#[derive(Debug, Clone)]
pub struct PlacedItem {
    pub name: String,
    pub footprint: Footprint,
    pub clearance: Option<ClearanceZone>,
}

/// The ordered collection of placements accepted so far.
///
/// Owned by exactly one solve run; a fresh state is created per invocation.
#[derive(Debug, Clone, Default)]
pub struct SolverState {
    items: Vec<PlacedItem>,
}

impl SolverState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: PlacedItem) {
        self.items.push(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
