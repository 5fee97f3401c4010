//! JSON surfaces of the solver: the room description read from disk and the
//! placement report written back. Item order is significant end to end, so
//! both maps preserve insertion order.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Item, ItemKind, RoomSpec};
use crate::math::Point2;
use crate::solver::{LayoutResult, Placement};

/// Legacy name prefix marking door-swing appliances in the external format.
/// Internally the kind is an explicit tag on [`Item`].
const APPLIANCE_PREFIX: &str = "fridge";

/// The external room description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInput {
    /// Boundary vertices; the polygon is implicitly closed.
    pub boundary: Vec<[f64; 2]>,
    /// Door segment endpoints.
    pub door: [[f64; 2]; 2],
    #[serde(rename = "isOpenInward", default)]
    pub is_open_inward: bool,
    /// Item name to `[length, width]`, in placement order.
    #[serde(rename = "algoToPlace")]
    pub items: IndexMap<String, [f64; 2]>,
}

impl LayoutInput {
    /// Reads a room description from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Io` or `Json` errors from reading and parsing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Builds the solver's room from the raw description.
    #[must_use]
    pub fn room(&self) -> RoomSpec {
        let boundary = self
            .boundary
            .iter()
            .map(|p| Point2::new(p[0], p[1]))
            .collect();
        let door = [
            Point2::new(self.door[0][0], self.door[0][1]),
            Point2::new(self.door[1][0], self.door[1][1]),
        ];
        RoomSpec::new(boundary, door, self.is_open_inward)
    }

    /// Converts the item map to solver items, in declared order.
    ///
    /// Items named with the legacy appliance prefix get the explicit
    /// `DoorSwingAppliance` kind.
    #[must_use]
    pub fn to_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .map(|(name, dims)| {
                let kind = if name.starts_with(APPLIANCE_PREFIX) {
                    ItemKind::DoorSwingAppliance
                } else {
                    ItemKind::Generic
                };
                Item::new(name.clone(), dims[0], dims[1], kind)
            })
            .collect()
    }
}

/// One entry of the external placement report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlacementRecord {
    Placed {
        center: [f64; 2],
        rotation: f64,
        placed: bool,
    },
    Rejected {
        placed: bool,
        error: String,
    },
}

/// The external placement report, keyed by item name in input order.
pub type LayoutReport = IndexMap<String, PlacementRecord>;

/// Converts a solve result into the external report shape.
#[must_use]
pub fn to_report(result: &LayoutResult) -> LayoutReport {
    result
        .iter()
        .map(|(name, placement)| {
            let record = match placement {
                Placement::Placed { center, rotation } => PlacementRecord::Placed {
                    center: [center.x, center.y],
                    rotation: *rotation,
                    placed: true,
                },
                Placement::Rejected { reason } => PlacementRecord::Rejected {
                    placed: false,
                    error: reason.clone(),
                },
            };
            (name.clone(), record)
        })
        .collect()
}

/// Writes a placement report as pretty-printed JSON.
///
/// # Errors
///
/// Returns `Io` or `Json` errors from serializing and writing the file.
pub fn save_report(report: &LayoutReport, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(report)?;
    fs::write(path, text)?;
    Ok(())
}
