use crate::error::{InputError, Result};

/// Kind of a placeable item.
///
/// `DoorSwingAppliance` marks fridge-like items whose door-bearing edge needs
/// a swing clearance in front of it. The kind is an explicit tag; mapping
/// legacy name conventions onto it is the concern of the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemKind {
    #[default]
    Generic,
    DoorSwingAppliance,
}

/// A rectangular item to place in the room.
///
/// `length` is always the larger of the two dimensions; for appliances it is
/// also the door-bearing edge.
#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub kind: ItemKind,
}

impl Item {
    /// Creates an item, normalizing so that `length >= width`.
    #[must_use]
    pub fn new(name: impl Into<String>, dim_a: f64, dim_b: f64, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            length: dim_a.max(dim_b),
            width: dim_a.min(dim_b),
            kind,
        }
    }

    /// Checks the item's dimensions.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NonPositiveDimensions` if either dimension is
    /// zero or negative.
    pub fn validate(&self) -> Result<()> {
        if self.length <= 0.0 || self.width <= 0.0 {
            return Err(InputError::NonPositiveDimensions {
                name: self.name.clone(),
                length: self.length,
                width: self.width,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_are_normalized() {
        let item = Item::new("table", 600.0, 900.0, ItemKind::Generic);
        assert!((item.length - 900.0).abs() < f64::EPSILON);
        assert!((item.width - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_positive_dimension_rejected() {
        let item = Item::new("table", 0.0, 900.0, ItemKind::Generic);
        assert!(item.validate().is_err());
        let item = Item::new("table", -1.0, 900.0, ItemKind::Generic);
        assert!(item.validate().is_err());
    }

    #[test]
    fn positive_dimensions_pass() {
        let item = Item::new("fridge", 700.0, 600.0, ItemKind::DoorSwingAppliance);
        assert!(item.validate().is_ok());
    }
}
