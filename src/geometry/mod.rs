pub mod footprint;
pub mod item;
pub mod room;
pub mod wall;
pub mod zone;

pub use footprint::Footprint;
pub use item::{Item, ItemKind};
pub use room::RoomSpec;
pub use wall::WallSegment;
pub use zone::{appliance_door_zone, door_avoidance_zone, door_width, ClearanceZone};
