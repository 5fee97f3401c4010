pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod solver;

pub use error::{Result, RoomplanError};
