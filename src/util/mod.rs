pub mod coord;
pub mod error;
pub mod format;

pub use coord::{Axis, Coordinate, Direction, direction_suffix};
pub use error::MapScaleError;
pub use format::{group_thousands, human_string_value, zero_pad};
