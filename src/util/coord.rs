use geo_types::Point;

/// Trait for types that can provide longitude/latitude in degrees.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude or easting).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude or northing).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

/// Compass direction of a signed coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// Zero counts as negative: it lands on West or South.
    pub fn of(value: f64, axis: Axis) -> Self {
        match (axis, value > 0.0) {
            (Axis::Longitude, true) => Direction::East,
            (Axis::Longitude, false) => Direction::West,
            (Axis::Latitude, true) => Direction::North,
            (Axis::Latitude, false) => Direction::South,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Direction::East => " E",
            Direction::West => " W",
            Direction::North => " N",
            Direction::South => " S",
        }
    }
}

/// Compass suffix for a coordinate value, with its leading space.
pub fn direction_suffix(value: f64, is_latitude_axis: bool) -> &'static str {
    let axis = if is_latitude_axis {
        Axis::Latitude
    } else {
        Axis::Longitude
    };
    Direction::of(value, axis).suffix()
}
