/// Error type for mapscale-rs operations.
#[derive(Debug, PartialEq)]
pub enum MapScaleError {
    /// No order of magnitude produced a usable ruler step for this ground measure.
    NoRulerStep { scale: f64 },
    /// The screen-to-ground factor is zero, negative or not finite.
    InvalidScaleFactor(f64),
    /// The latitude given for foreshortening is not finite.
    InvalidLatitude(f64),
    /// A ruler configuration could not be parsed or holds an invalid value.
    ConfigError(String),
}

impl std::fmt::Display for MapScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapScaleError::NoRulerStep { scale } => {
                write!(f, "No ruler step for ground measure: {}", scale)
            }
            MapScaleError::InvalidScaleFactor(v) => write!(f, "Invalid scale factor: {}", v),
            MapScaleError::InvalidLatitude(v) => write!(f, "Invalid latitude: {}", v),
            MapScaleError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for MapScaleError {}

impl From<serde_json::Error> for MapScaleError {
    fn from(e: serde_json::Error) -> Self {
        MapScaleError::ConfigError(e.to_string())
    }
}
