//! # mapscale-rs
//!
//! Display helpers for a map front end. There are two main entry points.
//!
//! ### 1. `build_ruler` - Scale Bar Selection
//!
//! ```
//! use mapscale_rs::{RulerConfig, ruler_for_camera};
//!
//! # fn main() -> Result<(), mapscale_rs::MapScaleError> {
//! let config = RulerConfig::default();
//! let ruler = ruler_for_camera(1.0, 0.0, &config)?;
//! println!("{} spans {} cm", ruler.label, ruler.length);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `CoordinateLabel` - Coordinate Formatting
//!
//! ```
//! use mapscale_rs::{CoordinateLabel, format_sexagesimal, Degrees};
//! use geo_types::point;
//!
//! let label = CoordinateLabel::from_coord(&point! { x: 37.6173, y: 55.7558 });
//! println!("{}", label);
//!
//! assert_eq!(format_sexagesimal(Degrees(45.5083).into()), "45°30'30\"");
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{
    CoordinateLabel, Dms, Ruler, RulerConfig, RulerUnit, UnitLabels, build_ruler,
    format_latitude, format_longitude, format_metric_pair, format_sexagesimal,
    format_sexagesimal_normalized, ruler_for_camera,
};
pub use crate::core::{
    ARCSECONDS_PER_RADIAN, ArcSeconds, Degrees, LAT_MAX, LON_MAX, MAX_SCALE, MAX_SCALE_PARAM,
    MIN_SCALE, MIN_SCALE_PARAM, PIX_TO_1CM, PIX_TO_1M, RULER_MAX_MAGNITUDE, Radians,
    THOUSANDS_SEPARATOR, arcseconds_to_radians, clamp_scale, degrees_to_arcseconds,
    degrees_to_radians, foreshortened_measure, foreshortening_factor, magnitudes, measure_at,
    metric_to_scale, nice_step, radians_to_arcseconds, radians_to_degrees, scale_to_metric,
    select_step,
};
pub use crate::util::{
    Axis, Coordinate, Direction, MapScaleError, direction_suffix, group_thousands,
    human_string_value, zero_pad,
};

pub use geo_types;
