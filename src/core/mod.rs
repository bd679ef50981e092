pub mod angle;
pub mod constants;
pub mod ruler;
pub mod scale;

pub use angle::{
    ArcSeconds, Degrees, Radians, arcseconds_to_radians, degrees_to_arcseconds,
    degrees_to_radians, radians_to_arcseconds, radians_to_degrees,
};
pub use constants::{
    ARCSECONDS_PER_RADIAN, LAT_MAX, LON_MAX, MAX_SCALE, MAX_SCALE_PARAM, MIN_SCALE,
    MIN_SCALE_PARAM, PIX_TO_1CM, PIX_TO_1M, RULER_MAX_MAGNITUDE, THOUSANDS_SEPARATOR,
};
pub use ruler::{magnitudes, nice_step, select_step};
pub use scale::{
    clamp_scale, foreshortened_measure, foreshortening_factor, measure_at, metric_to_scale,
    scale_to_metric,
};
