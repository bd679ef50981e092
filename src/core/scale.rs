use crate::core::angle::degrees_to_radians;
use crate::core::constants::{MAX_SCALE_PARAM, MIN_SCALE_PARAM};

/// Applies the east-west foreshortening correction to a linear measure.
///
/// Returns `measure * cos(longitude)`. The argument is named `longitude`
/// for historical reasons, but callers pass the current *latitude*:
/// meridians converge toward the poles, so ground distance per degree of
/// longitude shrinks with the cosine of latitude.
pub fn foreshortened_measure(measure: f64, longitude: f64) -> f64 {
    measure * foreshortening_factor(longitude)
}

/// The bare `cos(latitude)` factor used by [`foreshortened_measure`].
pub fn foreshortening_factor(latitude: f64) -> f64 {
    degrees_to_radians(latitude).cos()
}

/// Converts a 1cm : N scale denominator to a camera scale parameter.
pub fn metric_to_scale(metric: f64, pixels_per_cm: f64) -> f64 {
    pixels_per_cm / metric
}

/// Converts a camera scale parameter back to its 1cm : N denominator.
pub fn scale_to_metric(scale: f64, pixels_per_cm: f64) -> f64 {
    pixels_per_cm / scale
}

/// Bounds a camera scale parameter to the supported zoom range.
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        log::warn!("NaN camera scale, using the zoomed-out bound");
        return MAX_SCALE_PARAM;
    }
    scale.clamp(MAX_SCALE_PARAM, MIN_SCALE_PARAM)
}

/// Ground measure represented by one screen unit at the given camera
/// scale and latitude. This is the first input of the ruler computation.
pub fn measure_at(scale: f64, latitude: f64, pixels_per_cm: f64) -> f64 {
    foreshortened_measure(pixels_per_cm / scale, latitude)
}
