use crate::api::sexagesimal::format_sexagesimal;
use crate::core::angle::Degrees;
use crate::util::coord::{Coordinate, direction_suffix};
use crate::util::format::human_string_value;

/// `D°MM'SS" E` / `W` for a longitude in degrees.
pub fn format_longitude(longitude: f64) -> String {
    format!(
        "{}{}",
        format_sexagesimal(Degrees(longitude).into()),
        direction_suffix(longitude, false)
    )
}

/// `D°MM'SS" N` / `S` for a latitude in degrees.
pub fn format_latitude(latitude: f64) -> String {
    format!(
        "{}{}",
        format_sexagesimal(Degrees(latitude).into()),
        direction_suffix(latitude, true)
    )
}

/// Display strings for a geographic position.
///
/// # Example
///
/// ```
/// use mapscale_rs::CoordinateLabel;
///
/// let label = CoordinateLabel::from_coord(&(-2.248, 53.481));
/// assert_eq!(label.latitude, "53°28'52\" N");
/// assert_eq!(label.longitude, "2°14'53\" W");
/// assert_eq!(label.to_string(), "53°28'52\" N, 2°14'53\" W");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateLabel {
    pub longitude: String,
    pub latitude: String,
}

impl CoordinateLabel {
    /// `coord.x()` is the longitude and `coord.y()` the latitude, in degrees.
    pub fn from_coord<C: Coordinate>(coord: &C) -> Self {
        Self {
            longitude: format_longitude(coord.x()),
            latitude: format_latitude(coord.y()),
        }
    }
}

impl std::fmt::Display for CoordinateLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// Grouped plain magnitudes for a projected (metric) coordinate, `(x, y)`.
pub fn format_metric_pair<C: Coordinate>(coord: &C) -> (String, String) {
    (human_string_value(coord.x()), human_string_value(coord.y()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_format_longitude_and_latitude() {
        assert_eq!(format_longitude(45.5083), "45°30'30\" E");
        assert_eq!(format_longitude(-45.5083), "45°30'30\" W");
        assert_eq!(format_latitude(45.5083), "45°30'30\" N");
        assert_eq!(format_latitude(0.0), "0°00'00\" S");
    }

    #[test]
    fn test_label_from_tuple_and_point_match() {
        let from_tuple = CoordinateLabel::from_coord(&(-2.248, 53.481));
        let from_point = CoordinateLabel::from_coord(&point! { x: -2.248, y: 53.481 });
        assert_eq!(from_tuple, from_point);
    }

    #[test]
    fn test_format_metric_pair() {
        let (e, n) = format_metric_pair(&(457996.0, 1339874.2));
        assert_eq!(e, "457'996");
        assert_eq!(n, "1'339'874");
    }
}
