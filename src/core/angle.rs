use crate::core::constants::ARCSECONDS_PER_RADIAN;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub fn degrees_to_radians(x: f64) -> f64 {
    x * PI / 180.0
}

pub fn radians_to_degrees(x: f64) -> f64 {
    x * 180.0 / PI
}

pub fn radians_to_arcseconds(x: f64) -> f64 {
    x * ARCSECONDS_PER_RADIAN
}

pub fn arcseconds_to_radians(x: f64) -> f64 {
    x / ARCSECONDS_PER_RADIAN
}

/// Goes through radians, so the result carries the truncated
/// arcsecond constant rather than an exact `x * 3600`.
pub fn degrees_to_arcseconds(x: f64) -> f64 {
    radians_to_arcseconds(degrees_to_radians(x))
}

/// An angle in decimal degrees.
///
/// The wrappers exist so call sites say which unit they hold:
///
/// ```
/// use mapscale_rs::{Degrees, Radians};
///
/// let r: Radians = Degrees(180.0).into();
/// assert!((r.0 - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Degrees(pub f64);

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Radians(pub f64);

/// An angle in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct ArcSeconds(pub f64);

impl Degrees {
    pub fn to_radians(self) -> Radians {
        Radians(degrees_to_radians(self.0))
    }

    pub fn to_arcseconds(self) -> ArcSeconds {
        ArcSeconds(degrees_to_arcseconds(self.0))
    }

    pub fn abs(self) -> Self {
        Degrees(self.0.abs())
    }
}

impl Radians {
    pub fn to_degrees(self) -> Degrees {
        Degrees(radians_to_degrees(self.0))
    }

    pub fn to_arcseconds(self) -> ArcSeconds {
        ArcSeconds(radians_to_arcseconds(self.0))
    }

    pub fn abs(self) -> Self {
        Radians(self.0.abs())
    }
}

impl ArcSeconds {
    pub fn to_radians(self) -> Radians {
        Radians(arcseconds_to_radians(self.0))
    }

    pub fn to_degrees(self) -> Degrees {
        self.to_radians().to_degrees()
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Self {
        d.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Self {
        r.to_degrees()
    }
}

impl From<Radians> for ArcSeconds {
    fn from(r: Radians) -> Self {
        r.to_arcseconds()
    }
}

impl From<ArcSeconds> for Radians {
    fn from(s: ArcSeconds) -> Self {
        s.to_radians()
    }
}

impl From<Degrees> for ArcSeconds {
    fn from(d: Degrees) -> Self {
        d.to_arcseconds()
    }
}

impl From<ArcSeconds> for Degrees {
    fn from(s: ArcSeconds) -> Self {
        s.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(180.0) - PI).abs() < 1e-12);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < 1e-12);
        assert_eq!(degrees_to_radians(0.0), 0.0);
    }

    #[test]
    fn test_radians_to_arcseconds() {
        assert!((radians_to_arcseconds(1.0) - 206264.806).abs() < 1e-9);
        assert!((arcseconds_to_radians(206264.806) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degrees_to_arcseconds_close_to_3600() {
        // Truncated constant keeps this within a millisecond of arc
        assert!((degrees_to_arcseconds(1.0) - 3600.0).abs() < 0.001);
        assert!((degrees_to_arcseconds(45.0) - 162000.0).abs() < 0.001);
    }

    #[test]
    fn test_typed_roundtrip() {
        let d = Degrees(53.48);
        let back: Degrees = Radians::from(d).into();
        assert!((back.0 - d.0).abs() < 1e-12);

        let s: ArcSeconds = d.into();
        let again: Degrees = s.into();
        assert!((again.0 - d.0).abs() < 1e-9);
    }

    #[test]
    fn test_abs_keeps_unit() {
        assert_eq!(Degrees(-12.5).abs(), Degrees(12.5));
        assert_eq!(Radians(-0.5).abs(), Radians(0.5));
    }
}
