use crate::core::angle::Radians;
use crate::core::constants::{DEGREE_SIGN, MINUTE_SIGN, SECOND_SIGN};
use crate::util::format::zero_pad;

/// An unsigned angle split into whole degrees, minutes and rounded seconds.
///
/// Built by [`Dms::from_radians`], which rounds the seconds *after* the
/// minutes are fixed. A remainder of 59.5" or more therefore shows up as
/// `60` seconds instead of carrying into the minutes; call
/// [`Dms::normalized`] to carry it.
///
/// Non-finite angles decompose to `0°00'00"` and log a warning. Degree
/// counts past `u64::MAX` saturate there.
///
/// # Example
///
/// ```
/// use mapscale_rs::{Degrees, Dms};
///
/// let dms = Dms::from_radians(Degrees(45.5083).into());
/// assert_eq!((dms.degrees, dms.minutes, dms.seconds), (45, 30, 30));
/// assert_eq!(dms.to_string(), "45°30'30\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    pub degrees: u64,
    pub minutes: u32,
    pub seconds: u32,
}

impl Dms {
    /// Decomposes `|angle|`; the sign is dropped.
    pub fn from_radians(angle: Radians) -> Self {
        let total = angle.abs().to_arcseconds().0;
        if !total.is_finite() {
            log::warn!("Non-finite angle {} shown as 0", angle.0);
            return Self {
                degrees: 0,
                minutes: 0,
                seconds: 0,
            };
        }

        let degrees = (total / 3600.0).floor();
        let rest = total - degrees * 3600.0;
        let minutes = (rest / 60.0).floor();
        let seconds = (rest - minutes * 60.0).round();

        Self {
            degrees: degrees as u64,
            minutes: minutes as u32,
            seconds: seconds as u32,
        }
    }

    /// Carries 60 seconds into minutes and 60 minutes into degrees.
    pub fn normalized(self) -> Self {
        let minutes = self.minutes + self.seconds / 60;
        Self {
            degrees: self.degrees.saturating_add(u64::from(minutes / 60)),
            minutes: minutes % 60,
            seconds: self.seconds % 60,
        }
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}",
            self.degrees,
            DEGREE_SIGN,
            zero_pad(self.minutes as i64, 2),
            MINUTE_SIGN,
            zero_pad(self.seconds as i64, 2),
            SECOND_SIGN
        )
    }
}

/// Formats an angle as `D°MM'SS"`, dropping the sign.
///
/// Seconds that round to 60 are printed as `60`; see
/// [`format_sexagesimal_normalized`] for the carried form.
pub fn format_sexagesimal(angle: Radians) -> String {
    Dms::from_radians(angle).to_string()
}

pub fn format_sexagesimal_normalized(angle: Radians) -> String {
    Dms::from_radians(angle).normalized().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::angle::{ArcSeconds, Degrees};

    #[test]
    fn test_format_sexagesimal() {
        assert_eq!(format_sexagesimal(Degrees(45.5083).into()), "45°30'30\"");
        assert_eq!(format_sexagesimal(Degrees(0.0).into()), "0°00'00\"");
    }

    #[test]
    fn test_whole_degrees_fall_just_short() {
        // 206264.806 is slightly below 648000/pi
        let angle: Radians = Degrees(180.0).into();
        assert_eq!(format_sexagesimal(angle), "179°59'60\"");
        assert_eq!(format_sexagesimal_normalized(angle), "180°00'00\"");
    }

    #[test]
    fn test_sign_is_dropped() {
        let north = format_sexagesimal(Degrees(53.4808).into());
        let south = format_sexagesimal(Degrees(-53.4808).into());
        assert_eq!(north, south);
        assert_eq!(north, "53°28'51\"");
    }

    #[test]
    fn test_small_angles_are_padded() {
        let angle = ArcSeconds(3600.0 * 2.0 + 60.0 * 3.0 + 4.0).to_radians();
        assert_eq!(format_sexagesimal(angle), "2°03'04\"");
    }

    #[test]
    fn test_seconds_round_to_sixty_without_carry() {
        let angle = ArcSeconds(36059.7).to_radians();
        assert_eq!(format_sexagesimal(angle), "10°00'60\"");
        assert_eq!(format_sexagesimal_normalized(angle), "10°01'00\"");
    }

    #[test]
    fn test_normalized_carries_into_degrees() {
        let dms = Dms {
            degrees: 12,
            minutes: 59,
            seconds: 60,
        };
        assert_eq!(
            dms.normalized(),
            Dms {
                degrees: 13,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_degrees_beyond_u32() {
        let angle = ArcSeconds(5.0e9 * 3600.0 + 1830.0).to_radians();
        assert_eq!(format_sexagesimal(angle), "5000000000°30'30\"");

        let angle = ArcSeconds(u32::MAX as f64 * 3600.0 + 3599.8).to_radians();
        assert_eq!(format_sexagesimal_normalized(angle), "4294967296°00'00\"");
    }

    #[test]
    fn test_normalized_saturates_degrees() {
        let dms = Dms {
            degrees: u64::MAX,
            minutes: 59,
            seconds: 60,
        };
        assert_eq!(
            dms.normalized(),
            Dms {
                degrees: u64::MAX,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_non_finite_angle_is_zero() {
        let zero = Dms {
            degrees: 0,
            minutes: 0,
            seconds: 0,
        };
        assert_eq!(Dms::from_radians(Radians(f64::NAN)), zero);
        assert_eq!(Dms::from_radians(Radians(f64::INFINITY)), zero);
        assert_eq!(format_sexagesimal(Radians(f64::NAN)), "0°00'00\"");
    }
}
