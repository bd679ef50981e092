/// Screen pixels in one physical centimetre at the assumed display density
pub const PIX_TO_1CM: f64 = 37.70739064857;

/// Screen pixels in one physical metre (1000 / 0.2652 mm pixel pitch)
pub const PIX_TO_1M: f64 = 3770.739064857;

/// Arcseconds in one radian
pub const ARCSECONDS_PER_RADIAN: f64 = 206264.806;

/// Maximum latitude of the web-mercator tile system
pub const LAT_MAX: f64 = 85.05112878;

/// Maximum longitude
pub const LON_MAX: f64 = 180.0;

/// Furthest camera distance, as a 1cm : N metres scale denominator
pub const MAX_SCALE: f64 = 6_000_000.0;

/// Closest camera distance, as a 1cm : N metres scale denominator
pub const MIN_SCALE: f64 = 0.6;

/// Smallest camera scale parameter (fully zoomed out)
pub const MAX_SCALE_PARAM: f64 = PIX_TO_1M / (MAX_SCALE * 100.0);

/// Largest camera scale parameter (fully zoomed in)
pub const MIN_SCALE_PARAM: f64 = PIX_TO_1M / (MIN_SCALE * 100.0);

/// Coarsest order of magnitude tried when picking a ruler step
pub const RULER_MAX_MAGNITUDE: u64 = 10_000_000;

/// Largest magnitude still labelled in metres
pub(crate) const METRE_MAGNITUDE_LIMIT: u64 = 100;

/// Largest magnitude still labelled in kilometres
pub(crate) const KILOMETRE_MAGNITUDE_LIMIT: u64 = 100_000;

/// Separator inserted between digit groups of plain magnitudes
pub const THOUSANDS_SEPARATOR: char = '\'';

pub(crate) const DEGREE_SIGN: char = '\u{b0}';
pub(crate) const MINUTE_SIGN: char = '\'';
pub(crate) const SECOND_SIGN: char = '"';
