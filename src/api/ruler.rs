use crate::core::constants::{KILOMETRE_MAGNITUDE_LIMIT, METRE_MAGNITUDE_LIMIT, PIX_TO_1CM};
use crate::core::ruler::select_step;
use crate::core::scale::measure_at;
use crate::util::error::MapScaleError;
use serde::{Deserialize, Serialize};

/// Display unit of a ruler, chosen from the selected order of magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RulerUnit {
    Metre,
    Kilometre,
    ThousandKilometre,
}

impl RulerUnit {
    pub fn for_magnitude(magnitude: u64) -> Self {
        if magnitude <= METRE_MAGNITUDE_LIMIT {
            RulerUnit::Metre
        } else if magnitude <= KILOMETRE_MAGNITUDE_LIMIT {
            RulerUnit::Kilometre
        } else {
            RulerUnit::ThousandKilometre
        }
    }

    /// Ground metres per one displayed unit.
    pub fn divisor(self) -> f64 {
        match self {
            RulerUnit::Metre => 1.0,
            RulerUnit::Kilometre => 1_000.0,
            RulerUnit::ThousandKilometre => 1_000_000.0,
        }
    }
}

/// Text appended to the ruler value for each unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitLabels {
    pub metre: String,
    pub kilometre: String,
    pub thousand_kilometre: String,
}

impl Default for UnitLabels {
    fn default() -> Self {
        Self {
            metre: "м".to_string(),
            kilometre: "км".to_string(),
            thousand_kilometre: "тыс.км".to_string(),
        }
    }
}

impl UnitLabels {
    pub fn label(&self, unit: RulerUnit) -> &str {
        match unit {
            RulerUnit::Metre => self.metre.as_str(),
            RulerUnit::Kilometre => self.kilometre.as_str(),
            RulerUnit::ThousandKilometre => self.thousand_kilometre.as_str(),
        }
    }
}

/// Display density and unit labels used when building rulers.
///
/// # Example
///
/// ```
/// use mapscale_rs::{RulerConfig, UnitLabels};
///
/// # fn main() -> Result<(), mapscale_rs::MapScaleError> {
/// let config = RulerConfig::from_json(r#"{ "labels": { "metre": "m", "kilometre": "km" } }"#)?;
/// assert_eq!(config.labels.metre, "m");
/// assert_eq!(config.labels.thousand_kilometre, UnitLabels::default().thousand_kilometre);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    pub pixels_per_cm: f64,
    pub labels: UnitLabels,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            pixels_per_cm: PIX_TO_1CM,
            labels: UnitLabels::default(),
        }
    }
}

impl RulerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, MapScaleError> {
        let config: RulerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the builder setters accept unchecked.
    pub fn validate(&self) -> Result<(), MapScaleError> {
        if !(self.pixels_per_cm.is_finite() && self.pixels_per_cm > 0.0) {
            return Err(MapScaleError::ConfigError(format!(
                "pixels_per_cm must be positive, got {}",
                self.pixels_per_cm
            )));
        }
        Ok(())
    }

    pub fn pixels_per_cm(mut self, pixels_per_cm: f64) -> Self {
        self.pixels_per_cm = pixels_per_cm;
        self
    }

    pub fn labels(mut self, labels: UnitLabels) -> Self {
        self.labels = labels;
        self
    }
}

/// A scale bar: the ground distance it stands for and how long to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ruler {
    /// Ground distance in `unit`
    pub value: f64,
    pub unit: RulerUnit,
    /// `"<value> <unit label>"`, value rounded to a whole number
    pub label: String,
    /// On-screen length of the bar
    pub length: f64,
    /// Order of magnitude the step was taken from, in ground metres
    pub magnitude: u64,
    /// Nice step: 1, 2 or 5
    pub step: u8,
}

impl Ruler {
    /// Picks the coarsest round ground distance for the current scale.
    ///
    /// `measure` is ground metres per screen unit and `factor` scales it
    /// (foreshortening, or the wanted bar length). The bar length is
    /// `value / measure`.
    pub fn build(measure: f64, factor: f64, config: &RulerConfig) -> Result<Self, MapScaleError> {
        if !(measure.is_finite() && measure > 0.0) {
            return Err(MapScaleError::InvalidScaleFactor(measure));
        }

        let scale = measure * factor;
        let Some((step, magnitude)) = select_step(scale) else {
            log::warn!("No ruler step fits ground measure {}", scale);
            return Err(MapScaleError::NoRulerStep { scale });
        };

        let ground = step as f64 * magnitude as f64;
        let length = (1.0 / measure) * ground;
        let unit = RulerUnit::for_magnitude(magnitude);
        let value = ground / unit.divisor();
        let label = format!("{:.0} {}", value.round(), config.labels.label(unit));
        log::debug!(
            "Ruler {} from magnitude {} (step {}), length {}",
            label,
            magnitude,
            step,
            length
        );

        Ok(Self {
            value,
            unit,
            label,
            length,
            magnitude,
            step,
        })
    }

    /// `(label, length)`, the pair a scale-bar widget consumes.
    pub fn as_pair(&self) -> (&str, f64) {
        (&self.label, self.length)
    }
}

/// Builds a ruler with the default unit labels.
///
/// # Example
///
/// ```
/// use mapscale_rs::{build_ruler, PIX_TO_1CM};
///
/// # fn main() -> Result<(), mapscale_rs::MapScaleError> {
/// let ruler = build_ruler(PIX_TO_1CM, 1.0)?;
/// assert_eq!(ruler.label, "50 м");
/// # Ok(())
/// # }
/// ```
pub fn build_ruler(
    pixel_to_cm_factor: f64,
    foreshortening_factor: f64,
) -> Result<Ruler, MapScaleError> {
    Ruler::build(
        pixel_to_cm_factor,
        foreshortening_factor,
        &RulerConfig::default(),
    )
}

/// Ruler for a camera scale parameter at the given latitude.
pub fn ruler_for_camera(
    scale: f64,
    latitude: f64,
    config: &RulerConfig,
) -> Result<Ruler, MapScaleError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(MapScaleError::InvalidScaleFactor(scale));
    }
    config.validate()?;
    if !latitude.is_finite() {
        return Err(MapScaleError::InvalidLatitude(latitude));
    }
    Ruler::build(measure_at(scale, latitude, config.pixels_per_cm), 1.0, config)
}
