use serde::{Deserialize, Serialize};

use super::{ClimateType, Hemisphere};

/// Everything the core knows about a site, produced by external services.
///
/// The core never mutates a `SiteAnalysis`; it is read by the advisor and
/// the action-plan deriver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteAnalysis {
    pub climate: ClimateInfo,
    pub sun: SunInfo,
    pub wind: WindInfo,
    pub elevation: ElevationInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateInfo {
    /// USDA hardiness zone (e.g. `11a`), when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(rename = "type")]
    pub kind: ClimateType,
    pub hemisphere: Hemisphere,
    /// Millimetres per year.
    pub avg_rainfall: f64,
    /// Celsius.
    pub avg_temp: SeasonalTemp,
    pub frost_free_days: u32,
    /// `(start_month, end_month)`, 1-based; wet-season sites only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monsoon_months: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalTemp {
    pub summer: f64,
    pub winter: f64,
}

/// Sun position at solar noon on a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunPosition {
    /// Degrees above the horizon.
    pub altitude: f64,
    /// Degrees clockwise from north.
    pub azimuth: f64,
    /// Local solar time, `HH:MM`, or `--:--` when the sun never rises or sets.
    pub sunrise: String,
    pub sunset: String,
    /// Hours of daylight.
    pub daylength: f64,
}

impl SunPosition {
    pub fn placeholder() -> Self {
        Self { altitude: 0.0, azimuth: 0.0, sunrise: "--:--".into(), sunset: "--:--".into(), daylength: 0.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunInfo {
    pub summer_solstice: SunPosition,
    pub winter_solstice: SunPosition,
    pub equinox: SunPosition,
    pub daylength: DaylengthRange,
}

impl SunInfo {
    pub fn placeholder() -> Self {
        Self {
            summer_solstice: SunPosition::placeholder(),
            winter_solstice: SunPosition::placeholder(),
            equinox: SunPosition::placeholder(),
            daylength: DaylengthRange { longest: 0.0, shortest: 0.0 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaylengthRange {
    pub longest: f64,
    pub shortest: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindInfo {
    /// Direction the wind blows from, degrees (0 = north).
    pub prevailing: f64,
    /// km/h.
    pub avg_speed: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationInfo {
    /// Metres above sea level.
    pub min: f64,
    pub max: f64,
    /// Average slope in degrees.
    pub slope: f64,
    /// Downhill compass direction in degrees (0 = north).
    pub aspect: f64,
    pub aspect_label: String,
    /// True when elevation data could not be fetched and these are stand-in values.
    #[serde(default)]
    pub placeholder: bool,
}

impl ElevationInfo {
    pub fn placeholder() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            slope: 0.0,
            aspect: 0.0,
            aspect_label: "Elevation data unavailable".into(),
            placeholder: true,
        }
    }
}

#[cfg(test)]
impl SiteAnalysis {
    /// Analysis with the given climate and terrain and unremarkable everything else.
    pub(crate) fn sample(kind: ClimateType, hemisphere: Hemisphere, slope: f64, aspect: f64) -> Self {
        Self {
            climate: ClimateInfo {
                zone: None,
                kind,
                hemisphere,
                avg_rainfall: 800.0,
                avg_temp: SeasonalTemp { summer: 24.0, winter: 10.0 },
                frost_free_days: 300,
                monsoon_months: None,
            },
            sun: SunInfo::placeholder(),
            wind: WindInfo { prevailing: 270.0, avg_speed: 12.0, label: "Moderate west wind".into() },
            elevation: ElevationInfo {
                min: 10.0,
                max: 20.0,
                slope,
                aspect,
                aspect_label: "Test facing".into(),
                placeholder: false,
            },
        }
    }
}
