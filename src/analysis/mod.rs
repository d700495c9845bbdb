//! Site analysis: turning raw weather, terrain and astronomy into a [`SiteAnalysis`].
//!
//! Everything here is pure except [`fetch`], which talks to the network and
//! only exists with the `download` feature.

mod climate;
mod elevation;
mod labels;
mod sun;

#[cfg(feature = "download")]
pub mod fetch;

pub use climate::{derive_climate_type, ClimateSummary, DailySeries, DailyWeather};
pub use elevation::{sample_points, ElevationSummary, SAMPLE_OFFSET_DEG};
pub use labels::{aspect_label, compass_name, wind_label};
pub use sun::{sun_at_noon, sun_path};

use tracing::warn;

use crate::types::{ClimateInfo, ElevationInfo, SeasonalTemp, SiteAnalysis, SunInfo, WindInfo};

impl SiteAnalysis {
    /// Combine the parts of an analysis.  Climate is required; terrain and sun
    /// fall back to placeholders when missing.
    pub fn assemble(
        latitude: f64,
        climate: &ClimateSummary,
        elevation: Option<ElevationSummary>,
        sun: Option<SunInfo>,
    ) -> Self {
        let (kind, hemisphere) = climate.classify(latitude);

        let elevation = match elevation {
            Some(summary) => ElevationInfo::from(summary),
            None => {
                warn!("[analysis] elevation unavailable, using placeholder terrain");
                ElevationInfo::placeholder()
            }
        };
        let sun = sun.unwrap_or_else(|| {
            warn!("[analysis] sun path unavailable, using placeholder");
            SunInfo::placeholder()
        });

        Self {
            climate: ClimateInfo {
                // Hardiness zones need a lookup table we do not have yet.
                zone: None,
                kind,
                hemisphere,
                avg_rainfall: climate.annual_rainfall,
                avg_temp: SeasonalTemp { summer: climate.warmest_month, winter: climate.coldest_month },
                frost_free_days: climate.frost_free_days,
                monsoon_months: climate.monsoon_months,
            },
            sun,
            wind: WindInfo {
                prevailing: climate.dominant_wind_dir,
                avg_speed: climate.avg_wind_speed,
                label: wind_label(climate.dominant_wind_dir, climate.avg_wind_speed),
            },
            elevation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClimateType, Hemisphere};

    fn brisbane() -> ClimateSummary {
        ClimateSummary {
            coldest_month: 15.0,
            warmest_month: 25.0,
            annual_rainfall: 1150.0,
            frost_free_days: 365,
            avg_wind_speed: 14.2,
            dominant_wind_dir: 135.0,
            monsoon_months: Some((1, 2)),
        }
    }

    #[test]
    fn assembles_full_analysis() {
        let sun = sun_path(-27.5, 153.0, 2026);
        let terrain = ElevationSummary::from_samples(20.0, 24.0, 18.0, 21.0, 20.0);
        let analysis = SiteAnalysis::assemble(-27.5, &brisbane(), Some(terrain), sun);

        assert_eq!(analysis.climate.kind, ClimateType::Subtropical);
        assert_eq!(analysis.climate.hemisphere, Hemisphere::Southern);
        assert_eq!(analysis.climate.avg_temp.summer, 25.0);
        assert_eq!(analysis.climate.monsoon_months, Some((1, 2)));
        assert_eq!(analysis.wind.label, "Moderate south-east wind");
        assert_eq!(analysis.elevation.aspect, 180.0);
        assert_eq!(analysis.elevation.aspect_label, "South facing");
        assert!(!analysis.elevation.placeholder);
        assert!(analysis.sun.daylength.longest > analysis.sun.daylength.shortest);
    }

    #[test]
    fn missing_parts_become_placeholders() {
        let analysis = SiteAnalysis::assemble(-27.5, &brisbane(), None, None);

        assert!(analysis.elevation.placeholder);
        assert_eq!(analysis.elevation.aspect_label, "Elevation data unavailable");
        assert_eq!(analysis.sun.summer_solstice.sunrise, "--:--");
        assert_eq!(analysis.sun.daylength.longest, 0.0);
        assert_eq!(analysis.climate.zone, None);
    }
}
