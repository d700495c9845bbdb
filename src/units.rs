//! Unit conversion and area formatting.

use serde::{Deserialize, Serialize};

const SQM_PER_HECTARE: f64 = 10_000.0;
const SQM_PER_ACRE: f64 = 4_046.86;
const SQFT_PER_SQM: f64 = 10.7639;
const FEET_PER_METER: f64 = 3.28084;

#[inline] pub fn sq_meters_to_hectares(sqm: f64) -> f64 { sqm / SQM_PER_HECTARE }
#[inline] pub fn sq_meters_to_acres(sqm: f64) -> f64 { sqm / SQM_PER_ACRE }
#[inline] pub fn meters_to_feet(m: f64) -> f64 { m * FEET_PER_METER }
#[inline] pub fn feet_to_meters(ft: f64) -> f64 { ft / FEET_PER_METER }

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

/// Human-readable area: hectares or acres once the figure reaches one,
/// otherwise whole square metres or square feet.
pub fn format_area(sqm: f64, system: UnitSystem) -> String {
    match system {
        UnitSystem::Metric => {
            let hectares = sq_meters_to_hectares(sqm);
            if hectares >= 1.0 { format!("{hectares:.2} ha") } else { format!("{} sqm", sqm.round()) }
        }
        UnitSystem::Imperial => {
            let acres = sq_meters_to_acres(sqm);
            if acres >= 1.0 { format!("{acres:.2} acres") } else { format!("{} sq ft", (sqm * SQFT_PER_SQM).round()) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric() {
        assert_eq!(format_area(15_000.0, UnitSystem::Metric), "1.50 ha");
        assert_eq!(format_area(500.0, UnitSystem::Metric), "500 sqm");
        assert_eq!(format_area(9_999.6, UnitSystem::Metric), "10000 sqm");
    }

    #[test]
    fn imperial() {
        assert_eq!(format_area(10_000.0, UnitSystem::Imperial), "2.47 acres");
        assert_eq!(format_area(500.0, UnitSystem::Imperial), "5382 sq ft");
    }

    #[test]
    fn feet_round_trip() {
        assert!((feet_to_meters(meters_to_feet(12.5)) - 12.5).abs() < 1e-12);
        assert!((meters_to_feet(1.0) - 3.28084).abs() < 1e-12);
    }
}
