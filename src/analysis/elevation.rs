use geo::Point;
use serde::{Deserialize, Serialize};

use crate::types::ElevationInfo;
use super::labels::aspect_label;

/// Offset of the cardinal samples from the centre, degrees of latitude (about 50 m).
pub const SAMPLE_OFFSET_DEG: f64 = 0.00045;

/// Horizontal distance between opposite samples, metres.
const RUN: f64 = 100.0;

/// The five sample points around `center`: centre, north, south, east, west.
///
/// The east-west offset is widened by `1 / cos(lat)` so every sample sits
/// roughly the same ground distance away.
pub fn sample_points(center: Point<f64>) -> [Point<f64>; 5] {
    let (lng, lat) = center.x_y();
    let d_lat = SAMPLE_OFFSET_DEG;
    let d_lng = SAMPLE_OFFSET_DEG / lat.to_radians().cos();
    [
        center,
        Point::new(lng, lat + d_lat),
        Point::new(lng, lat - d_lat),
        Point::new(lng + d_lng, lat),
        Point::new(lng - d_lng, lat),
    ]
}

/// Terrain figures derived from five elevation samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSummary {
    pub min: f64,
    pub max: f64,
    /// Degrees from horizontal.
    pub slope: f64,
    /// Downhill compass direction, snapped to the dominant axis.
    pub aspect: f64,
}

impl ElevationSummary {
    pub fn from_samples(center: f64, north: f64, south: f64, east: f64, west: f64) -> Self {
        let samples = [center, north, south, east, west];
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let ns_rise = north - south;
        let ew_rise = east - west;
        let slope = (ns_rise.hypot(ew_rise) / RUN).atan().to_degrees();

        let aspect = if ns_rise == 0.0 && ew_rise == 0.0 {
            0.0
        } else if ns_rise.abs() >= ew_rise.abs() {
            if ns_rise > 0.0 { 180.0 } else { 0.0 }
        } else if ew_rise > 0.0 {
            270.0
        } else {
            90.0
        };

        Self { min, max, slope, aspect }
    }

    /// Build from a slice in `sample_points` order.  `None` if fewer than five.
    pub fn from_slice(samples: &[f64]) -> Option<Self> {
        match samples {
            [c, n, s, e, w, ..] => Some(Self::from_samples(*c, *n, *s, *e, *w)),
            _ => None,
        }
    }
}

impl From<ElevationSummary> for ElevationInfo {
    fn from(summary: ElevationSummary) -> Self {
        Self {
            min: summary.min,
            max: summary.max,
            slope: summary.slope,
            aspect: summary.aspect,
            aspect_label: aspect_label(summary.aspect),
            placeholder: false,
        }
    }
}
