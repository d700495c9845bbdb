use geo::{Point, Polygon};
use serde::{Deserialize, Serialize};

use crate::catalog::zone_preset;
use super::ZoneLevel;

/// A generated permaculture zone polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub level: ZoneLevel,
    #[serde(with = "crate::io::geojson::polygon")]
    pub geometry: Polygon<f64>,
    /// Semi-transparent CSS fill, e.g. `rgba(34,139,34,0.2)`.
    pub color: String,
    pub description: String,
}

impl Zone {
    /// Stamp a polygon with the colour and description of `level`.
    pub fn new(level: ZoneLevel, geometry: Polygon<f64>) -> Self {
        let preset = zone_preset(level);
        Self {
            id: format!("zone-{}", level.get()),
            level,
            geometry,
            color: preset.fill().to_string(),
            description: preset.description.to_string(),
        }
    }

    /// Area in square metres.
    #[inline] pub fn area(&self) -> f64 { landgeom::area(&self.geometry) }

    /// Whether `point` lies inside the zone (boundary inclusive).
    #[inline] pub fn contains(&self, point: Point<f64>) -> bool { landgeom::contains(&self.geometry, point) }
}
