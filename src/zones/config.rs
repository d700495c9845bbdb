use serde::{Deserialize, Serialize};

/// Buffer radii, in metres, for zones 1 to 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Radii {
    pub zone1: f64,
    pub zone2: f64,
    /// `None` means zone 3 runs out to the boundary.
    pub zone3: Option<f64>,
}

impl Radii {
    pub const fn new(zone1: f64, zone2: f64, zone3: Option<f64>) -> Self {
        Self { zone1, zone2, zone3 }
    }
}

/// Tuning for zone generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Radii for properties smaller than `tiny_below` square metres.
    pub tiny: Radii,
    /// Radii for properties up to and including `small_up_to`.
    pub small: Radii,
    /// Radii for properties up to and including `medium_up_to`.
    pub medium: Radii,
    /// Radii for anything larger.
    pub large: Radii,
    pub tiny_below: f64,
    pub small_up_to: f64,
    pub medium_up_to: f64,
    /// House footprint used for zone 0, in metres.
    pub house_width: f64,
    pub house_height: f64,
    /// Vertices per circular buffer.
    pub circle_steps: usize,
    /// Zone 4 slivers at or below this area (square metres) are dropped.
    pub min_residual_area: f64,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            tiny: Radii::new(8.0, 20.0, None),
            small: Radii::new(15.0, 40.0, Some(80.0)),
            medium: Radii::new(20.0, 60.0, Some(150.0)),
            large: Radii::new(25.0, 80.0, Some(200.0)),
            tiny_below: 2_000.0,
            small_up_to: 10_000.0,
            medium_up_to: 50_000.0,
            house_width: 12.0,
            house_height: 10.0,
            circle_steps: 64,
            min_residual_area: 1.0,
        }
    }
}

impl ZoneConfig {
    /// Radii bracket for a property of `area` square metres.
    pub fn radii_for(&self, area: f64) -> Radii {
        if area < self.tiny_below { return self.tiny }
        if area <= self.small_up_to { return self.small }
        if area <= self.medium_up_to { return self.medium }
        self.large
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets() {
        let config = ZoneConfig::default();
        assert_eq!(config.radii_for(0.0), Radii::new(8.0, 20.0, None));
        assert_eq!(config.radii_for(1_999.9), Radii::new(8.0, 20.0, None));
        assert_eq!(config.radii_for(2_000.0), Radii::new(15.0, 40.0, Some(80.0)));
        assert_eq!(config.radii_for(10_000.0), Radii::new(15.0, 40.0, Some(80.0)));
        assert_eq!(config.radii_for(10_000.1), Radii::new(20.0, 60.0, Some(150.0)));
        assert_eq!(config.radii_for(50_000.0), Radii::new(20.0, 60.0, Some(150.0)));
        assert_eq!(config.radii_for(1e7), Radii::new(25.0, 80.0, Some(200.0)));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ZoneConfig = serde_json::from_str(r#"{"circle_steps": 32}"#).unwrap();
        assert_eq!(config.circle_steps, 32);
        assert_eq!(config.house_width, 12.0);
        assert_eq!(config.small.zone3, Some(80.0));
    }
}
