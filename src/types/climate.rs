use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad climate classification used to scope advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateType {
    Tropical,
    Subtropical,
    Temperate,
    Arid,
}

impl ClimateType {
    pub fn to_str(&self) -> &'static str {
        match self {
            ClimateType::Tropical => "tropical",
            ClimateType::Subtropical => "subtropical",
            ClimateType::Temperate => "temperate",
            ClimateType::Arid => "arid",
        }
    }
}

impl fmt::Display for ClimateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.to_str()) }
}

/// Hemisphere of the site, derived from latitude (the equator counts as northern).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    #[inline]
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 { Hemisphere::Northern } else { Hemisphere::Southern }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Hemisphere::Northern => "northern",
            Hemisphere::Southern => "southern",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.to_str()) }
}
