//! Per-level zone colours and descriptions.

use std::fmt;

use crate::types::ZoneLevel;

/// RGB colour with an alpha channel for translucent map fills.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl fmt::Display for Rgba {
    /// Format as CSS: rgba(r, g, b, a)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Styling and wording for one zone level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZonePreset {
    pub level: ZoneLevel,
    pub color: Rgba,
    pub description: &'static str,
}

impl ZonePreset {
    #[inline] pub fn fill(&self) -> Rgba { self.color }
}

const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Rgba { Rgba { r, g, b, a } }

/// Presets indexed by level.
pub static ZONE_PRESETS: [ZonePreset; 6] = [
    ZonePreset { level: ZoneLevel::HOME, color: rgba(26, 26, 26, 0.4), description: "Home / center of activity" },
    ZonePreset { level: ZoneLevel::DAILY, color: rgba(34, 139, 34, 0.2), description: "Daily use: herbs, salad greens, clothesline" },
    ZonePreset { level: ZoneLevel::FREQUENT, color: rgba(50, 205, 50, 0.15), description: "Frequent use: orchard, main garden beds, chickens" },
    ZonePreset { level: ZoneLevel::OCCASIONAL, color: rgba(144, 238, 144, 0.1), description: "Occasional: large crops, pasture, food forest" },
    ZonePreset { level: ZoneLevel::MINIMAL, color: rgba(210, 180, 140, 0.1), description: "Minimal management: timber, foraging, windbreak" },
    ZonePreset { level: ZoneLevel::WILD, color: rgba(128, 128, 128, 0.05), description: "Wild: unmanaged, wildlife habitat, conservation" },
];

#[inline]
pub fn zone_preset(level: ZoneLevel) -> &'static ZonePreset {
    &ZONE_PRESETS[usize::from(level.get())]
}
