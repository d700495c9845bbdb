use serde::Serialize;

use super::ClimateType;

/// Food-forest layer, tallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantLayer {
    Canopy,
    Understory,
    Shrub,
    Herbaceous,
    Groundcover,
    Root,
    Vine,
}

impl PlantLayer {
    /// Layers a guild is built from, in the order suggestions are listed.
    pub const GUILD: [PlantLayer; 6] = [
        PlantLayer::Understory,
        PlantLayer::Shrub,
        PlantLayer::Herbaceous,
        PlantLayer::Groundcover,
        PlantLayer::Root,
        PlantLayer::Vine,
    ];
}

/// Static plant catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Plant {
    pub id: &'static str,
    pub name: &'static str,
    pub layer: PlantLayer,
    pub climates: &'static [ClimateType],
    /// Plant ids this one benefits from or benefits.
    pub companions: &'static [&'static str],
    /// Plant ids that should not be grown alongside.
    pub antagonists: &'static [&'static str],
    pub nitrogen_fixer: bool,
    pub dynamic_accumulator: bool,
}

impl Plant {
    #[inline] pub fn likes(&self, other: &str) -> bool { self.companions.contains(&other) }
    #[inline] pub fn dislikes(&self, other: &str) -> bool { self.antagonists.contains(&other) }
    #[inline] pub fn grows_in(&self, climate: ClimateType) -> bool { self.climates.contains(&climate) }
}
