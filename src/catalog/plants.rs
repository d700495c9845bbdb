use crate::types::ClimateType::{self, Arid, Subtropical, Temperate, Tropical};
use crate::types::{Plant, PlantLayer};

use PlantLayer::*;

const ALL: &[ClimateType] = &[Tropical, Subtropical, Temperate, Arid];

const fn plant(id: &'static str, name: &'static str, layer: PlantLayer, climates: &'static [ClimateType]) -> Plant {
    Plant {
        id,
        name,
        layer,
        climates,
        companions: &[],
        antagonists: &[],
        nitrogen_fixer: false,
        dynamic_accumulator: false,
    }
}

impl Plant {
    const fn with(mut self, companions: &'static [&'static str], antagonists: &'static [&'static str]) -> Self {
        self.companions = companions;
        self.antagonists = antagonists;
        self
    }

    const fn fixer(mut self) -> Self {
        self.nitrogen_fixer = true;
        self
    }

    const fn accumulator(mut self) -> Self {
        self.dynamic_accumulator = true;
        self
    }
}

pub static PLANTS: &[Plant] = &[
    // canopy
    plant("walnut", "Walnut", Canopy, &[Temperate]).with(&["comfrey", "clover"], &["apple", "tomato", "potato"]),
    plant("chestnut", "Chestnut", Canopy, &[Temperate]).with(&["comfrey", "clover", "goumi"], &[]),
    plant("mango", "Mango", Canopy, &[Tropical, Subtropical]).with(&["pigeon-pea", "comfrey", "sweet-potato"], &[]),
    plant("avocado", "Avocado", Canopy, &[Tropical, Subtropical]).with(&["comfrey", "pigeon-pea", "nasturtium"], &[]),
    // understory
    plant("apple", "Apple", Understory, &[Temperate])
        .with(&["comfrey", "chives", "nasturtium", "clover", "yarrow"], &["walnut", "potato"]),
    plant("citrus", "Citrus", Understory, &[Tropical, Subtropical, Arid])
        .with(&["comfrey", "nasturtium", "pigeon-pea", "yarrow"], &[]),
    plant("fig", "Fig", Understory, &[Subtropical, Temperate, Arid]).with(&["comfrey", "rosemary"], &[]),
    plant("banana", "Banana", Understory, &[Tropical, Subtropical]).with(&["pigeon-pea", "comfrey", "sweet-potato"], &[]),
    plant("olive", "Olive", Understory, &[Subtropical, Arid]).with(&["rosemary"], &[]),
    // shrub
    plant("pigeon-pea", "Pigeon Pea", Shrub, &[Tropical, Subtropical, Arid]).fixer(),
    plant("goumi", "Goumi", Shrub, &[Temperate]).fixer(),
    plant("blueberry", "Blueberry", Shrub, &[Temperate]).with(&["strawberry"], &[]),
    plant("rosemary", "Rosemary", Shrub, &[Subtropical, Temperate, Arid]).with(&["bean", "carrot"], &[]),
    // herbaceous
    plant("comfrey", "Comfrey", Herbaceous, ALL).accumulator(),
    plant("yarrow", "Yarrow", Herbaceous, &[Subtropical, Temperate, Arid]).accumulator(),
    plant("tomato", "Tomato", Herbaceous, ALL).with(&["basil", "carrot", "chives", "nasturtium"], &["fennel", "potato", "walnut"]),
    plant("basil", "Basil", Herbaceous, &[Tropical, Subtropical, Temperate]).with(&["tomato"], &[]),
    plant("fennel", "Fennel", Herbaceous, &[Subtropical, Temperate, Arid]).with(&[], &["tomato", "bean"]),
    plant("bean", "Bean", Herbaceous, ALL).with(&["carrot", "squash"], &["onion", "garlic", "fennel"]).fixer(),
    plant("chives", "Chives", Herbaceous, &[Subtropical, Temperate]).with(&["carrot", "apple", "tomato"], &["bean", "pea"]),
    // groundcover
    plant("clover", "White Clover", Groundcover, &[Subtropical, Temperate]).fixer(),
    plant("nasturtium", "Nasturtium", Groundcover, &[Tropical, Subtropical, Temperate]).with(&["squash"], &[]),
    plant("strawberry", "Strawberry", Groundcover, &[Subtropical, Temperate]).with(&["bean", "blueberry"], &[]),
    plant("sweet-potato", "Sweet Potato", Groundcover, &[Tropical, Subtropical]),
    plant("squash", "Squash", Groundcover, ALL).with(&["bean", "nasturtium"], &["potato"]),
    // root
    plant("carrot", "Carrot", Root, &[Subtropical, Temperate]).with(&["onion", "tomato"], &[]),
    plant("onion", "Onion", Root, ALL).with(&["carrot"], &["bean", "pea"]),
    plant("garlic", "Garlic", Root, ALL).with(&["tomato"], &["bean", "pea"]),
    plant("potato", "Potato", Root, &[Temperate]).with(&["bean"], &["tomato", "squash"]),
    // vine
    plant("grape", "Grape", Vine, &[Subtropical, Temperate, Arid]).with(&["clover"], &[]),
    plant("passionfruit", "Passionfruit", Vine, &[Tropical, Subtropical]),
    plant("pea", "Pea", Vine, &[Temperate]).with(&["carrot"], &["onion", "garlic"]).fixer(),
];

/// Look up a plant by catalog id (without the `plant:` prefix).
pub fn plant_by_id(id: &str) -> Option<&'static Plant> {
    PLANTS.iter().find(|p| p.id == id)
}
