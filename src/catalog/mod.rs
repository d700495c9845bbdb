//! Static reference data: element types, plants, advisor tips and zone styling.

mod elements;
mod plants;
mod tips;
mod zones;

pub use elements::{default_layer, element_type, ELEMENT_TYPES};
pub use plants::{plant_by_id as plant, PLANTS};
pub use tips::{tip, TIPS};
pub use zones::{zone_preset, Rgba, ZonePreset, ZONE_PRESETS};
