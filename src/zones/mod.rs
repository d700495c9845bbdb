//! Permaculture zone generation and point-to-zone assignment.

mod assign;
mod config;
mod generate;

pub use assign::{assign_zone, assign_zones, ZoneIndex};
pub use config::{Radii, ZoneConfig};
pub use generate::{generate_zones, generate_zones_with};
