//! Human-readable labels for compass bearings.

use super::climate::compass_octant;

const DIRECTIONS: [&str; 8] = [
    "north", "north-east", "east", "south-east", "south", "south-west", "west", "north-west",
];

/// Lower-case name of the compass octant nearest `degrees`.
#[inline]
pub fn compass_name(degrees: f64) -> &'static str { DIRECTIONS[compass_octant(degrees)] }

/// `"North-east facing"` for a downhill aspect of 45 degrees.
pub fn aspect_label(degrees: f64) -> String {
    format!("{} facing", capitalize(compass_name(degrees)))
}

/// `"Moderate west wind"`: Light below 10 km/h, Strong from 20 km/h.
pub fn wind_label(degrees: f64, speed: f64) -> String {
    let strength = match speed {
        s if s >= 20.0 => "Strong",
        s if s >= 10.0 => "Moderate",
        _ => "Light",
    };
    format!("{strength} {} wind", compass_name(degrees))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
