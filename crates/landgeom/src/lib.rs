//! Spherical-earth geometry for property-scale polygons.
//!
//! Coordinates are `geo` types in degrees with `x = longitude` and
//! `y = latitude`.  Distances and areas are metres / square metres on a sphere
//! of radius [`EARTH_RADIUS`], which is accurate to well within a few percent
//! for parcels tens to hundreds of metres across.

pub mod area;
pub mod clip;
pub mod shape;
pub mod sphere;

pub use area::{area, ring_area};
pub use clip::{difference, intersect, largest_polygon, Clip};
pub use shape::{circle, contains, distance_to_polygon, rectangle, ring_centroid};
pub use sphere::{bearing, destination, distance, EARTH_RADIUS};
