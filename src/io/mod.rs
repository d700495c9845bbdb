//! Format-specific reading and writing.

pub mod geojson;
