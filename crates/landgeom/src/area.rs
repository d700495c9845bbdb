use geo::{LineString, Polygon};

use crate::sphere::EARTH_RADIUS;

/// Area of a polygon in square metres, holes subtracted.
pub fn area(polygon: &Polygon<f64>) -> f64 {
    let outer = ring_area(polygon.exterior()).abs();
    let holes: f64 = polygon.interiors().iter()
        .map(|ring| ring_area(ring).abs())
        .sum();

    (outer - holes).max(0.0)
}

/// Signed spherical area of a ring in square metres.
///
/// Uses the spherical-excess approximation of Chamberlain & Duquette (2007):
/// `A = R²/2 · Σ (λ[i+1] - λ[i-1]) · sin φ[i]`.  The sign follows the winding.
pub fn ring_area(ring: &LineString<f64>) -> f64 {
    let coords = &ring.0;
    // Drop the closing duplicate if present.
    let n = match coords.len() {
        len if len > 1 && coords[0] == coords[len - 1] => len - 1,
        len => len,
    };
    if n < 3 { return 0.0 }

    let total: f64 = (0..n)
        .map(|i| {
            let lower = coords[i];
            let middle = coords[(i + 1) % n];
            let upper = coords[(i + 2) % n];
            (upper.x.to_radians() - lower.x.to_radians()) * middle.y.to_radians().sin()
        })
        .sum();

    total * EARTH_RADIUS * EARTH_RADIUS / 2.0
}
