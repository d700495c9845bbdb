use geo::{BooleanOps, CoordsIter, MultiPolygon, Polygon};

use crate::area::area;

/// Outcome of a boolean operation collapsed to a single polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum Clip {
    /// The largest-area part of the result.
    Polygon(Polygon<f64>),
    /// The operation succeeded but nothing with positive area remains.
    Empty,
    /// The operation produced unusable output (non-finite coordinates).
    Failed,
}

impl Clip {
    /// The resulting polygon, if any.
    #[inline]
    pub fn polygon(self) -> Option<Polygon<f64>> {
        match self {
            Clip::Polygon(polygon) => Some(polygon),
            Clip::Empty | Clip::Failed => None,
        }
    }

    #[inline] pub fn is_failed(&self) -> bool { matches!(self, Clip::Failed) }
}

/// Intersection of `a` and `b`, keeping only the largest part.
pub fn intersect(a: &Polygon<f64>, b: &Polygon<f64>) -> Clip {
    if !is_finite(a) || !is_finite(b) { return Clip::Failed }
    resolve(a.intersection(b))
}

/// `a` minus `b`, keeping only the largest part.
pub fn difference(a: &Polygon<f64>, b: &Polygon<f64>) -> Clip {
    if !is_finite(a) || !is_finite(b) { return Clip::Failed }
    resolve(a.difference(b))
}

/// The part of `multi` with the largest positive area.
pub fn largest_polygon(multi: MultiPolygon<f64>) -> Option<Polygon<f64>> {
    multi.0.into_iter()
        .map(|polygon| (area(&polygon), polygon))
        .filter(|(a, _)| *a > 0.0)
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, polygon)| polygon)
}

fn resolve(multi: MultiPolygon<f64>) -> Clip {
    if !multi.0.iter().all(is_finite) { return Clip::Failed }
    largest_polygon(multi).map_or(Clip::Empty, Clip::Polygon)
}

#[inline]
fn is_finite(polygon: &Polygon<f64>) -> bool {
    polygon.coords_iter().all(|c| c.x.is_finite() && c.y.is_finite())
}
