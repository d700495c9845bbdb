use geo::{Point, Polygon};
use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use crate::io::geojson::polygon;
use crate::validation::{check_polygon, BoundaryError};

/// A validated property boundary.  Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    polygon: Polygon<f64>,
}

impl Boundary {
    /// Wrap a polygon after the structural checks in [`check_polygon`].
    pub fn new(polygon: Polygon<f64>) -> Result<Self, BoundaryError> {
        check_polygon(&polygon)?;
        Ok(Self { polygon })
    }

    #[inline] pub fn polygon(&self) -> &Polygon<f64> { &self.polygon }

    /// Area in square metres.
    #[inline] pub fn area(&self) -> f64 { landgeom::area(&self.polygon) }

    #[inline] pub fn contains(&self, point: Point<f64>) -> bool { landgeom::contains(&self.polygon, point) }

    /// Vertex average of the boundary ring; used as the site location.
    #[inline] pub fn center(&self) -> Option<Point<f64>> { landgeom::ring_centroid(&self.polygon) }
}

impl Serialize for Boundary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        polygon::serialize(&self.polygon, serializer)
    }
}

impl<'de> Deserialize<'de> for Boundary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Boundary::new(polygon::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}
