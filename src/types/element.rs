use geo::{Point, Polygon};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::io::geojson::GeometryJson;
use super::ZoneLevel;

/// Drawing layer an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Infrastructure,
    Planting,
    Water,
    Paths,
}

impl LayerType {
    pub fn to_str(&self) -> &'static str {
        match self {
            LayerType::Infrastructure => "infrastructure",
            LayerType::Planting => "planting",
            LayerType::Water => "water",
            LayerType::Paths => "paths",
        }
    }

    pub fn order() -> [LayerType; 4] {
        [LayerType::Infrastructure, LayerType::Planting, LayerType::Water, LayerType::Paths]
    }
}

/// Geometry of a placed element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "GeometryJson", try_from = "GeometryJson")]
pub enum Shape {
    Point(Point<f64>),
    Polygon(Polygon<f64>),
}

impl Shape {
    /// Representative point: the point itself, or the vertex average of a polygon.
    #[inline]
    pub fn position(&self) -> Option<Point<f64>> {
        match self {
            Shape::Point(point) => Some(*point),
            Shape::Polygon(polygon) => landgeom::ring_centroid(polygon),
        }
    }
}

/// Editable properties of a placed element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementProperties {
    /// Degrees, `0..360`.
    pub rotation: f64,
    /// Size multiplier, `>= 0`.
    pub scale: f64,
    /// Assigned zone; `None` until zones have been generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneLevel>,
    pub layer: LayerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Type-specific metadata, described by the element type's field schema.
    #[serde(default)]
    pub meta: Map<String, Value>,
}

impl ElementProperties {
    pub fn new(layer: LayerType) -> Self {
        Self { rotation: 0.0, scale: 1.0, zone: None, layer, label: None, meta: Map::new() }
    }
}

/// A design item placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    /// Key into the element-type catalog (`plant:<id>` for plants).
    pub type_id: String,
    pub geometry: Shape,
    pub properties: ElementProperties,
}

impl Element {
    /// Create an element with a fresh id.
    pub fn new(type_id: impl Into<String>, geometry: Shape, layer: LayerType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            type_id: type_id.into(),
            geometry,
            properties: ElementProperties::new(layer),
        }
    }

    /// Create an element whose layer is inferred from the catalog entry for `type_id`.
    pub fn from_catalog(type_id: impl Into<String>, geometry: Shape) -> Self {
        let type_id = type_id.into();
        let layer = crate::catalog::default_layer(&type_id);
        Self::new(type_id, geometry, layer)
    }

    /// Builder-style label setter.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.properties.label = Some(label.into());
        self
    }

    /// Representative point of the element's geometry.
    #[inline] pub fn position(&self) -> Option<Point<f64>> { self.geometry.position() }

    /// Plant catalog id, if this element is a plant (`plant:<id>`).
    #[inline] pub fn plant_id(&self) -> Option<&str> { self.type_id.strip_prefix("plant:") }

    #[inline] pub fn zone(&self) -> Option<ZoneLevel> { self.properties.zone }
}
