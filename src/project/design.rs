use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::types::{Boundary, Element, LayerType, Shape, Zone, ZoneLevel};
use crate::zones::{self, ZoneConfig};

/// A named, toggleable drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LayerType,
    pub visible: bool,
}

impl Layer {
    pub fn new(kind: LayerType) -> Self {
        let name = match kind {
            LayerType::Infrastructure => "Infrastructure",
            LayerType::Planting => "Planting",
            LayerType::Water => "Water",
            LayerType::Paths => "Paths",
        };
        Self { id: uuid::Uuid::new_v4().to_string(), name: name.into(), kind, visible: true }
    }
}

/// One design alternative for a property.  Owns its elements and zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: String,
    pub name: String,
    elements: Vec<Element>,
    zones: Vec<Zone>,
    pub layers: Vec<Layer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Design {
    /// Empty design with the four standard layers.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            elements: Vec::new(),
            zones: Vec::new(),
            layers: LayerType::order().into_iter().map(Layer::new).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline] pub fn elements(&self) -> &[Element] { &self.elements }
    #[inline] pub fn zones(&self) -> &[Zone] { &self.zones }

    #[inline]
    pub fn element(&self, id: &str) -> Option<&Element> { self.elements.iter().find(|e| e.id == id) }

    /// Position of the first house, the anchor for zone generation.
    pub fn house(&self) -> Option<Point<f64>> {
        self.elements.iter().find(|e| e.type_id == "house").and_then(Element::position)
    }

    #[inline]
    fn touch(&mut self) { self.updated_at = Utc::now() }

    fn zone_for(&self, element: &Element) -> Option<ZoneLevel> {
        element.position().and_then(|p| zones::assign_zone(p, &self.zones))
    }

    // ------------------------------------------------------------------
    // Element edits

    /// Add an element, assigning its zone if zones exist.
    pub fn place_element(&mut self, mut element: Element) -> &Element {
        element.properties.zone = self.zone_for(&element);
        debug!(id = %element.id, kind = %element.type_id, zone = ?element.properties.zone, "[design] place");

        self.elements.push(element);
        self.touch();
        &self.elements[self.elements.len() - 1]
    }

    /// Move a point element.  Returns its previous position, or `None` if the
    /// id is unknown or the element is not a point.
    pub fn move_element(&mut self, id: &str, position: Point<f64>) -> Option<Point<f64>> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        let Shape::Point(previous) = self.elements[index].geometry else { return None };

        self.elements[index].geometry = Shape::Point(position);
        self.elements[index].properties.zone = zones::assign_zone(position, &self.zones);
        self.touch();
        Some(previous)
    }

    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        let removed = self.elements.remove(index);
        self.touch();
        Some(removed)
    }

    /// Replace an element's type-specific metadata.  `false` if the id is unknown.
    pub fn update_element_meta(&mut self, id: &str, meta: Map<String, Value>) -> bool {
        let Some(element) = self.elements.iter_mut().find(|e| e.id == id) else { return false };
        element.properties.meta = meta;
        self.touch();
        true
    }

    // ------------------------------------------------------------------
    // Zones

    /// Replace the zones and re-assign every element against them.
    pub fn set_zones(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
        zones::assign_zones(&mut self.elements, &self.zones);
        self.touch();
    }

    /// Regenerate zones around `house` and re-assign elements.
    pub fn regenerate_zones(&mut self, config: &ZoneConfig, house: Point<f64>, boundary: &Boundary) -> &[Zone] {
        let zones = zones::generate_zones_with(config, house, boundary, boundary.area());
        self.set_zones(zones);
        &self.zones
    }

    pub fn layer_mut(&mut self, kind: LayerType) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.kind == kind)
    }
}
