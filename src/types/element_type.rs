use serde::Serialize;

use super::LayerType;

/// Broad category of an element type; drives action-plan priority and wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Structure,
    Plant,
    Water,
    Animal,
    Path,
    Utility,
}

impl Category {
    /// Layer that elements of this category are drawn on by default.
    pub fn default_layer(&self) -> LayerType {
        match self {
            Category::Plant => LayerType::Planting,
            Category::Water => LayerType::Water,
            Category::Path => LayerType::Paths,
            Category::Structure | Category::Animal | Category::Utility => LayerType::Infrastructure,
        }
    }
}

/// Footprint in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Value type of a metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Select,
}

/// Default value of a metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldDefault {
    Text(&'static str),
    Number(f64),
    Flag(bool),
}

/// Schema entry for one element-specific metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDef {
    pub key: &'static str,
    pub kind: FieldKind,
    pub label: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldDefault>,
    /// Choices for `Select` fields.
    #[serde(skip_serializing_if = "no_options")]
    pub options: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl FieldDef {
    /// A field with no default, options, unit or bounds.
    pub const fn new(key: &'static str, kind: FieldKind, label: &'static str) -> Self {
        Self { key, kind, label, required: false, default: None, options: &[], unit: None, min: None, max: None }
    }

    pub const fn default_value(mut self, value: FieldDefault) -> Self {
        self.default = Some(value);
        self
    }

    pub const fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    pub const fn unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

#[inline]
fn no_options(options: &&'static [&'static str]) -> bool { options.is_empty() }

/// Static catalog entry describing a kind of placeable element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementType {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub default_size: Size,
    pub can_rotate: bool,
    pub can_resize: bool,
    /// Implementation year for the action plan (1-3).
    pub implementation_phase: u8,
    pub meta_schema: &'static [FieldDef],
}
