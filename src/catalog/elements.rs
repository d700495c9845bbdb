use crate::types::{Category, ElementType, FieldDef, FieldDefault, FieldKind, LayerType, Size};

use FieldKind::{Boolean, Number, Select, String as Text};

/// Placeable element types, in palette order.
pub static ELEMENT_TYPES: &[ElementType] = &[
    ElementType {
        id: "house",
        name: "House",
        category: Category::Structure,
        default_size: Size { width: 12.0, height: 10.0 },
        can_rotate: true,
        can_resize: false,
        implementation_phase: 1,
        meta_schema: &[
            FieldDef::new("bedrooms", Number, "Bedrooms").default_value(FieldDefault::Number(3.0)).range(1.0, 10.0),
            FieldDef::new("stories", Number, "Stories").default_value(FieldDefault::Number(1.0)).range(1.0, 3.0),
        ],
    },
    ElementType {
        id: "shed",
        name: "Shed",
        category: Category::Structure,
        default_size: Size { width: 4.0, height: 3.0 },
        can_rotate: true,
        can_resize: false,
        implementation_phase: 1,
        meta_schema: &[
            FieldDef::new("purpose", Select, "Purpose")
                .default_value(FieldDefault::Text("tools"))
                .options(&["tools", "storage", "workshop"]),
        ],
    },
    ElementType {
        id: "garden-bed",
        name: "Garden Bed",
        category: Category::Plant,
        default_size: Size { width: 3.0, height: 1.2 },
        can_rotate: true,
        can_resize: false,
        implementation_phase: 2,
        meta_schema: &[
            FieldDef::new("raised", Boolean, "Raised bed").default_value(FieldDefault::Flag(false)),
            FieldDef::new("irrigated", Boolean, "Irrigated").default_value(FieldDefault::Flag(false)),
        ],
    },
    ElementType {
        id: "fruit-tree",
        name: "Fruit Tree",
        category: Category::Plant,
        default_size: Size { width: 4.0, height: 4.0 },
        can_rotate: false,
        can_resize: false,
        implementation_phase: 2,
        meta_schema: &[
            FieldDef::new("species", Text, "Species"),
            FieldDef::new("yearsToFruit", Number, "Years to fruit").default_value(FieldDefault::Number(3.0)).range(1.0, 20.0),
        ],
    },
    ElementType {
        id: "water-tank",
        name: "Water Tank",
        category: Category::Water,
        default_size: Size { width: 2.5, height: 2.5 },
        can_rotate: false,
        can_resize: false,
        implementation_phase: 1,
        meta_schema: &[
            FieldDef::new("capacityLiters", Number, "Capacity")
                .default_value(FieldDefault::Number(5000.0))
                .range(500.0, 100_000.0)
                .unit("liters"),
        ],
    },
    ElementType {
        id: "chicken-coop",
        name: "Chicken Coop",
        category: Category::Animal,
        default_size: Size { width: 3.0, height: 2.0 },
        can_rotate: true,
        can_resize: false,
        implementation_phase: 3,
        meta_schema: &[
            FieldDef::new("maxChickens", Number, "Max chickens").default_value(FieldDefault::Number(6.0)).range(2.0, 50.0),
        ],
    },
    ElementType {
        id: "compost",
        name: "Compost",
        category: Category::Utility,
        default_size: Size { width: 1.5, height: 1.5 },
        can_rotate: false,
        can_resize: false,
        implementation_phase: 2,
        meta_schema: &[
            FieldDef::new("compostType", Select, "Type")
                .default_value(FieldDefault::Text("bin"))
                .options(&["bin", "tumbler", "pile"]),
        ],
    },
    ElementType {
        id: "path",
        name: "Path",
        category: Category::Path,
        default_size: Size { width: 1.0, height: 1.0 },
        can_rotate: false,
        can_resize: false,
        implementation_phase: 1,
        meta_schema: &[
            FieldDef::new("surface", Select, "Surface")
                .default_value(FieldDefault::Text("gravel"))
                .options(&["gravel", "mulch", "concrete", "dirt"]),
        ],
    },
];

/// Look up an element type by id.  Unknown ids (including `plant:*`) yield `None`.
pub fn element_type(id: &str) -> Option<&'static ElementType> {
    ELEMENT_TYPES.iter().find(|t| t.id == id)
}

/// Layer a freshly placed element of `type_id` should be drawn on.
pub fn default_layer(type_id: &str) -> LayerType {
    if type_id.starts_with("plant:") { return LayerType::Planting }
    element_type(type_id).map_or(LayerType::Infrastructure, |t| t.category.default_layer())
}
