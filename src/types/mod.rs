mod analysis;
mod boundary;
mod climate;
mod element;
mod element_type;
mod plant;
mod zone;
mod zone_level;

pub use analysis::{
    ClimateInfo, DaylengthRange, ElevationInfo, SeasonalTemp, SiteAnalysis, SunInfo, SunPosition, WindInfo,
};
pub use boundary::Boundary;
pub use climate::{ClimateType, Hemisphere};
pub use element::{Element, ElementProperties, LayerType, Shape};
pub use element_type::{Category, ElementType, FieldDef, FieldDefault, FieldKind, Size};
pub use plant::{Plant, PlantLayer};
pub use zone::Zone;
pub use zone_level::ZoneLevel;
