#![doc = "Comfrey public API: permaculture site-design core"]
pub mod action_plan;
pub mod advisor;
pub mod analysis;
pub mod catalog;
pub mod companions;
pub mod config;
pub mod io;
pub mod project;
pub mod types;
pub mod units;
pub mod validation;
pub mod zones;

#[doc(inline)]
pub use types::{
    Boundary, ClimateType, Element, Hemisphere, LayerType, Shape, SiteAnalysis, Zone, ZoneLevel,
};

#[doc(inline)]
pub use zones::{assign_zone, generate_zones, ZoneConfig};

#[doc(inline)]
pub use advisor::{process_event, AdvisorQueue, AdvisorState, AdvisorTip, DesignEvent};

#[doc(inline)]
pub use action_plan::{generate_action_plan, ActionPlan};

#[doc(inline)]
pub use companions::{check_companions, check_companions_with, suggest_guild};

#[doc(inline)]
pub use analysis::{derive_climate_type, sun_path};

#[cfg(feature = "download")]
#[doc(inline)]
pub use analysis::fetch::analyze_site;

#[doc(inline)]
pub use config::{Config, FetchConfig};

#[doc(inline)]
pub use project::{Design, Project};

#[doc(inline)]
pub use validation::{validate_boundary, BoundaryError, BoundaryWarning};
