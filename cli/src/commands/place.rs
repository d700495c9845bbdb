use anyhow::{anyhow, bail, Result};
use comfrey::catalog::{element_type, plant};
use comfrey::io::geojson::parse_position;
use comfrey::{process_event, AdvisorQueue, DesignEvent, Element, Shape};
use serde_json::json;
use tracing::info;

use crate::cli::{Cli, PlaceArgs};

/// Whether `type_id` names a catalog element or a catalog plant.
fn known_type(type_id: &str) -> bool {
    match type_id.strip_prefix("plant:") {
        Some(id) => plant(id).is_some(),
        None => element_type(type_id).is_some(),
    }
}

pub fn run(cli: &Cli, args: &PlaceArgs) -> Result<()> {
    if !known_type(&args.element_type) {
        bail!("[place] unknown element type '{}'", args.element_type);
    }
    let config = super::load_config(cli)?;
    let mut project = super::load_project(&args.target)?;
    let design_id = super::design_id(&project, &args.target)?;
    let position = parse_position(&args.position)?;

    let mut element = Element::from_catalog(args.element_type.as_str(), Shape::Point(position));
    if let Some(label) = &args.label {
        element = element.with_label(label.as_str());
    }

    let element_id = project.edit_design(&design_id, |d| d.place_element(element).id.clone())
        .ok_or_else(|| anyhow!("[place] design '{design_id}' disappeared"))?;
    info!("[place] {} {} at {:?}", args.element_type, element_id, position.x_y());

    let mut zones_generated = None;
    if args.element_type == "house" {
        let design = project.design(&design_id);
        if design.is_some_and(|d| d.zones().is_empty()) {
            zones_generated = project.regenerate_zones(&design_id, &config.zones);
            info!("[place] generated {} zones around the house", zones_generated.unwrap_or(0));
        }
    }

    let design = super::select_design(&project, &args.target)?;
    let placed = design.element(&element_id)
        .ok_or_else(|| anyhow!("[place] element '{element_id}' was not stored"))?;

    let event = DesignEvent::ElementPlaced { element: placed, analysis: project.analysis.as_ref() };
    let mut queue = AdvisorQueue::new();
    queue.enqueue(process_event(&event, &project.advisor_state, design.elements(), design.zones()), &project.advisor_state);

    let output = json!({
        "element": placed,
        "zones_generated": zones_generated,
        "tips": queue.tips(),
    });

    project.save(&args.target.project)?;
    super::print_json(&output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_catalog_types() {
        assert!(known_type("water-tank"));
        assert!(known_type("plant:comfrey"));
        assert!(!known_type("plant:triffid"));
        assert!(!known_type("spaceship"));
    }
}
