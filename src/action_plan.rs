//! Phased implementation plan derived from a design.
//!
//! The plan is recomputed on demand and never stored.

use std::collections::BTreeMap;

use serde::Serialize;
use smallvec::SmallVec;

use crate::catalog::element_type;
use crate::types::{Category, ClimateType, Element, ElementType, LayerType, SiteAnalysis};

/// How important an item is to get done in its phase.  Orders essential first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Essential,
    Recommended,
    Optional,
}

impl ActionPriority {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Structure | Category::Water => ActionPriority::Essential,
            Category::Plant => ActionPriority::Recommended,
            Category::Animal | Category::Path | Category::Utility => ActionPriority::Optional,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionItem {
    pub element_id: String,
    pub description: String,
    /// Layer the element is drawn on.
    pub category: LayerType,
    /// Zone level, `0` when unassigned.
    pub zone: u8,
    pub priority: ActionPriority,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionPhase {
    pub year: u8,
    pub title: String,
    pub items: Vec<ActionItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionPlan {
    pub phases: Vec<ActionPhase>,
}

impl ActionPlan {
    #[inline] pub fn is_empty(&self) -> bool { self.phases.is_empty() }

    /// Total number of items across all phases.
    pub fn len(&self) -> usize { self.phases.iter().map(|p| p.items.len()).sum() }
}

/// Title for an implementation year.
pub fn phase_title(year: u8) -> String {
    match year {
        1 => "Foundation & Infrastructure".into(),
        2 => "Productive Systems".into(),
        3 => "Fine-Tuning & Expansion".into(),
        n => format!("Year {n}"),
    }
}

fn verb(category: Category) -> &'static str {
    match category {
        Category::Structure => "Build",
        Category::Water => "Install",
        Category::Plant => "Plant",
        Category::Animal => "Set up",
        Category::Path => "Lay out",
        Category::Utility => "Establish",
    }
}

/// One-line instruction such as "Install Water Tank in zone 2 on the north facing slope".
pub fn describe(kind: &ElementType, element: &Element, analysis: Option<&SiteAnalysis>) -> String {
    let label = element.properties.label.as_deref().unwrap_or(kind.name);
    let zone = element.zone().map_or(0, |z| z.get());

    let mut qualifiers = SmallVec::<[String; 2]>::new();
    if let Some(analysis) = analysis {
        if !analysis.elevation.placeholder {
            qualifiers.push(format!("on the {} slope", analysis.elevation.aspect_label.to_lowercase()));
        }
        match (analysis.climate.kind, kind.category) {
            (ClimateType::Arid, Category::Water) =>
                qualifiers.push("to maximize water harvesting in the arid climate".into()),
            (ClimateType::Tropical, Category::Plant) =>
                qualifiers.push("suited to the tropical climate".into()),
            _ => {}
        }
    }

    let mut description = format!("{} {}", verb(kind.category), label);
    if zone > 0 {
        description.push_str(&format!(" in zone {zone}"));
    }
    if !qualifiers.is_empty() {
        description.push(' ');
        description.push_str(&qualifiers.join(", "));
    }
    description
}

/// Group elements into implementation phases.
///
/// Elements whose type is not in the catalog are skipped.  Items are sorted by
/// zone, then priority; phases by year.
pub fn generate_action_plan(elements: &[Element], analysis: Option<&SiteAnalysis>) -> ActionPlan {
    let mut phases = BTreeMap::<u8, Vec<ActionItem>>::new();

    for element in elements {
        let Some(kind) = element_type(&element.type_id) else { continue };
        phases.entry(kind.implementation_phase).or_default().push(ActionItem {
            element_id: element.id.clone(),
            description: describe(kind, element, analysis),
            category: element.properties.layer,
            zone: element.zone().map_or(0, |z| z.get()),
            priority: ActionPriority::for_category(kind.category),
        });
    }

    ActionPlan {
        phases: phases.into_iter()
            .map(|(year, mut items)| {
                items.sort_by_key(|item| (item.zone, item.priority));
                ActionPhase { year, title: phase_title(year), items }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Hemisphere, Shape, ZoneLevel};
    use geo::Point;

    fn placed(type_id: &str, zone: Option<ZoneLevel>) -> Element {
        let mut element = Element::from_catalog(type_id, Shape::Point(Point::new(0.0, 0.0)));
        element.properties.zone = zone;
        element
    }

    #[test]
    fn empty_design_has_no_phases() {
        let analysis = SiteAnalysis::sample(ClimateType::Arid, Hemisphere::Southern, 3.0, 0.0);
        assert!(generate_action_plan(&[], Some(&analysis)).phases.is_empty());
        assert!(generate_action_plan(&[], None).is_empty());
    }

    #[test]
    fn phases_and_ordering() {
        let elements = vec![
            placed("chicken-coop", Some(ZoneLevel::FREQUENT)),
            placed("fruit-tree", Some(ZoneLevel::FREQUENT)),
            placed("compost", Some(ZoneLevel::DAILY)),
            placed("path", Some(ZoneLevel::DAILY)),
            placed("water-tank", Some(ZoneLevel::DAILY)),
            placed("house", Some(ZoneLevel::HOME)),
            placed("plant:tomato", Some(ZoneLevel::DAILY)),
            placed("mystery", None),
        ];
        let plan = generate_action_plan(&elements, None);

        let years = plan.phases.iter().map(|p| p.year).collect::<Vec<_>>();
        assert_eq!(years, vec![1, 2, 3]);
        assert_eq!(plan.phases[0].title, "Foundation & Infrastructure");
        assert_eq!(plan.phases[2].title, "Fine-Tuning & Expansion");
        assert_eq!(plan.len(), 6);

        let phase1 = plan.phases[0].items.iter().map(|i| i.description.as_str()).collect::<Vec<_>>();
        assert_eq!(phase1, vec!["Build House", "Install Water Tank in zone 1", "Lay out Path in zone 1"]);
        assert_eq!(plan.phases[0].items[1].priority, ActionPriority::Essential);
        assert_eq!(plan.phases[0].items[2].priority, ActionPriority::Optional);

        let phase2 = plan.phases[1].items.iter().map(|i| i.description.as_str()).collect::<Vec<_>>();
        assert_eq!(phase2, vec!["Establish Compost in zone 1", "Plant Fruit Tree in zone 2"]);
    }

    #[test]
    fn site_qualifiers() {
        let mut arid = SiteAnalysis::sample(ClimateType::Arid, Hemisphere::Southern, 3.0, 0.0);
        arid.elevation.aspect_label = "North facing".into();
        let tank = placed("water-tank", Some(ZoneLevel::FREQUENT)).with_label("Roof tank");

        let plan = generate_action_plan(std::slice::from_ref(&tank), Some(&arid));
        assert_eq!(
            plan.phases[0].items[0].description,
            "Install Roof tank in zone 2 on the north facing slope, to maximize water harvesting in the arid climate",
        );

        // no elevation data, and no climate phrase for plants in arid country
        arid.elevation.placeholder = true;
        let tree = placed("fruit-tree", None);
        let plan = generate_action_plan(&[tree], Some(&arid));
        assert_eq!(plan.phases[0].items[0].description, "Plant Fruit Tree");
    }

    #[test]
    fn tropical_plants_get_climate_phrase() {
        let mut wet = SiteAnalysis::sample(ClimateType::Tropical, Hemisphere::Northern, 0.0, 0.0);
        wet.elevation.placeholder = true;
        let bed = placed("garden-bed", Some(ZoneLevel::DAILY));
        let plan = generate_action_plan(&[bed], Some(&wet));
        assert_eq!(plan.phases[0].items[0].description, "Plant Garden Bed in zone 1 suited to the tropical climate");
    }

    #[test]
    fn titles_beyond_three() {
        assert_eq!(phase_title(4), "Year 4");
        assert_eq!(phase_title(2), "Productive Systems");
    }
}
