use geo::Point;
use tracing::debug;

use crate::catalog::TIPS;
use crate::types::{Element, Hemisphere, SiteAnalysis, Zone};
use super::{estimate_relative_elevation, AdvisorState, AdvisorTip, ClimateScope, Condition, DesignEvent,
    Exposure, RelativeHeight, Trigger};

/// Tips from the built-in catalog that apply to `event`, highest priority first.
#[inline]
pub fn process_event(
    event: &DesignEvent<'_>,
    state: &AdvisorState,
    elements: &[Element],
    zones: &[Zone],
) -> Vec<&'static AdvisorTip> {
    process_event_with(TIPS, event, state, elements, zones)
}

/// Match `event` against an arbitrary tip table.
///
/// Dismissed tips are never returned.  Ties in priority keep table order.
pub fn process_event_with<'c>(
    catalog: &'c [AdvisorTip],
    event: &DesignEvent<'_>,
    state: &AdvisorState,
    elements: &[Element],
    _zones: &[Zone],
) -> Vec<&'c AdvisorTip> {
    let analysis = event.analysis();

    let mut matched = catalog.iter()
        .filter(|tip| !state.is_dismissed(tip.id))
        .filter(|tip| trigger_matches(&tip.trigger, event))
        .filter(|tip| climate_matches(tip, analysis))
        .filter(|tip| hemisphere_matches(tip, analysis))
        .filter(|tip| condition_met(tip, event, elements, analysis))
        .collect::<Vec<_>>();

    matched.sort_by(|a, b| b.priority.cmp(&a.priority));

    debug!(matched = matched.len(), "[process_event] matched tips");
    matched
}

// ---------------------------------------------------------------------------
// trigger, climate, hemisphere
// ---------------------------------------------------------------------------

pub(crate) fn trigger_matches(trigger: &Trigger, event: &DesignEvent<'_>) -> bool {
    match (trigger, event) {
        (Trigger::ElementPlaced { element_type } | Trigger::ElementPosition { element_type, .. }, _) =>
            event.element().is_some_and(|e| e.type_id == *element_type),
        (Trigger::ElementNear { .. }, _) => event.element().is_some(),
        (Trigger::ZoneCreated { zone_level }, DesignEvent::ZoneCreated { zone }) => zone.level == *zone_level,
        (Trigger::AnalysisComplete, DesignEvent::AnalysisComplete { .. }) => true,
        (Trigger::WizardStep { step }, DesignEvent::WizardStepEntered { step: entered }) => *step == *entered,
        (Trigger::DesignReview, DesignEvent::DesignReviewRequested) => true,
        _ => false,
    }
}

/// Missing analysis never blocks a tip here.
pub(crate) fn climate_matches(tip: &AdvisorTip, analysis: Option<&SiteAnalysis>) -> bool {
    match (tip.climate, analysis) {
        (ClimateScope::All, _) | (_, None) => true,
        (ClimateScope::Only(climate), Some(analysis)) => analysis.climate.kind == climate,
    }
}

pub(crate) fn hemisphere_matches(tip: &AdvisorTip, analysis: Option<&SiteAnalysis>) -> bool {
    match (tip.hemisphere, analysis) {
        (None, _) | (_, None) => true,
        (Some(hemisphere), Some(analysis)) => analysis.climate.hemisphere == hemisphere,
    }
}

// ---------------------------------------------------------------------------
// conditions
// ---------------------------------------------------------------------------

/// The tip's own condition.  Without one, `element_near` triggers fall back
/// to the proximity check and everything else passes.
pub(crate) fn condition_met(
    tip: &AdvisorTip,
    event: &DesignEvent<'_>,
    elements: &[Element],
    analysis: Option<&SiteAnalysis>,
) -> bool {
    let Some(condition) = tip.condition else {
        return match tip.trigger {
            Trigger::ElementNear { element_a, element_b, max_distance } =>
                element_near(event, elements, element_a, element_b, max_distance),
            _ => true,
        };
    };

    match condition {
        Condition::ElevationCompare { element_a, element_b, expected } =>
            elevation_compare(event, elements, analysis, element_a, element_b, expected),
        Condition::DistanceFromHouse { max_meters } =>
            distance_from_house(event, elements, max_meters),
        Condition::SunExposure { aspect } =>
            analysis.is_some_and(|analysis| sun_exposure(analysis, aspect)),
        Condition::ClimateIs { climate } =>
            analysis.is_some_and(|analysis| analysis.climate.kind == climate),
        Condition::HemisphereIs { hemisphere } =>
            analysis.is_some_and(|analysis| analysis.climate.hemisphere == hemisphere),
    }
}

/// Whether the event's element has an element of the paired type (other
/// than itself) within `max_distance` metres.  An element of neither type
/// never pairs.
pub(crate) fn element_near(
    event: &DesignEvent<'_>,
    elements: &[Element],
    element_a: &str,
    element_b: &str,
    max_distance: f64,
) -> bool {
    let Some(element) = event.element() else { return false };
    let paired = match element.type_id.as_str() {
        t if t == element_a => element_b,
        t if t == element_b => element_a,
        _ => return false,
    };
    let Some(from) = element.position() else { return false };

    elements.iter()
        .filter(|other| other.type_id == paired && other.id != element.id)
        .filter_map(Element::position)
        .any(|to| landgeom::distance(from, to) <= max_distance)
}

/// Strict comparison of estimated relative elevations; fails closed.
pub(crate) fn elevation_compare(
    event: &DesignEvent<'_>,
    elements: &[Element],
    analysis: Option<&SiteAnalysis>,
    element_a: &str,
    element_b: &str,
    expected: RelativeHeight,
) -> bool {
    let Some(analysis) = analysis else { return false };
    let (Some(a), Some(b)) = (position_of(element_a, event, elements), position_of(element_b, event, elements)) else {
        return false;
    };

    let (height_a, height_b) = (estimate_relative_elevation(a, analysis), estimate_relative_elevation(b, analysis));
    match expected {
        RelativeHeight::Higher => height_a > height_b,
        RelativeHeight::Lower => height_a < height_b,
    }
}

/// Passes when there is no house to measure from.
pub(crate) fn distance_from_house(event: &DesignEvent<'_>, elements: &[Element], max_meters: f64) -> bool {
    let Some(element) = event.element() else { return true };
    let Some(house) = elements.iter().find(|e| e.type_id == "house") else { return true };

    match (house.position(), element.position()) {
        (Some(house), Some(position)) => landgeom::distance(house, position) <= max_meters,
        _ => true,
    }
}

/// Equator-facing aspects are sunny.  Placeholder terrain never matches.
pub(crate) fn sun_exposure(analysis: &SiteAnalysis, expected: Exposure) -> bool {
    if analysis.elevation.placeholder { return false }

    let aspect = analysis.elevation.aspect;
    let sunny = match analysis.climate.hemisphere {
        Hemisphere::Northern => (90.0..=270.0).contains(&aspect),
        Hemisphere::Southern => aspect >= 270.0 || aspect <= 90.0,
    };

    match expected {
        Exposure::Sunny => sunny,
        Exposure::Shaded => !sunny,
    }
}

/// Position of the event's element if it has `type_id`, else of the first
/// design element that does.
fn position_of(type_id: &str, event: &DesignEvent<'_>, elements: &[Element]) -> Option<Point<f64>> {
    event.element()
        .filter(|e| e.type_id == type_id)
        .or_else(|| elements.iter().find(|e| e.type_id == type_id))
        .and_then(Element::position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::TipActionType;
    use crate::types::{ClimateType, LayerType, Shape, ZoneLevel};

    fn at(type_id: &str, position: Point<f64>) -> Element {
        Element::new(type_id, Shape::Point(position), LayerType::Infrastructure)
    }

    fn origin() -> Point<f64> { Point::new(151.0, -33.0) }

    fn ids(tips: &[&AdvisorTip]) -> Vec<&'static str> {
        tips.iter().map(|t| t.id).collect()
    }

    #[test]
    fn water_tank_gets_downhill_tip_first() {
        let tank = at("water-tank", origin());
        let event = DesignEvent::ElementPlaced { element: &tank, analysis: None };
        let tips = process_event(&event, &AdvisorState::default(), std::slice::from_ref(&tank), &[]);

        let ids = ids(&tips);
        let pos = ids.iter().position(|id| *id == "water-tank-placed").unwrap();
        assert_eq!(pos, 0);
        assert!(pos < ids.len() - 1);
        assert_eq!(tips[0].action.map(|a| a.kind), Some(TipActionType::MoveElementUphill));
    }

    #[test]
    fn dismissed_tips_are_dropped() {
        let tank = at("water-tank", origin());
        let event = DesignEvent::ElementPlaced { element: &tank, analysis: None };
        let mut state = AdvisorState::default();
        state.dismiss("water-tank-placed");

        let tips = process_event(&event, &state, &[], &[]);
        assert!(!ids(&tips).contains(&"water-tank-placed"));
        assert!(ids(&tips).contains(&"tank-uphill-good"));
    }

    #[test]
    fn output_is_priority_ordered_with_stable_ties() {
        let catalog = [
            AdvisorTip::new("low", Trigger::DesignReview, 10, "", "", ""),
            AdvisorTip::new("tie-first", Trigger::DesignReview, 50, "", "", ""),
            AdvisorTip::new("high", Trigger::DesignReview, 90, "", "", ""),
            AdvisorTip::new("tie-second", Trigger::DesignReview, 50, "", "", ""),
            AdvisorTip::new("other", Trigger::AnalysisComplete, 99, "", "", ""),
        ];
        let tips = process_event_with(&catalog, &DesignEvent::DesignReviewRequested, &AdvisorState::default(), &[], &[]);
        assert_eq!(ids(&tips), vec!["high", "tie-first", "tie-second", "low"]);
    }

    #[test]
    fn climate_and_hemisphere_scope() {
        let northern = SiteAnalysis::sample(ClimateType::Arid, Hemisphere::Northern, 2.0, 180.0);
        let event = DesignEvent::AnalysisComplete { analysis: &northern };
        let tips = process_event(&event, &AdvisorState::default(), &[], &[]);
        let ids = ids(&tips);

        assert!(ids.contains(&"analysis-arid"));
        assert!(!ids.contains(&"analysis-tropical"));
        // aspect 180 in the north faces the sun
        assert!(ids.contains(&"analysis-sunny-slope"));
        assert!(!ids.contains(&"analysis-shaded-slope"));

        let house = at("house", origin());
        let placed = DesignEvent::ElementPlaced { element: &house, analysis: Some(&northern) };
        let ids = process_event(&placed, &AdvisorState::default(), &[], &[]).iter().map(|t| t.id).collect::<Vec<_>>();
        assert!(ids.contains(&"house-faces-south"));
        assert!(!ids.contains(&"house-faces-north"));
    }

    #[test]
    fn scoped_tips_pass_without_analysis() {
        let house = at("house", origin());
        let event = DesignEvent::ElementPlaced { element: &house, analysis: None };
        let ids = ids(&process_event(&event, &AdvisorState::default(), &[], &[]));
        assert!(ids.contains(&"house-faces-south") && ids.contains(&"house-faces-north"));
    }

    #[test]
    fn zone_and_wizard_triggers() {
        let boundary = crate::types::Boundary::new(landgeom::rectangle(origin(), 100.0, 100.0)).unwrap();
        let zones = crate::zones::generate_zones(origin(), &boundary, 10_000.0);
        let zone1 = zones.iter().find(|z| z.level == ZoneLevel::DAILY).unwrap();

        let tips = process_event(&DesignEvent::ZoneCreated { zone: zone1 }, &AdvisorState::default(), &[], &zones);
        assert_eq!(ids(&tips), vec!["zone1-created"]);

        let tips = process_event(&DesignEvent::WizardStepEntered { step: "boundary" }, &AdvisorState::default(), &[], &[]);
        assert_eq!(ids(&tips), vec!["wizard-boundary"]);

        let tips = process_event(&DesignEvent::WizardStepEntered { step: "nope" }, &AdvisorState::default(), &[], &[]);
        assert!(tips.is_empty());
    }

    #[test]
    fn deleted_element_triggers_nothing() {
        let tank = at("water-tank", origin());
        let tips = process_event(&DesignEvent::ElementDeleted { element: &tank }, &AdvisorState::default(), &[], &[]);
        assert!(tips.is_empty());
    }

    #[test]
    fn flat_site_never_compares() {
        let flat = SiteAnalysis::sample(ClimateType::Temperate, Hemisphere::Northern, 0.0, 180.0);
        let tank = at("water-tank", origin());
        let bed = at("garden-bed", landgeom::destination(origin(), 10.0, 180.0));
        let elements = [tank.clone(), bed.clone()];
        let event = DesignEvent::ElementPlaced { element: &tank, analysis: Some(&flat) };

        for expected in [RelativeHeight::Higher, RelativeHeight::Lower] {
            assert!(!elevation_compare(&event, &elements, Some(&flat), "water-tank", "garden-bed", expected));
        }
    }

    #[test]
    fn gravity_tip_follows_elevation_not_distance() {
        // south-facing slope: north is uphill
        let slope = SiteAnalysis::sample(ClimateType::Temperate, Hemisphere::Northern, 6.0, 180.0);
        let tank = at("water-tank", landgeom::destination(origin(), 10.0, 0.0));
        let bed = at("garden-bed", origin());
        let elements = [tank.clone(), bed.clone()];

        let event = DesignEvent::ElementPlaced { element: &tank, analysis: Some(&slope) };
        let tips = ids(&process_event(&event, &AdvisorState::default(), &elements, &[]));
        assert!(tips.contains(&"tank-near-garden"));
        assert!(!tips.contains(&"tank-below-garden"));

        // the elevation condition replaces the 30 m proximity check
        let far_tank = at("water-tank", landgeom::destination(origin(), 60.0, 0.0));
        let elements = [far_tank.clone(), bed.clone()];
        let event = DesignEvent::ElementPlaced { element: &far_tank, analysis: Some(&slope) };
        let tips = ids(&process_event(&event, &AdvisorState::default(), &elements, &[]));
        assert!(tips.contains(&"tank-near-garden"));
        assert!(!tips.contains(&"tank-below-garden"));

        // downhill, far away
        let low_tank = at("water-tank", landgeom::destination(origin(), 60.0, 180.0));
        let elements = [low_tank.clone(), bed];
        let event = DesignEvent::ElementPlaced { element: &low_tank, analysis: Some(&slope) };
        let tips = ids(&process_event(&event, &AdvisorState::default(), &elements, &[]));
        assert!(tips.contains(&"tank-below-garden"));
        assert!(!tips.contains(&"tank-near-garden"));
    }

    #[test]
    fn proximity_applies_only_without_condition() {
        let catalog = [
            AdvisorTip::new("bare", Trigger::ElementNear { element_a: "compost", element_b: "chicken-coop", max_distance: 15.0 }, 50, "", "", ""),
            AdvisorTip::new("scoped", Trigger::ElementNear { element_a: "compost", element_b: "chicken-coop", max_distance: 15.0 }, 40, "", "", "")
                .when(Condition::DistanceFromHouse { max_meters: 500.0 }),
        ];
        let coop = at("chicken-coop", origin());
        let compost = at("compost", landgeom::destination(origin(), 100.0, 90.0));
        let elements = [coop.clone(), compost.clone()];

        let event = DesignEvent::ElementPlaced { element: &compost, analysis: None };
        let tips = process_event_with(&catalog, &event, &AdvisorState::default(), &elements, &[]);
        assert_eq!(ids(&tips), vec!["scoped"]);
    }

    #[test]
    fn proximity_ignores_self_and_unrelated_types() {
        let coop = at("chicken-coop", origin());
        let compost = at("compost", landgeom::destination(origin(), 8.0, 90.0));
        let shed = at("shed", landgeom::destination(origin(), 2.0, 90.0));

        let event = DesignEvent::ElementMoved { element: &coop, previous: origin(), analysis: None };
        assert!(element_near(&event, &[coop.clone(), compost.clone()], "compost", "chicken-coop", 15.0));
        assert!(!element_near(&event, std::slice::from_ref(&coop), "compost", "chicken-coop", 15.0));

        let event = DesignEvent::ElementPlaced { element: &shed, analysis: None };
        assert!(!element_near(&event, &[shed.clone(), compost], "compost", "chicken-coop", 15.0));
    }

    #[test]
    fn distance_from_house_defaults_to_pass() {
        let compost = at("compost", landgeom::destination(origin(), 40.0, 0.0));
        let event = DesignEvent::ElementPlaced { element: &compost, analysis: None };
        assert!(distance_from_house(&event, std::slice::from_ref(&compost), 30.0));

        let house = at("house", origin());
        assert!(!distance_from_house(&event, &[house.clone(), compost.clone()], 30.0));
        assert!(distance_from_house(&event, &[house, compost.clone()], 50.0));
    }

    #[test]
    fn sun_exposure_by_hemisphere() {
        let north = SiteAnalysis::sample(ClimateType::Temperate, Hemisphere::Northern, 3.0, 200.0);
        let south = SiteAnalysis::sample(ClimateType::Temperate, Hemisphere::Southern, 3.0, 200.0);
        assert!(sun_exposure(&north, Exposure::Sunny));
        assert!(sun_exposure(&south, Exposure::Shaded));

        let south_north_facing = SiteAnalysis::sample(ClimateType::Temperate, Hemisphere::Southern, 3.0, 10.0);
        assert!(sun_exposure(&south_north_facing, Exposure::Sunny));

        let mut unknown = north.clone();
        unknown.elevation.placeholder = true;
        assert!(!sun_exposure(&unknown, Exposure::Sunny) && !sun_exposure(&unknown, Exposure::Shaded));
    }

    #[test]
    fn analysis_conditions_fail_closed() {
        let tip = AdvisorTip::new("t", Trigger::DesignReview, 1, "", "", "")
            .when(Condition::ClimateIs { climate: ClimateType::Arid });
        assert!(!condition_met(&tip, &DesignEvent::DesignReviewRequested, &[], None));

        let arid = SiteAnalysis::sample(ClimateType::Arid, Hemisphere::Southern, 1.0, 0.0);
        let event = DesignEvent::AnalysisComplete { analysis: &arid };
        assert!(condition_met(&tip, &event, &[], Some(&arid)));
    }
}
