use geo::{Point, Polygon};
use landgeom::Clip;
use tracing::{debug, warn};

use crate::types::{Boundary, Zone, ZoneLevel};
use super::ZoneConfig;

/// Generate zones 0-4 around `house` with the default configuration.
#[inline]
pub fn generate_zones(house: Point<f64>, boundary: &Boundary, property_area: f64) -> Vec<Zone> {
    generate_zones_with(&ZoneConfig::default(), house, boundary, property_area)
}

/// Generate concentric zones around `house`, clipped to `boundary`.
///
/// Levels come back in ascending order.  A level whose geometry ends up empty
/// is omitted, so the list may have gaps.  Zone 0 is always present.
pub fn generate_zones_with(config: &ZoneConfig, house: Point<f64>, boundary: &Boundary, property_area: f64) -> Vec<Zone> {
    let boundary = boundary.polygon();
    let radii = config.radii_for(property_area);
    let disk = |radius: f64| landgeom::circle(house, radius, config.circle_steps);

    debug!(area = property_area, ?radii, "[generate_zones] selected radii");

    let footprint = landgeom::rectangle(house, config.house_width, config.house_height);
    let zone0 = clip_to(&footprint, boundary).unwrap_or(footprint);

    let zone1 = clip_to(&disk(radii.zone1), boundary);

    let zone2_outer = clip_to(&disk(radii.zone2), boundary);
    let zone2 = match (&zone2_outer, &zone1) {
        (Some(outer), Some(inner)) => subtract(outer, inner),
        (Some(outer), None) => Some(outer.clone()),
        (None, _) => None,
    };

    // Innermost region that zone 3 must exclude.
    let inner3 = zone2_outer.as_ref().or(zone1.as_ref()).unwrap_or(&zone0);
    let zone3_outer = match radii.zone3 {
        Some(radius) => clip_to(&disk(radius), boundary),
        None => Some(boundary.clone()),
    };
    let zone3 = zone3_outer.as_ref().and_then(|outer| subtract(outer, inner3));

    let inner4 = match (&zone3, &zone3_outer) {
        (Some(_), Some(outer)) => outer,
        _ => inner3,
    };
    let zone4 = subtract(boundary, inner4)
        .filter(|residual| landgeom::area(residual) > config.min_residual_area);

    let zones = [
        (ZoneLevel::HOME, Some(zone0)),
        (ZoneLevel::DAILY, zone1),
        (ZoneLevel::FREQUENT, zone2),
        (ZoneLevel::OCCASIONAL, zone3),
        (ZoneLevel::MINIMAL, zone4),
    ]
    .into_iter()
    .filter_map(|(level, geometry)| geometry.map(|g| Zone::new(level, g)))
    .collect::<Vec<_>>();

    debug!(levels = zones.len(), "[generate_zones] done");
    zones
}

/// Clip `subject` to `boundary`.  `None` when they do not overlap; the
/// unclipped subject when the boolean operation fails.
fn clip_to(subject: &Polygon<f64>, boundary: &Polygon<f64>) -> Option<Polygon<f64>> {
    match landgeom::intersect(subject, boundary) {
        Clip::Polygon(polygon) => Some(polygon),
        Clip::Empty => None,
        Clip::Failed => {
            warn!("[generate_zones] intersection failed, keeping unclipped geometry");
            Some(subject.clone())
        }
    }
}

/// `outer` minus `inner`.  `None` when nothing is left or the operation fails.
fn subtract(outer: &Polygon<f64>, inner: &Polygon<f64>) -> Option<Polygon<f64>> {
    match landgeom::difference(outer, inner) {
        Clip::Polygon(polygon) => Some(polygon),
        Clip::Empty => None,
        Clip::Failed => {
            warn!("[generate_zones] difference failed, skipping zone");
            None
        }
    }
}
