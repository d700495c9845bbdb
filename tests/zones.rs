// Zone generation invariants over randomly placed square properties.

use std::f64::consts::PI;

use comfrey::zones::{generate_zones, generate_zones_with, Radii, ZoneConfig};
use comfrey::{Boundary, ZoneLevel};
use geo::Point;
use landgeom::destination;
use proptest::prelude::*;

fn square(center: Point<f64>, size_m: f64) -> Boundary {
    Boundary::new(landgeom::rectangle(center, size_m, size_m)).unwrap()
}

#[test]
fn large_property_reaches_zone_four_in_the_corners() {
    let center = Point::new(153.02, -27.47);
    let boundary = square(center, 300.0);
    let radii = ZoneConfig::default().radii_for(boundary.area());
    assert_eq!((radii.zone1, radii.zone2, radii.zone3), (25.0, 80.0, Some(200.0)));

    let zones = generate_zones(center, &boundary, boundary.area());
    let levels = zones.iter().map(|z| z.level.get()).collect::<Vec<_>>();
    assert_eq!(levels, vec![0, 1, 2, 3, 4]);

    let zone1 = zones[1].area();
    assert!((zone1 - PI * 25.0 * 25.0).abs() / (PI * 625.0) < 0.03, "zone 1 area was {zone1}");
}

#[test]
fn config_radii_override_the_defaults() {
    let center = Point::new(-3.2, 55.9);
    let boundary = square(center, 100.0);
    let config = ZoneConfig { small: Radii::new(10.0, 30.0, Some(45.0)), ..ZoneConfig::default() };

    let zones = generate_zones_with(&config, center, &boundary, boundary.area());
    let zone1 = zones.iter().find(|z| z.level == ZoneLevel::DAILY).unwrap();
    assert!((zone1.area() - PI * 100.0).abs() / (PI * 100.0) < 0.03);
}

#[test]
fn zones_serialize_as_geojson() {
    let center = Point::new(-1.5, 52.0);
    let zones = generate_zones(center, &square(center, 300.0), 90_000.0);
    let collection = comfrey::io::geojson::zones_to_geojson(&zones);

    let features = collection["features"].as_array().unwrap();
    assert_eq!(features.len(), zones.len());
    assert_eq!(features[0]["properties"]["id"], "zone-0");
    assert_eq!(features[0]["geometry"]["type"], "Polygon");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn zones_are_ordered_nested_and_inside_the_boundary(
        lng in -170.0..170.0_f64,
        lat in -60.0..60.0_f64,
        side in 60.0..400.0_f64,
        dx in -0.1..0.1_f64,
        dy in -0.1..0.1_f64,
    ) {
        let center = Point::new(lng, lat);
        let boundary = square(center, side);
        let house = destination(destination(center, dx * side, 90.0), dy * side, 0.0);

        let zones = generate_zones(house, &boundary, boundary.area());
        let levels = zones.iter().map(|z| z.level).collect::<Vec<_>>();

        // Unique, ascending, generated levels only, house zone always present.
        prop_assert_eq!(levels.first().copied(), Some(ZoneLevel::HOME));
        prop_assert!(levels.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(levels.iter().all(|l| *l <= ZoneLevel::MINIMAL));

        // Rings 1..=4 do not overlap, so their areas add up to at most the boundary.
        let total = boundary.area();
        let rings: f64 = zones.iter().filter(|z| z.level > ZoneLevel::HOME).map(|z| z.area()).sum();
        prop_assert!(rings <= total * 1.02, "rings {} > boundary {}", rings, total);
        prop_assert!(zones.iter().all(|z| z.area() <= total * 1.02));

        let area_of = |level: ZoneLevel| zones.iter().find(|z| z.level == level).map(|z| z.area()).unwrap_or(0.0);
        prop_assert!(area_of(ZoneLevel::HOME) <= area_of(ZoneLevel::DAILY));
        prop_assert!(area_of(ZoneLevel::DAILY) <= area_of(ZoneLevel::FREQUENT));
    }

    #[test]
    fn regeneration_is_idempotent(side in 60.0..300.0_f64, lat in -50.0..50.0_f64) {
        let center = Point::new(10.0, lat);
        let boundary = square(center, side);
        let first = generate_zones(center, &boundary, boundary.area());
        let second = generate_zones(center, &boundary, boundary.area());
        prop_assert_eq!(first, second);
    }
}
