use geo::Point;

/// Mean earth radius in metres.
pub const EARTH_RADIUS: f64 = 6_371_008.8;

/// Great-circle (haversine) distance between two lon/lat points, in metres.
pub fn distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let (lat1, lat2) = (a.y().to_radians(), b.y().to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial bearing from `from` to `to`, clockwise from north, in `[0, 360)`.
pub fn bearing(from: Point<f64>, to: Point<f64>) -> f64 {
    let (lat1, lat2) = (from.y().to_radians(), to.y().to_radians());
    let dlon = (to.x() - from.x()).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Point reached by travelling `distance_m` metres from `origin` along `bearing_deg`.
pub fn destination(origin: Point<f64>, distance_m: f64, bearing_deg: f64) -> Point<f64> {
    let lat1 = origin.y().to_radians();
    let lon1 = origin.x().to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_m / EARTH_RADIUS;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Point::new(lon2.to_degrees(), lat2.to_degrees())
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_zero_for_same_point() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn destination_then_distance_round_trips() {
        let origin = Point::new(151.2, -33.9);
        let dest = destination(origin, 250.0, 37.0);
        assert!((distance(origin, dest) - 250.0).abs() < 1e-6);
        assert!((bearing(origin, dest) - 37.0).abs() < 1e-3);
    }

    #[test]
    fn normalize_wraps_negative_angles() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-1e-18), 0.0);
    }
}
