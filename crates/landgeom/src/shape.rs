use geo::{Coord, Intersects, LineString, Point, Polygon};

use crate::sphere::{destination, EARTH_RADIUS};

/// Regular polygon approximating a circle of `radius_m` metres around `center`.
///
/// Vertices are laid out counter-clockwise; the ring is closed.
pub fn circle(center: Point<f64>, radius_m: f64, steps: usize) -> Polygon<f64> {
    let steps = steps.max(3);
    let mut ring = (0..steps)
        .map(|i| {
            let bearing = -360.0 * i as f64 / steps as f64;
            destination(center, radius_m, bearing).into()
        })
        .collect::<Vec<Coord<f64>>>();
    ring.push(ring[0]);

    Polygon::new(LineString(ring), vec![])
}

/// Axis-aligned rectangle `width_m` wide (east-west) and `height_m` tall
/// (north-south) centred on `center`.
pub fn rectangle(center: Point<f64>, width_m: f64, height_m: f64) -> Polygon<f64> {
    let north = destination(center, height_m / 2.0, 0.0).y();
    let south = destination(center, height_m / 2.0, 180.0).y();
    let east = destination(center, width_m / 2.0, 90.0).x();
    let west = destination(center, width_m / 2.0, 270.0).x();

    // SW -> SE -> NE -> NW -> SW
    Polygon::new(
        LineString::from(vec![
            (west, south),
            (east, south),
            (east, north),
            (west, north),
            (west, south),
        ]),
        vec![],
    )
}

/// Whether `point` lies inside `polygon` (boundary inclusive).
#[inline]
pub fn contains(polygon: &Polygon<f64>, point: Point<f64>) -> bool {
    polygon.intersects(&point)
}

/// Vertex average of the exterior ring (closing vertex excluded).
pub fn ring_centroid(polygon: &Polygon<f64>) -> Option<Point<f64>> {
    let coords = &polygon.exterior().0;
    let ring = match coords.len() {
        0 => return None,
        len if len > 1 && coords[0] == coords[len - 1] => &coords[..len - 1],
        _ => &coords[..],
    };

    let n = ring.len() as f64;
    let (sx, sy) = ring.iter().fold((0.0, 0.0), |(sx, sy), c| (sx + c.x, sy + c.y));
    Some(Point::new(sx / n, sy / n))
}

/// Shortest distance in metres from `point` to the edge of `polygon`;
/// zero when the point is inside.
pub fn distance_to_polygon(point: Point<f64>, polygon: &Polygon<f64>) -> f64 {
    if contains(polygon, point) { return 0.0 }

    // Local equirectangular frame centred on the query point.
    let scale_y = EARTH_RADIUS * 1f64.to_radians();
    let scale_x = scale_y * point.y().to_radians().cos();
    let project = |c: Coord<f64>| Coord {
        x: (c.x - point.x()) * scale_x,
        y: (c.y - point.y()) * scale_y,
    };

    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .flat_map(|ring| ring.lines())
        .map(|line| segment_distance_to_origin(project(line.start), project(line.end)))
        .fold(f64::INFINITY, f64::min)
}

/// Distance from the origin to segment `a`-`b` in a planar frame.
#[inline]
fn segment_distance_to_origin(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d = b - a;
    let len2 = d.x * d.x + d.y * d.y;
    let t = if len2 > 0.0 { (-(a.x * d.x + a.y * d.y) / len2).clamp(0.0, 1.0) } else { 0.0 };
    let closest = Coord { x: a.x + t * d.x, y: a.y + t * d.y };
    closest.x.hypot(closest.y)
}
