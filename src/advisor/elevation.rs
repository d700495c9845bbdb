use geo::Point;

use crate::types::SiteAnalysis;

/// Relative elevation of `position` on a uniformly tilted plane.
///
/// The aspect is the downhill compass direction and the slope sets the
/// gradient, so points further along the aspect come out lower.  Only the
/// ordering of the results is meaningful.  A flat site maps every position to
/// the same value.
pub fn estimate_relative_elevation(position: Point<f64>, analysis: &SiteAnalysis) -> f64 {
    let aspect = analysis.elevation.aspect.to_radians();
    let slope = analysis.elevation.slope.to_radians();

    let (down_x, down_y) = (aspect.sin(), aspect.cos());
    let projection = position.x() * down_x + position.y() * down_y;

    -projection * slope.tan()
}
