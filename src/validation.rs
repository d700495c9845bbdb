//! Boundary polygon validation.
//!
//! Hard failures (too few vertices, crossing edges, non-finite coordinates)
//! are errors and stop a boundary from being used at all.  Out-of-range areas
//! are only warnings: the design can continue but results may be less useful.

use std::fmt;

use geo::{CoordsIter, Intersects, Line, Polygon};
use thiserror::Error;

/// Areas below this produce a "very small" warning (square metres).
pub const MIN_AREA_SQM: f64 = 50.0;
/// Areas above this (50 ha) produce a "very large" warning (square metres).
pub const MAX_AREA_SQM: f64 = 500_000.0;

/// Reasons a polygon cannot be used as a property boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    #[error("Boundary has no coordinates.")]
    NoCoordinates,

    #[error("Boundary must have at least 3 vertices (found {count}).")]
    TooFewVertices { count: usize },

    #[error("Boundary contains coordinates that are not finite numbers.")]
    NonFinite,

    #[error("Your boundary lines cross each other. Please redraw without crossing lines.")]
    SelfIntersecting,
}

/// Soft problems with an otherwise valid boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryWarning {
    TooSmall { area: f64 },
    TooLarge { area: f64 },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::TooSmall { .. } =>
                f.write_str("This property is very small. Zone suggestions may not be meaningful."),
            BoundaryWarning::TooLarge { .. } =>
                f.write_str("This property is very large for detailed permaculture design. Results may be less useful."),
        }
    }
}

/// Number of distinct vertices in the exterior ring (closing vertex excluded).
pub fn vertex_count(polygon: &Polygon<f64>) -> usize {
    let coords = &polygon.exterior().0;
    match coords.len() {
        len if len > 1 && coords[0] == coords[len - 1] => len - 1,
        len => len,
    }
}

/// Whether any two non-adjacent edges of the exterior ring touch or cross.
pub fn has_self_intersection(polygon: &Polygon<f64>) -> bool {
    let edges = polygon.exterior().lines()
        .filter(|line| line.start != line.end)
        .collect::<Vec<Line<f64>>>();
    let n = edges.len();

    (0..n).any(|i| {
        (i + 1..n)
            .filter(|&j| j != i + 1 && !(i == 0 && j == n - 1))
            .any(|j| edges[i].intersects(&edges[j]))
    })
}

/// Structural checks that must pass before any geometry is attempted.
pub fn check_polygon(polygon: &Polygon<f64>) -> Result<(), BoundaryError> {
    if polygon.exterior().0.is_empty() {
        return Err(BoundaryError::NoCoordinates);
    }
    if !polygon.coords_iter().all(|c| c.x.is_finite() && c.y.is_finite()) {
        return Err(BoundaryError::NonFinite);
    }

    let count = vertex_count(polygon);
    if count < 3 {
        return Err(BoundaryError::TooFewVertices { count });
    }
    if has_self_intersection(polygon) {
        return Err(BoundaryError::SelfIntersecting);
    }

    Ok(())
}

/// Validate a boundary polygon, returning a warning for out-of-range areas.
pub fn validate_boundary(polygon: &Polygon<f64>) -> Result<Option<BoundaryWarning>, BoundaryError> {
    check_polygon(polygon)?;

    let area = landgeom::area(polygon);
    if area < MIN_AREA_SQM {
        return Ok(Some(BoundaryWarning::TooSmall { area }));
    }
    if area > MAX_AREA_SQM {
        return Ok(Some(BoundaryWarning::TooLarge { area }));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, LineString};

    #[test]
    fn rejects_two_vertices() {
        let line = Polygon::new(LineString::from(vec![(0.0, 0.0), (0.001, 0.0), (0.0, 0.0)]), vec![]);
        assert_eq!(validate_boundary(&line), Err(BoundaryError::TooFewVertices { count: 2 }));
    }

    #[test]
    fn rejects_empty_ring() {
        let empty = Polygon::new(LineString::new(vec![]), vec![]);
        assert_eq!(check_polygon(&empty), Err(BoundaryError::NoCoordinates));
    }

    #[test]
    fn rejects_bow_tie() {
        let bow_tie = polygon![
            (x: 0.0, y: 0.0), (x: 0.001, y: 0.001), (x: 0.001, y: 0.0), (x: 0.0, y: 0.001),
        ];
        assert_eq!(validate_boundary(&bow_tie), Err(BoundaryError::SelfIntersecting));
    }

    #[test]
    fn rejects_non_finite() {
        let bad = polygon![(x: 0.0, y: 0.0), (x: f64::NAN, y: 0.0), (x: 0.0, y: 0.001)];
        assert_eq!(check_polygon(&bad), Err(BoundaryError::NonFinite));
    }

    #[test]
    fn warns_on_tiny_and_huge_areas() {
        // ~5 m x 5 m
        let tiny = polygon![
            (x: 0.0, y: 0.0), (x: 0.000045, y: 0.0), (x: 0.000045, y: 0.000045), (x: 0.0, y: 0.000045),
        ];
        assert!(matches!(validate_boundary(&tiny), Ok(Some(BoundaryWarning::TooSmall { .. }))));

        // ~1.1 km x 1.1 km
        let huge = polygon![
            (x: 0.0, y: 0.0), (x: 0.01, y: 0.0), (x: 0.01, y: 0.01), (x: 0.0, y: 0.01),
        ];
        assert!(matches!(validate_boundary(&huge), Ok(Some(BoundaryWarning::TooLarge { .. }))));
    }

    #[test]
    fn accepts_ordinary_block() {
        // ~110 m x 110 m
        let block = polygon![
            (x: 0.0, y: 0.0), (x: 0.001, y: 0.0), (x: 0.001, y: 0.001), (x: 0.0, y: 0.001),
        ];
        assert_eq!(validate_boundary(&block), Ok(None));
    }

    #[test]
    fn concave_ring_is_not_self_intersecting() {
        let l_shape = polygon![
            (x: 0.0, y: 0.0), (x: 0.002, y: 0.0), (x: 0.002, y: 0.001),
            (x: 0.001, y: 0.001), (x: 0.001, y: 0.002), (x: 0.0, y: 0.002),
        ];
        assert!(!has_self_intersection(&l_shape));
    }
}
