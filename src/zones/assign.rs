use geo::{BoundingRect, Point, Rect};
use rstar::{RTree, RTreeObject, AABB};

use crate::types::{Element, Zone, ZoneLevel};

/// A zone's bounding box in the R-tree, associated with the zone by index.
#[derive(Debug, Clone)]
struct ZoneBox {
    idx: usize,
    bbox: Rect<f64>,
}

impl RTreeObject for ZoneBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// Spatial lookup from a point to the zone level it falls in.
#[derive(Debug)]
pub struct ZoneIndex<'a> {
    zones: &'a [Zone],
    rtree: RTree<ZoneBox>,
}

impl<'a> ZoneIndex<'a> {
    pub fn new(zones: &'a [Zone]) -> Self {
        Self {
            rtree: RTree::bulk_load(
                zones.iter().enumerate()
                    .filter_map(|(idx, zone)| zone.geometry.bounding_rect().map(|bbox| ZoneBox { idx, bbox }))
                    .collect()
            ),
            zones,
        }
    }

    #[inline] pub fn is_empty(&self) -> bool { self.zones.is_empty() }

    /// Level of the lowest zone containing `point`, or of the nearest zone
    /// when the point is outside all of them.  `None` only without zones.
    pub fn level_at(&self, point: Point<f64>) -> Option<ZoneLevel> {
        let containing = self.rtree
            .locate_in_envelope_intersecting(&AABB::from_point([point.x(), point.y()]))
            .map(|b| &self.zones[b.idx])
            .filter(|zone| zone.contains(point))
            .map(|zone| zone.level)
            .min();

        containing.or_else(|| self.nearest(point))
    }

    fn nearest(&self, point: Point<f64>) -> Option<ZoneLevel> {
        self.zones.iter()
            .map(|zone| (landgeom::distance_to_polygon(point, &zone.geometry), zone.level))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(_, level)| level)
    }
}

/// Zone level for a single point.
#[inline]
pub fn assign_zone(point: Point<f64>, zones: &[Zone]) -> Option<ZoneLevel> {
    ZoneIndex::new(zones).level_at(point)
}

/// Recompute the zone level of every element from its representative point.
/// Elements without a position keep no zone.
pub fn assign_zones(elements: &mut [Element], zones: &[Zone]) {
    let index = ZoneIndex::new(zones);
    for element in elements {
        element.properties.zone = element.position().and_then(|p| index.level_at(p));
    }
}
