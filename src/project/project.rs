use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};

use crate::advisor::AdvisorState;
use crate::types::{Boundary, SiteAnalysis};
use super::Design;

/// Current on-disk format version.
pub const PROJECT_VERSION: u32 = 1;

/// The property being designed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Land {
    pub boundary: Boundary,
    /// `[lng, lat]` of the site as picked by the user.
    #[serde(with = "crate::io::geojson::position")]
    pub location: Point<f64>,
    /// Square metres.
    pub area: f64,
}

impl Land {
    /// Land record with the area measured from `boundary`.
    pub fn new(boundary: Boundary, location: Point<f64>) -> Self {
        let area = boundary.area();
        Self { boundary, location, area }
    }
}

/// A saved property: its land, analysis, designs and advisor history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub land: Land,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<SiteAnalysis>,
    designs: Vec<Design>,
    #[serde(default)]
    pub advisor_state: AdvisorState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: u32,
}

impl Project {
    /// New project with a single empty design named "Design 1".
    pub fn new(name: impl Into<String>, land: Land, analysis: Option<SiteAnalysis>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            land,
            analysis,
            designs: vec![Design::new("Design 1")],
            advisor_state: AdvisorState::default(),
            created_at: now,
            updated_at: now,
            version: PROJECT_VERSION,
        }
    }

    #[inline] pub fn designs(&self) -> &[Design] { &self.designs }

    #[inline]
    pub fn design(&self, id: &str) -> Option<&Design> { self.designs.iter().find(|d| d.id == id) }

    /// The design a caller works on when none is named: the first one.
    #[inline] pub fn primary_design(&self) -> Option<&Design> { self.designs.first() }

    /// Resolve an optional design id, falling back to the primary design.
    pub fn design_or_primary(&self, id: Option<&str>) -> Option<&Design> {
        match id {
            Some(id) => self.design(id),
            None => self.primary_design(),
        }
    }

    /// Append an empty design and return its id.
    pub fn add_design(&mut self, name: impl Into<String>) -> String {
        let design = Design::new(name);
        let id = design.id.clone();
        self.designs.push(design);
        self.touch();
        id
    }

    /// Run `edit` against a design and bump the project's timestamp.
    /// `None` when no design has that id.
    pub fn edit_design<R>(&mut self, id: &str, edit: impl FnOnce(&mut Design) -> R) -> Option<R> {
        let design = self.designs.iter_mut().find(|d| d.id == id)?;
        let result = edit(design);
        self.touch();
        Some(result)
    }

    /// Regenerate a design's zones around its house.  `None` if the design is
    /// unknown or has no house.
    pub fn regenerate_zones(&mut self, id: &str, config: &crate::zones::ZoneConfig) -> Option<usize> {
        let boundary = self.land.boundary.clone();
        self.edit_design(id, |design| {
            let house = design.house()?;
            Some(design.regenerate_zones(config, house, &boundary).len())
        })
        .flatten()
    }

    #[inline]
    pub fn touch(&mut self) { self.updated_at = Utc::now() }
}

#[cfg(test)]
mod tests {
    use geo::{LineString, Polygon};

    use super::*;
    use crate::types::{Element, Shape};
    use crate::zones::ZoneConfig;

    fn sample_project() -> Project {
        let ring = LineString::from(vec![(0.0, 0.0), (0.0018, 0.0), (0.0018, 0.0018), (0.0, 0.0018), (0.0, 0.0)]);
        let boundary = Boundary::new(Polygon::new(ring, vec![])).unwrap();
        Project::new("Back forty", Land::new(boundary, Point::new(0.0009, 0.0009)), None)
    }

    #[test]
    fn new_project_has_one_design() {
        let project = sample_project();
        assert_eq!(project.designs().len(), 1);
        assert_eq!(project.primary_design().unwrap().name, "Design 1");
        assert_eq!(project.version, PROJECT_VERSION);
        assert!((project.land.area - 40_000.0).abs() / 40_000.0 < 0.02, "{}", project.land.area);
    }

    #[test]
    fn edits_bump_timestamp() {
        let mut project = sample_project();
        let id = project.primary_design().unwrap().id.clone();
        let before = project.updated_at;

        let placed = project.edit_design(&id, |d| {
            d.place_element(Element::from_catalog("house", Shape::Point(Point::new(0.0009, 0.0009)))).id.clone()
        });
        assert!(placed.is_some());
        assert!(project.updated_at >= before);
        assert!(project.edit_design("missing", |_| ()).is_none());
    }

    #[test]
    fn regenerate_needs_a_house() {
        let mut project = sample_project();
        let id = project.primary_design().unwrap().id.clone();
        assert_eq!(project.regenerate_zones(&id, &ZoneConfig::default()), None);

        project.edit_design(&id, |d| {
            d.place_element(Element::from_catalog("house", Shape::Point(Point::new(0.0009, 0.0009))));
        });
        let count = project.regenerate_zones(&id, &ZoneConfig::default()).unwrap();
        assert!(count >= 4);
    }

    #[test]
    fn design_lookup_falls_back_to_primary() {
        let mut project = sample_project();
        let second = project.add_design("Design 2");
        assert_eq!(project.design_or_primary(Some(&second)).unwrap().name, "Design 2");
        assert_eq!(project.design_or_primary(None).unwrap().name, "Design 1");
        assert!(project.design_or_primary(Some("nope")).is_none());
    }
}
