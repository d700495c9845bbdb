use serde::{Serialize, Serializer};

use crate::types::{ClimateType, Hemisphere, ZoneLevel};

/// What kind of design event a tip reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    /// An element of `element_type` is placed or moved.
    ElementPlaced { element_type: &'static str },
    /// An `element_a` or `element_b` is placed or moved within `max_distance`
    /// metres of an element of the other type.
    ElementNear { element_a: &'static str, element_b: &'static str, max_distance: f64 },
    /// An element of `element_type` is placed or moved.  `check` is advisory.
    ElementPosition { element_type: &'static str, check: PositionCheck },
    ZoneCreated { zone_level: ZoneLevel },
    AnalysisComplete,
    WizardStep { step: &'static str },
    DesignReview,
}

/// Directional placement hint carried by [`Trigger::ElementPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionCheck {
    Uphill,
    Downhill,
    Sunny,
    Shaded,
    Windward,
    Leeward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeHeight {
    Higher,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Exposure {
    Sunny,
    Shaded,
}

/// Extra predicate a tip must satisfy after its trigger matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    ElevationCompare { element_a: &'static str, element_b: &'static str, expected: RelativeHeight },
    DistanceFromHouse { max_meters: f64 },
    /// Never met while the elevation data is a placeholder, whatever the aspect.
    SunExposure { aspect: Exposure },
    ClimateIs { climate: ClimateType },
    HemisphereIs { hemisphere: Hemisphere },
}

/// Climates a tip applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateScope {
    All,
    Only(ClimateType),
}

impl Serialize for ClimateScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ClimateScope::All => serializer.serialize_str("all"),
            ClimateScope::Only(climate) => serializer.serialize_str(climate.to_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TipActionType {
    MoveElementUphill,
    RotateElementToSun,
    SuggestPosition,
    OpenLearnMore,
}

/// One-click follow-up offered with a tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TipAction {
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: TipActionType,
}

/// A catalog rule: when it fires and what it says.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdvisorTip {
    pub id: &'static str,
    pub trigger: Trigger,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    pub climate: ClimateScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hemisphere: Option<Hemisphere>,
    pub headline: &'static str,
    pub explanation: &'static str,
    pub short_reminder: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learn_more: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<TipAction>,
    /// Display order, higher first (1-100).
    pub priority: u8,
}

impl AdvisorTip {
    /// An unconditional tip for every climate and hemisphere.
    pub const fn new(
        id: &'static str,
        trigger: Trigger,
        priority: u8,
        headline: &'static str,
        explanation: &'static str,
        short_reminder: &'static str,
    ) -> Self {
        Self {
            id,
            trigger,
            condition: None,
            climate: ClimateScope::All,
            hemisphere: None,
            headline,
            explanation,
            short_reminder,
            learn_more: None,
            action: None,
            priority,
        }
    }

    pub const fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub const fn climate(mut self, climate: ClimateType) -> Self {
        self.climate = ClimateScope::Only(climate);
        self
    }

    pub const fn hemisphere(mut self, hemisphere: Hemisphere) -> Self {
        self.hemisphere = Some(hemisphere);
        self
    }

    pub const fn learn_more(mut self, text: &'static str) -> Self {
        self.learn_more = Some(text);
        self
    }

    pub const fn action(mut self, label: &'static str, kind: TipActionType) -> Self {
        self.action = Some(TipAction { label, kind });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_serialize_tagged() {
        let near = Trigger::ElementNear { element_a: "water-tank", element_b: "garden-bed", max_distance: 30.0 };
        let json = serde_json::to_value(near).unwrap();
        assert_eq!(json["type"], "element_near");
        assert_eq!(json["max_distance"], 30.0);

        let zone = serde_json::to_value(Trigger::ZoneCreated { zone_level: ZoneLevel::DAILY }).unwrap();
        assert_eq!(zone["zone_level"], 1);
    }

    #[test]
    fn builder_sets_optional_parts() {
        let tip = AdvisorTip::new("t", Trigger::DesignReview, 10, "h", "e", "s")
            .when(Condition::DistanceFromHouse { max_meters: 5.0 })
            .climate(ClimateType::Arid)
            .hemisphere(Hemisphere::Southern)
            .action("Go", TipActionType::OpenLearnMore);

        let json = serde_json::to_value(tip).unwrap();
        assert_eq!(json["climate"], "arid");
        assert_eq!(json["hemisphere"], "southern");
        assert_eq!(json["condition"]["type"], "distance_from_house");
        assert_eq!(json["action"]["type"], "open_learn_more");
        assert!(json.get("learn_more").is_none());
    }
}
