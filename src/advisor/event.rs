use geo::Point;

use crate::types::{Element, SiteAnalysis, Zone};

/// Something the user just did to the design.
#[derive(Debug, Clone, Copy)]
pub enum DesignEvent<'a> {
    ElementPlaced { element: &'a Element, analysis: Option<&'a SiteAnalysis> },
    ElementMoved { element: &'a Element, previous: Point<f64>, analysis: Option<&'a SiteAnalysis> },
    ElementDeleted { element: &'a Element },
    ZoneCreated { zone: &'a Zone },
    AnalysisComplete { analysis: &'a SiteAnalysis },
    WizardStepEntered { step: &'a str },
    DesignReviewRequested,
}

impl<'a> DesignEvent<'a> {
    /// The element being placed or moved.
    #[inline]
    pub fn element(&self) -> Option<&'a Element> {
        match *self {
            DesignEvent::ElementPlaced { element, .. } | DesignEvent::ElementMoved { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Site analysis carried by the event, if any.
    #[inline]
    pub fn analysis(&self) -> Option<&'a SiteAnalysis> {
        match *self {
            DesignEvent::ElementPlaced { analysis, .. } | DesignEvent::ElementMoved { analysis, .. } => analysis,
            DesignEvent::AnalysisComplete { analysis } => Some(analysis),
            _ => None,
        }
    }
}
