use anyhow::{anyhow, bail, Result};
use comfrey::io::geojson::parse_position;
use comfrey::{process_event, AdvisorQueue, DesignEvent, Element, ZoneLevel};
use serde_json::json;
use tracing::info;

use crate::cli::{AdviseArgs, Cli};

pub fn run(_cli: &Cli, args: &AdviseArgs) -> Result<()> {
    let mut project = super::load_project(&args.target)?;
    let design = super::select_design(&project, &args.target)?;

    let element = |id: &str| -> Result<&Element> {
        design.element(id).ok_or_else(|| anyhow!("[advise] no element with id '{id}' in design '{}'", design.id))
    };
    let analysis = project.analysis.as_ref();

    let event = if let Some(id) = &args.placed {
        DesignEvent::ElementPlaced { element: element(id)?, analysis }
    } else if let Some(id) = &args.moved {
        let from = args.from.as_deref().ok_or_else(|| anyhow!("[advise] --moved needs --from"))?;
        DesignEvent::ElementMoved { element: element(id)?, previous: parse_position(from)?, analysis }
    } else if let Some(id) = &args.deleted {
        DesignEvent::ElementDeleted { element: element(id)? }
    } else if let Some(level) = args.zone {
        let level = ZoneLevel::new(level).ok_or_else(|| anyhow!("[advise] zone level {level} is out of range"))?;
        let zone = design.zones().iter().find(|z| z.level == level)
            .ok_or_else(|| anyhow!("[advise] design '{}' has no {level}", design.id))?;
        DesignEvent::ZoneCreated { zone }
    } else if args.analysis {
        let analysis = analysis.ok_or_else(|| anyhow!("[advise] project has no site analysis"))?;
        DesignEvent::AnalysisComplete { analysis }
    } else if let Some(step) = &args.wizard_step {
        DesignEvent::WizardStepEntered { step }
    } else if args.review {
        DesignEvent::DesignReviewRequested
    } else {
        bail!("[advise] no event given");
    };

    let matched = process_event(&event, &project.advisor_state, design.elements(), design.zones());
    info!("[advise] {} tips matched", matched.len());

    let mut queue = AdvisorQueue::new();
    queue.enqueue(matched, &project.advisor_state);

    let output = json!({
        "active": queue.active(),
        "queue": queue.tips(),
    });

    if args.mark_seen && !queue.is_empty() {
        for tip in queue.tips() {
            project.advisor_state.mark_seen(tip.id);
        }
        project.touch();
        project.save(&args.target.project)?;
    }

    super::print_json(&output)
}
