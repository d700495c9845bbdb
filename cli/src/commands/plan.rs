use anyhow::Result;
use comfrey::generate_action_plan;
use tracing::info;

use crate::cli::{Cli, ProjectArgs};

pub fn run(_cli: &Cli, args: &ProjectArgs) -> Result<()> {
    let project = super::load_project(args)?;
    let design = super::select_design(&project, args)?;

    let plan = generate_action_plan(design.elements(), project.analysis.as_ref());
    info!("[plan] {} items over {} phases", plan.len(), plan.phases.len());

    super::print_json(&plan)
}
