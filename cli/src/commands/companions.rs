use anyhow::{anyhow, Result};
use comfrey::types::ClimateType;
use comfrey::{check_companions, suggest_guild};
use tracing::info;

use crate::cli::{Cli, CompanionsArgs};

pub fn run(_cli: &Cli, args: &CompanionsArgs) -> Result<()> {
    let project = super::load_project(&args.target)?;

    if let Some(center) = &args.guild {
        let climate: Option<[ClimateType; 1]> = project.analysis.as_ref().map(|a| [a.climate.kind]);
        let guild = suggest_guild(center, climate.as_ref().map(|c| &c[..]))
            .ok_or_else(|| anyhow!("[companions] unknown plant '{center}'"))?;
        return super::print_json(&guild);
    }

    let design = super::select_design(&project, &args.target)?;
    let check = check_companions(design.elements());
    info!("[companions] {} good pairs, {} bad pairs", check.good.len(), check.bad.len());

    super::print_json(&check)
}
