use anyhow::{anyhow, Context, Result};
use comfrey::io::geojson::{parse_position, read_boundary};
use comfrey::project::Land;
use comfrey::units::{format_area, UnitSystem};
use comfrey::{Project, SiteAnalysis};
use tracing::{info, warn};

use crate::cli::{Cli, NewArgs};

pub fn run(_cli: &Cli, args: &NewArgs) -> Result<()> {
    let boundary = read_boundary(&args.boundary)?;
    if let Ok(Some(warning)) = comfrey::validate_boundary(boundary.polygon()) {
        warn!("[new] {warning}");
    }

    let location = match &args.location {
        Some(text) => parse_position(text)?,
        None => boundary.center().ok_or_else(|| anyhow!("[new] boundary has no centre"))?,
    };

    let analysis = match &args.analysis {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("[new] failed to read {}", path.display()))?;
            Some(serde_json::from_str::<SiteAnalysis>(&text)
                .with_context(|| format!("[new] {} is not a site analysis", path.display()))?)
        }
        None => None,
    };

    let project = Project::new(args.name.as_str(), Land::new(boundary, location), analysis);
    info!("[new] {} ({}) -> {}", project.name, format_area(project.land.area, UnitSystem::Metric), args.output.display());
    project.save(&args.output)?;

    super::print_json(&serde_json::json!({
        "id": project.id,
        "design": project.primary_design().map(|d| d.id.clone()),
        "area_m2": project.land.area.round(),
    }))
}
