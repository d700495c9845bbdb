use anyhow::{Context, Result};
use comfrey::analyze_site;
use tracing::info;

use crate::cli::{AnalyzeArgs, Cli};

pub fn run(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let config = super::load_config(cli)?;

    info!("[analyze] fetching climate and terrain for ({}, {})", args.lat, args.lng);
    let analysis = analyze_site(args.lat, args.lng, &config.fetch)
        .with_context(|| format!("[analyze] site analysis failed for ({}, {})", args.lat, args.lng))?;

    if let Some(path) = &args.output {
        let text = serde_json::to_string_pretty(&analysis).context("[analyze] failed to serialize analysis")?;
        std::fs::write(path, text).with_context(|| format!("[analyze] failed to write {}", path.display()))?;
        info!("[analyze] wrote {}", path.display());
    }

    super::print_json(&analysis)
}
