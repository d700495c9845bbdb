use anyhow::{anyhow, Result};
use comfrey::sun_path;

use crate::cli::{Cli, SunArgs};

pub fn run(_cli: &Cli, args: &SunArgs) -> Result<()> {
    let sun = sun_path(args.lat, args.lng, args.year)
        .ok_or_else(|| anyhow!("[sun] no sun path for ({}, {}) in {}", args.lat, args.lng, args.year))?;
    super::print_json(&sun)
}
