use anyhow::{ensure, Result};
use comfrey::derive_climate_type;
use serde_json::json;

use crate::cli::{Cli, ClimateArgs};

pub fn run(_cli: &Cli, args: &ClimateArgs) -> Result<()> {
    ensure!((-90.0..=90.0).contains(&args.lat), "[climate] latitude {} is out of range", args.lat);
    ensure!(args.rainfall >= 0.0, "[climate] rainfall cannot be negative");

    let (kind, hemisphere) = derive_climate_type(args.coldest, args.warmest, args.rainfall, args.lat);
    super::print_json(&json!({ "type": kind, "hemisphere": hemisphere }))
}
