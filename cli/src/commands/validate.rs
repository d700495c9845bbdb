use anyhow::{bail, Result};
use comfrey::io::geojson::read_polygon;
use comfrey::units::{format_area, UnitSystem};
use comfrey::{validate_boundary, Boundary};
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, ValidateArgs};

#[derive(Serialize)]
struct Report {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    area_m2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(_cli: &Cli, args: &ValidateArgs) -> Result<()> {
    info!("[validate] reading {}", args.boundary.display());
    let polygon = read_polygon(&args.boundary)?;
    let system = if args.imperial { UnitSystem::Imperial } else { UnitSystem::Metric };

    let report = match validate_boundary(&polygon) {
        Ok(warning) => {
            let area = Boundary::new(polygon)?.area();
            Report {
                valid: true,
                area_m2: Some(area.round()),
                area: Some(format_area(area, system)),
                warning: warning.map(|w| w.to_string()),
                error: None,
            }
        }
        Err(err) => Report { valid: false, area_m2: None, area: None, warning: None, error: Some(err.to_string()) },
    };

    super::print_json(&report)?;
    if let Some(error) = &report.error {
        bail!("[validate] {}: {error}", args.boundary.display());
    }
    Ok(())
}
