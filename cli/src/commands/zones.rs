use anyhow::{ensure, Result};
use comfrey::io::geojson::{parse_position, read_boundary, zones_to_geojson};
use comfrey::zones::generate_zones_with;
use tracing::info;

use crate::cli::{Cli, ZonesArgs};

pub fn run(cli: &Cli, args: &ZonesArgs) -> Result<()> {
    let config = super::load_config(cli)?;
    let boundary = read_boundary(&args.boundary)?;
    let house = parse_position(&args.house)?;

    let area = args.area.unwrap_or_else(|| boundary.area());
    ensure!(area.is_finite() && area > 0.0, "[zones] property area must be positive, got {area}");

    info!("[zones] generating zones for {:.0} m2 around {:?}", area, house.x_y());
    let zones = generate_zones_with(&config.zones, house, &boundary, area);

    super::print_json(&zones_to_geojson(&zones))
}
