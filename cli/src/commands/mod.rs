pub mod advise;
#[cfg(feature = "download")]
pub mod analyze;
pub mod climate;
pub mod companions;
pub mod new;
pub mod place;
pub mod plan;
pub mod sun;
pub mod validate;
pub mod zones;

use anyhow::{anyhow, Context, Result};
use comfrey::{Config, Design, Project};
use serde::Serialize;

use crate::cli::{Cli, ProjectArgs};

/// Config from `--config`, or the defaults.
pub(crate) fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::from_json_file(path),
        None => Ok(Config::default()),
    }
}

pub(crate) fn load_project(args: &ProjectArgs) -> Result<Project> {
    Project::load(&args.project)
}

/// Id of the design `args` names, or of the project's first design.
pub(crate) fn design_id(project: &Project, args: &ProjectArgs) -> Result<String> {
    select_design(project, args).map(|d| d.id.clone())
}

pub(crate) fn select_design<'p>(project: &'p Project, args: &ProjectArgs) -> Result<&'p Design> {
    project.design_or_primary(args.design.as_deref())
        .ok_or_else(|| match &args.design {
            Some(id) => anyhow!("[design] no design with id '{id}' in {}", args.project.display()),
            None => anyhow!("[design] {} has no designs", args.project.display()),
        })
}

/// Pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("[output] failed to serialize result")?;
    println!("{text}");
    Ok(())
}
