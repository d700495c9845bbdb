mod design;
mod history;
mod io;
#[allow(clippy::module_inception)]
mod project;

pub use design::{Design, Layer};
pub use history::{DesignHistory, MAX_HISTORY};
pub use project::{Land, Project, PROJECT_VERSION};
