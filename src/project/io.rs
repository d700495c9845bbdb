use std::path::Path;

use anyhow::{ensure, Context, Result};

use super::{Project, PROJECT_VERSION};

impl Project {
    /// Parse a project from JSON text, rejecting formats newer than this build.
    pub fn from_json(text: &str) -> Result<Self> {
        let project: Project = serde_json::from_str(text).context("[Project.from_json] invalid project JSON")?;
        ensure!(
            project.version <= PROJECT_VERSION,
            "[Project.from_json] project version {} is newer than supported version {PROJECT_VERSION}",
            project.version
        );
        Ok(project)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("[Project.to_json] failed to serialize project")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[Project.load] failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("[Project.load] {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("[Project.save] failed to write {}", path.display()))
    }
}
