use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::zones::ZoneConfig;

/// Endpoints and limits for the site-analysis services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Daily weather archive (Open-Meteo compatible).
    pub climate_url: String,
    /// Point elevation lookup (Open-Meteo compatible).
    pub elevation_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            climate_url: "https://archive-api.open-meteo.com/v1/archive".into(),
            elevation_url: "https://api.open-meteo.com/v1/elevation".into(),
            timeout_secs: 10,
            user_agent: concat!("comfrey/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl FetchConfig {
    #[inline] pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}

/// All tunables, loadable from a single JSON file.  Missing sections use defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub zones: ZoneConfig,
    pub fetch: FetchConfig,
}

impl Config {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[config] read {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("[config] parse {}", path.display()))
    }
}
