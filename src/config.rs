use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::palette::FuzzyConfig;
use crate::providers::ThemeMode;

pub const CONFIG_FILE: &str = ".chaindeck.json";

/// User-tunable settings, persisted as JSON next to where the dashboard is
/// launched. Missing file means defaults; unknown fields are ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckConfig {
    pub version: u32,

    #[serde(default)]
    pub fuzzy: FuzzyConfig,

    /// Dispatch history cap; `None` keeps the whole session.
    #[serde(default)]
    pub history_cap: Option<usize>,

    #[serde(default)]
    pub theme: ThemeMode,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            version: 1,
            fuzzy: FuzzyConfig::default(),
            history_cap: None,
            theme: ThemeMode::default(),
        }
    }
}

impl DeckConfig {
    pub fn default_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(path)
            .with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self).context("serialize config")?;
        fs::write(path, json)
            .with_context(|| format!("write config {}", path.display()))
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
