//! Run configuration: exempt competitions and regional quota rules
//!
//! Lookup order:
//! 1. `--config <file>` (must exist)
//! 2. `<data dir>/verify.toml`
//! 3. `<user config dir>/sports-data-verify/verify.toml`
//! 4. Built-in defaults

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "verify.toml";

/// Default name of the intentionally empty placeholder competition
pub const DEFAULT_PLACEHOLDER: &str = "vacation";

/// Advisory rule: teams homed in `regions` should be in `expected` competitions.
/// A region is named by its slug or as `country/region`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuotaRule {
    pub regions: BTreeSet<String>,
    pub expected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    pub placeholder: String,
    /// Intentionally incomplete competitions
    pub exempt: BTreeSet<String>,
    #[serde(rename = "quota")]
    pub quotas: Vec<QuotaRule>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            exempt: BTreeSet::new(),
            quotas: Vec::new(),
        }
    }
}

impl VerifyConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&content).with_context(|| format!("In config file: {:?}", path))
    }

    /// Find and load the configuration for a dataset
    pub fn resolve(explicit: Option<&Path>, data_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidates = [Some(data_dir.join(CONFIG_FILE)), user_config_path()];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "using config file");
                return Self::load(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn is_placeholder(&self, competition: &str) -> bool {
        competition == self.placeholder
    }

    /// Excluded from mechanics and membership checks
    pub fn is_exempt(&self, competition: &str) -> bool {
        self.is_placeholder(competition) || self.exempt.contains(competition)
    }
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sports-data-verify").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
