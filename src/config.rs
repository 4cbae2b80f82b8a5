//! Persisted settings: searcher enabled-states and scanner API keys.
//!
//! Settings live in a JSON file under the user's home directory and are
//! read fresh on every top-level action, so concurrent edits are picked
//! up without any in-core caching or locking.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Per-searcher enabled flags keyed by searcher name.
///
/// An absent key means enabled: services are on by default and only
/// explicit opt-outs are stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearcherStates(HashMap<String, bool>);

impl SearcherStates {
    pub fn is_enabled(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(true)
    }

    pub fn set(&mut self, name: &str, enabled: bool) {
        self.0.insert(name.to_string(), enabled);
    }
}

/// API keys for the scanning services, one optional slot per scanner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiKeys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urlscan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virustotal: Option<String>,
}

/// Top-level persisted configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub searcher_states: SearcherStates,
    #[serde(default)]
    pub api_keys: ApiKeys,
}

impl Config {
    /// Default config location: ~/.spyglass/config.json.
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".spyglass")
            .join("config.json")
    }

    /// Load from the default location, applying environment overrides.
    ///
    /// A missing file is not an error: defaults mean every searcher is
    /// enabled and no scanner is provisioned.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, applying environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid config: {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Environment variables take precedence over file-stored keys.
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("SPYGLASS_URLSCAN_KEY") {
            self.api_keys.urlscan = Some(key);
        }
        if let Ok(key) = std::env::var("SPYGLASS_VT_KEY") {
            self.api_keys.virustotal = Some(key);
        }
    }
}
