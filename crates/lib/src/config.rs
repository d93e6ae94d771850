//! Configuration types and loading.
//!
//! Config is loaded from a JSON file (e.g. `~/.agentic-templates/config.json`). Everything is optional;
//! command-line flags override what is set here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::skills::Tier;

/// Env var that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "AGENTIC_TEMPLATES_CONFIG_PATH";

/// Adapter used when neither the caller nor the config names one.
pub const FALLBACK_ADAPTER: &str = "raw";

/// Top-level application config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Adapter defaults used by `adapt` when flags are omitted.
    #[serde(default)]
    pub adapters: AdaptersConfig,

    /// Where skill packs are looked up by name.
    #[serde(default)]
    pub skills: SkillsConfig,
}

/// Default adapter and tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptersConfig {
    /// Adapter name (raw, cursor, claude-code, copilot). Validated when used, not when loaded.
    pub default: Option<String>,
    /// Tier to render. When unset each adapter uses the pack's tier or its own default.
    pub tier: Option<Tier>,
}

/// Skill pack location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsConfig {
    /// Override the skill root. Relative paths are resolved against the config file's parent.
    /// Omit to use the `skills` directory next to the config file.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Resolve config path from env or default.
pub fn default_config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV).map(PathBuf::from).unwrap_or_else(|_| {
        dirs::home_dir()
            .map(|h| h.join(".agentic-templates").join("config.json"))
            .unwrap_or_else(|| PathBuf::from("config.json"))
    })
}

/// Load config from the given path, or the default. Missing file => default config.
/// Returns the config and the path that was used (for resolving the skills directory).
pub fn load_config(path: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    let path = path.unwrap_or_else(default_config_path);
    let config = if !path.exists() {
        log::debug!("config file not found, using defaults: {}", path.display());
        Config::default()
    } else {
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        serde_json::from_str(&s)
            .with_context(|| format!("parsing config from {}", path.display()))?
    };
    Ok((config, path))
}

fn config_parent(config_path: &Path) -> &Path {
    config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Default skill root when no override is set: `skills` subdirectory of the config file's parent.
pub fn skills_dir(config_path: &Path) -> PathBuf {
    config_parent(config_path).join("skills")
}

/// Resolve the skill root: `config.skills.directory` if set, otherwise the default `skills` subdirectory.
pub fn resolve_skills_dir(config: &Config, config_path: &Path) -> PathBuf {
    match &config.skills.directory {
        Some(d) if !d.as_os_str().is_empty() => {
            if d.is_absolute() {
                d.clone()
            } else {
                config_parent(config_path).join(d)
            }
        }
        _ => skills_dir(config_path),
    }
}

impl Config {
    /// Adapter to render with: the explicit choice, else `adapters.default`, else [`FALLBACK_ADAPTER`].
    pub fn adapter_name<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .or(self.adapters.default.as_deref())
            .unwrap_or(FALLBACK_ADAPTER)
    }

    /// Tier to render: the explicit choice, else `adapters.tier`.
    pub fn tier(&self, requested: Option<Tier>) -> Option<Tier> {
        requested.or(self.adapters.tier)
    }
}
