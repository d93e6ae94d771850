//! Initialize the configuration directory: create it, write a default config, and extract the
//! bundled skill packs.
//!
//! Layout mirrors `crates/lib/config/`: `config/skills/` → `<config dir>/skills/`.

use anyhow::{Context, Result};
use include_dir::{include_dir, Dir};
use std::path::{Path, PathBuf};

use crate::config;

static BUNDLED_SKILLS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/config/skills");

/// Create the config directory and default files if they do not exist.
/// - Writes `config.json` with `{}` if missing.
/// - Extracts bundled skill packs into the resolved skills directory if it does not exist.
///
/// Returns the skills directory.
pub fn init_config_dir(config_path: &Path) -> Result<PathBuf> {
    let config_dir = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(config_dir)
        .with_context(|| format!("creating config directory {}", config_dir.display()))?;

    if !config_path.exists() {
        std::fs::write(config_path, b"{}")
            .with_context(|| format!("writing default config to {}", config_path.display()))?;
        log::info!("created default config at {}", config_path.display());
    }

    let (cfg, _) = config::load_config(Some(config_path.to_path_buf()))?;
    let skills_dir = config::resolve_skills_dir(&cfg, config_path);
    if !skills_dir.exists() {
        std::fs::create_dir_all(&skills_dir)
            .with_context(|| format!("creating skills directory {}", skills_dir.display()))?;
        if let Err(e) = BUNDLED_SKILLS.extract(&skills_dir) {
            anyhow::bail!(
                "extracting bundled skill packs to {}: {}",
                skills_dir.display(),
                e
            );
        }
        log::info!("extracted bundled skill packs to {}", skills_dir.display());
    } else {
        log::debug!("skills directory already exists at {}, skipping", skills_dir.display());
    }

    Ok(skills_dir)
}
