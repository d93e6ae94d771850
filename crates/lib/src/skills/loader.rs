//! Load skill packs from disk: each pack is a directory with `skill.yaml` and `prompts/<tier>.md`.
//! A root directory of packs is scanned one level deep; packs that fail to load are skipped with a warning.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::pack::{SkillDescription, SkillPack, Tier};

const MANIFEST_FILE: &str = "skill.yaml";
const PROMPTS_DIR: &str = "prompts";
const MAX_NAME_LEN: usize = 64;

/// Order used to pick `systemPrompt` when the chosen tier has no prompt file.
const SYSTEM_PROMPT_FALLBACK: [Tier; 3] = [Tier::Standard, Tier::Minimal, Tier::Comprehensive];

#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("skill pack not found: {0}")]
    NotFound(PathBuf),
    #[error("invalid skill pack at {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// `skill.yaml` as written by pack authors.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SkillManifest {
    name: String,
    version: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    description: SkillDescription,
    #[serde(default)]
    context_budget: BTreeMap<Tier, u32>,
    /// Tier to render when the caller does not ask for one.
    #[serde(default)]
    default_tier: Option<Tier>,
    #[serde(default)]
    tools: Vec<String>,
    #[serde(default)]
    composable_with: BTreeMap<String, String>,
    #[serde(default)]
    conflicts_with: Vec<String>,
    #[serde(default)]
    requires_tools: bool,
    #[serde(default)]
    requires_memory: bool,
}

/// Load one skill pack from `dir`. `tier` overrides the manifest's `default_tier`
/// (itself defaulting to standard) when choosing `tierUsed` and `systemPrompt`.
pub fn load_skill_pack(dir: &Path, tier: Option<Tier>) -> Result<SkillPack, SkillError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(SkillError::NotFound(dir.to_path_buf()));
    }
    let raw = read(&manifest_path)?;
    let manifest: SkillManifest =
        serde_yaml::from_str(&raw).map_err(|source| SkillError::Manifest {
            path: manifest_path.clone(),
            source,
        })?;

    validate_name(&manifest.name).map_err(|reason| invalid(dir, reason))?;
    if manifest.description.short.trim().is_empty() {
        return Err(invalid(dir, "description.short must not be empty".to_string()));
    }

    let mut prompts = BTreeMap::new();
    for t in Tier::ALL {
        let path = dir.join(PROMPTS_DIR).join(format!("{}.md", t));
        if !path.is_file() {
            continue;
        }
        let body = read(&path)?;
        let body = body.trim_end().to_string();
        if !body.is_empty() {
            prompts.insert(t, body);
        }
    }
    if prompts.is_empty() {
        return Err(invalid(
            dir,
            format!("no prompt files under {}/", PROMPTS_DIR),
        ));
    }

    // Left unset unless chosen, so each adapter applies its own default tier.
    let tier_used = tier.or(manifest.default_tier);
    let system_prompt = tier_used
        .and_then(|t| prompts.get(&t))
        .or_else(|| SYSTEM_PROMPT_FALLBACK.iter().find_map(|t| prompts.get(t)))
        .cloned()
        .unwrap_or_default();
    log::debug!(
        "loaded skill pack {} v{} from {} (tier {:?})",
        manifest.name,
        manifest.version,
        dir.display(),
        tier_used
    );

    Ok(SkillPack {
        name: manifest.name,
        version: manifest.version,
        category: manifest.category,
        tags: manifest.tags,
        description: manifest.description,
        context_budget: manifest.context_budget,
        prompts,
        system_prompt,
        tier_used,
        tools: manifest.tools,
        composable_with: manifest.composable_with,
        conflicts_with: manifest.conflicts_with,
        requires_tools: manifest.requires_tools,
        requires_memory: manifest.requires_memory,
    })
}

/// Load every pack directly under `root`, sorted by name. A missing or unreadable root yields
/// no packs; anything other than a missing root is logged.
pub fn load_skill_packs(root: &Path) -> Vec<SkillPack> {
    let mut out = Vec::new();
    let read_dir = match std::fs::read_dir(root) {
        Ok(d) => d,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("reading skills directory {}: {}", root.display(), e);
            }
            return out;
        }
    };
    for entry in read_dir.flatten() {
        let path = entry.path();
        if !path.join(MANIFEST_FILE).is_file() {
            continue;
        }
        match load_skill_pack(&path, None) {
            Ok(pack) => out.push(pack),
            Err(e) => log::warn!("skipping skill pack at {}: {}", path.display(), e),
        }
    }
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

/// Resolve a CLI skill argument: an existing directory wins, otherwise a pack name under `skills_dir`.
pub fn resolve_skill_dir(arg: &str, skills_dir: &Path) -> PathBuf {
    let direct = PathBuf::from(arg);
    if direct.join(MANIFEST_FILE).is_file() {
        direct
    } else {
        skills_dir.join(arg)
    }
}

fn read(path: &Path) -> Result<String, SkillError> {
    std::fs::read_to_string(path).map_err(|source| SkillError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(dir: &Path, reason: String) -> SkillError {
    SkillError::Invalid {
        path: dir.to_path_buf(),
        reason,
    }
}

fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if name.len() > MAX_NAME_LEN {
        return Err(format!("name exceeds {} chars", MAX_NAME_LEN));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("name must be lowercase letters, numbers, hyphens only".to_string());
    }
    Ok(())
}
