//! Copilot adapter: `.github/copilot-instructions.md`.
//!
//! Copilot truncates or ignores long instruction files, so this adapter defaults to the minimal
//! tier and falls back to it before the (possibly large) system prompt. Length is not enforced.

use crate::skills::{SkillPack, Tier};

use super::tier::{resolve_prompt, PromptSource};
use super::{AdapterOptions, AdapterOutput, OutputFile};

const DEFAULT_TIER: Tier = Tier::Minimal;
const FALLBACKS: &[PromptSource] = &[PromptSource::Tier(Tier::Minimal), PromptSource::SystemPrompt];
const OUTPUT_PATH: &str = ".github/copilot-instructions.md";

pub fn copilot_adapter(pack: &SkillPack, options: &AdapterOptions) -> AdapterOutput {
    let resolved = resolve_prompt(pack, options, DEFAULT_TIER, FALLBACKS);
    let content = [
        "# Copilot Instructions".to_string(),
        String::new(),
        "## Active Skill".to_string(),
        String::new(),
        format!("**{}** v{} ({})", pack.name, pack.version, pack.category),
        pack.description.short.clone(),
        String::new(),
        "---".to_string(),
        String::new(),
        resolved.prompt.to_string(),
    ]
    .join("\n");

    AdapterOutput {
        summary: format!(
            "Copilot: {} with {} (tier: {})",
            OUTPUT_PATH, pack.name, resolved.tier
        ),
        files: vec![OutputFile {
            path: OUTPUT_PATH.to_string(),
            content,
        }],
    }
}
