//! Claude Code adapter: a root-level `CLAUDE.md` that the assistant reads automatically.

use crate::skills::{SkillPack, Tier};

use super::tier::{resolve_prompt, PromptSource};
use super::{metadata_comment, AdapterOptions, AdapterOutput, OutputFile};

const DEFAULT_TIER: Tier = Tier::Standard;
const FALLBACKS: &[PromptSource] = &[PromptSource::SystemPrompt];
const OUTPUT_PATH: &str = "CLAUDE.md";

pub fn claude_code_adapter(pack: &SkillPack, options: &AdapterOptions) -> AdapterOutput {
    let resolved = resolve_prompt(pack, options, DEFAULT_TIER, FALLBACKS);
    let header = [
        "# CLAUDE.md".to_string(),
        String::new(),
        metadata_comment(pack, resolved.tier),
        String::new(),
        format!("## Installed Skill: {}", pack.name),
        String::new(),
        format!("**{}**", pack.description.short),
        String::new(),
        "---".to_string(),
    ]
    .join("\n");

    AdapterOutput {
        summary: format!(
            "Claude Code: {} with {} (tier: {})",
            OUTPUT_PATH, pack.name, resolved.tier
        ),
        files: vec![OutputFile {
            path: OUTPUT_PATH.to_string(),
            content: format!("{}\n\n{}", header, resolved.prompt),
        }],
    }
}
