//! Raw adapter: framework-agnostic markdown at `<name>.md`.

use crate::skills::{SkillPack, Tier};

use super::tier::{resolve_prompt, PromptSource};
use super::{metadata_comment, AdapterOptions, AdapterOutput, OutputFile};

const DEFAULT_TIER: Tier = Tier::Standard;
const FALLBACKS: &[PromptSource] = &[PromptSource::SystemPrompt];

pub fn raw_adapter(pack: &SkillPack, options: &AdapterOptions) -> AdapterOutput {
    let resolved = resolve_prompt(pack, options, DEFAULT_TIER, FALLBACKS);
    let path = format!("{}.md", pack.name);
    let content = format!("{}\n\n{}", metadata_comment(pack, resolved.tier), resolved.prompt);

    AdapterOutput {
        summary: format!("Raw skill pack: {} (tier: {})", path, resolved.tier),
        files: vec![OutputFile { path, content }],
    }
}
