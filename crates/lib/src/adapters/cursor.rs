//! Cursor adapter: a `.cursor/rules/<name>.mdc` rule with YAML front matter.
//!
//! A single rendered skill is never always-applied; Cursor attaches it by description.

use crate::frontmatter::{self, FrontMatterValue};
use crate::skills::{SkillPack, Tier};

use super::tier::{resolve_prompt, PromptSource};
use super::{AdapterOptions, AdapterOutput, OutputFile};

const DEFAULT_TIER: Tier = Tier::Standard;
const FALLBACKS: &[PromptSource] = &[PromptSource::SystemPrompt];
const RULES_DIR: &str = ".cursor/rules";

pub fn cursor_adapter(pack: &SkillPack, options: &AdapterOptions) -> AdapterOutput {
    let resolved = resolve_prompt(pack, options, DEFAULT_TIER, FALLBACKS);
    let front_matter = frontmatter::render(&[
        ("description", FrontMatterValue::Text(&pack.description.short)),
        ("alwaysApply", FrontMatterValue::Bool(false)),
    ]);
    let path = format!("{}/{}.mdc", RULES_DIR, pack.name);

    AdapterOutput {
        summary: format!("Cursor rule: {} (tier: {})", path, resolved.tier),
        files: vec![OutputFile {
            path,
            content: front_matter + resolved.prompt,
        }],
    }
}
