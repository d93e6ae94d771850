//! Adapters: render a [`SkillPack`] into the files a specific assistant reads.
//!
//! Every adapter has the same shape, `fn(&SkillPack, &AdapterOptions) -> AdapterOutput`, and is pure:
//! same input, same output, no I/O. Writing the returned files is the caller's job (see [`crate::output`]).

mod claude_code;
mod copilot;
mod cursor;
mod raw;
mod registry;
mod tier;

pub use claude_code::claude_code_adapter;
pub use copilot::copilot_adapter;
pub use cursor::cursor_adapter;
pub use raw::raw_adapter;
pub use registry::{get_adapter, AdapterError, AdapterKind, ADAPTERS};
pub use tier::{resolve_prompt, PromptSource, ResolvedPrompt};

use crate::skills::{SkillPack, Tier};
use serde::Serialize;

/// Signature shared by all adapters.
pub type Adapter = fn(&SkillPack, &AdapterOptions) -> AdapterOutput;

/// Per-call options. Only `tier` is recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdapterOptions {
    pub tier: Option<Tier>,
}

impl AdapterOptions {
    pub fn with_tier(tier: Tier) -> Self {
        Self { tier: Some(tier) }
    }
}

/// A file to write, relative to the target project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    pub path: String,
    pub content: String,
}

/// What an adapter produced. `files` is ordered by write precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterOutput {
    pub files: Vec<OutputFile>,
    /// One line for humans; not meant to be parsed.
    pub summary: String,
}

/// HTML comment line carrying the pack's identity, shared by raw and claude-code.
fn metadata_comment(pack: &SkillPack, tier: Tier) -> String {
    format!(
        "<!-- skill: {} v{} | tier: {} | category: {} -->",
        pack.name, pack.version, tier, pack.category
    )
}
