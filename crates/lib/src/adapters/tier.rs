//! Tier resolution shared by every adapter.
//!
//! The effective tier is the requested one, else the pack's `tierUsed`, else the adapter's default.
//! Its prompt is looked up first; when missing, the adapter's fallback sources are tried in order.

use crate::skills::{SkillPack, Tier};

use super::AdapterOptions;

/// Where a prompt may come from after the effective tier's own prompt is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSource {
    /// `prompts[tier]` for a fixed tier.
    Tier(Tier),
    /// The pack's `systemPrompt`.
    SystemPrompt,
}

/// The tier an adapter settled on and the prompt body it will embed verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPrompt<'a> {
    pub tier: Tier,
    pub prompt: &'a str,
}

/// Resolve the prompt for one adapter call.
///
/// Never fails: if every source is missing the prompt is empty, which only happens when the
/// producer broke the non-empty `systemPrompt` contract.
pub fn resolve_prompt<'a>(
    pack: &'a SkillPack,
    options: &AdapterOptions,
    default_tier: Tier,
    fallbacks: &[PromptSource],
) -> ResolvedPrompt<'a> {
    let tier = options.tier.or(pack.tier_used).unwrap_or(default_tier);
    let prompt = std::iter::once(PromptSource::Tier(tier))
        .chain(fallbacks.iter().copied())
        .find_map(|source| match source {
            PromptSource::Tier(t) => pack.prompt(t),
            PromptSource::SystemPrompt => {
                Some(pack.system_prompt.as_str()).filter(|p| !p.is_empty())
            }
        })
        .unwrap_or_default();
    ResolvedPrompt { tier, prompt }
}
