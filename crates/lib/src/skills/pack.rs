//! SkillPack: the normalized value every adapter consumes.
//!
//! Producers (the loader, tests, other tools) build it once; adapters only read it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Prompt size variant, in order of increasing context budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Minimal,
    Standard,
    Comprehensive,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Minimal, Tier::Standard, Tier::Comprehensive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tier `{0}` (expected minimal, standard or comprehensive)")]
pub struct ParseTierError(pub String);

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "comprehensive" => Ok(Self::Comprehensive),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}

/// Short and long descriptions of a skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDescription {
    /// Single-line summary; used in front matter and headers.
    pub short: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

/// One installable assistant behavior bundle with prompts at several tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPack {
    pub name: String,
    pub version: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: SkillDescription,
    /// Approximate token budget per tier. Informational.
    #[serde(default)]
    pub context_budget: BTreeMap<Tier, u32>,
    /// Rendered prompt per tier. Not every tier has to be present.
    #[serde(default)]
    pub prompts: BTreeMap<Tier, String>,
    /// Used when the requested tier has no prompt.
    #[serde(rename = "systemPrompt")]
    pub system_prompt: String,
    /// Tier the producer considers the default for this pack.
    #[serde(rename = "tierUsed", default, skip_serializing_if = "Option::is_none")]
    pub tier_used: Option<Tier>,

    // Not read by the current adapters.
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub composable_with: BTreeMap<String, String>,
    #[serde(default)]
    pub conflicts_with: Vec<String>,
    #[serde(default)]
    pub requires_tools: bool,
    #[serde(default)]
    pub requires_memory: bool,
}

impl SkillPack {
    /// Prompt for `tier`, or None when missing or empty.
    pub fn prompt(&self, tier: Tier) -> Option<&str> {
        self.prompts
            .get(&tier)
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }
}
