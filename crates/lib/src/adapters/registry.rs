//! Adapter registry: the fixed set of adapters and lookup by name.
//!
//! The table is a compile-time constant; there is no way to register adapters at runtime.

use std::fmt;
use std::str::FromStr;

use super::{claude_code_adapter, copilot_adapter, cursor_adapter, raw_adapter, Adapter};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("unknown adapter: `{0}` (available: raw, cursor, claude-code, copilot)")]
    UnknownAdapter(String),
}

/// The supported adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    Raw,
    Cursor,
    ClaudeCode,
    Copilot,
}

impl AdapterKind {
    pub const ALL: [AdapterKind; 4] = [
        AdapterKind::Raw,
        AdapterKind::Cursor,
        AdapterKind::ClaudeCode,
        AdapterKind::Copilot,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Cursor => "cursor",
            Self::ClaudeCode => "claude-code",
            Self::Copilot => "copilot",
        }
    }

    pub fn adapter(&self) -> Adapter {
        match self {
            Self::Raw => raw_adapter,
            Self::Cursor => cursor_adapter,
            Self::ClaudeCode => claude_code_adapter,
            Self::Copilot => copilot_adapter,
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdapterKind {
    type Err = AdapterError;

    /// Exact, case-sensitive match on the adapter name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| AdapterError::UnknownAdapter(s.to_string()))
    }
}

/// Recognized adapter names, in registry order.
pub const ADAPTERS: [&str; 4] = [
    AdapterKind::Raw.name(),
    AdapterKind::Cursor.name(),
    AdapterKind::ClaudeCode.name(),
    AdapterKind::Copilot.name(),
];

/// Look up an adapter function by name.
pub fn get_adapter(name: &str) -> Result<Adapter, AdapterError> {
    name.parse::<AdapterKind>().map(|kind| kind.adapter())
}
