//! agentic-templates core library: skill packs, the adapters that render them for
//! specific AI coding assistants, and the plumbing the CLI uses around them.

pub mod adapters;
pub mod config;
pub mod frontmatter;
pub mod init;
pub mod output;
pub mod skills;
