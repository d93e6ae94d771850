//! Skills: the SkillPack value and the on-disk loader that produces it.
//!
//! A pack lives in its own directory (`skill.yaml` + `prompts/<tier>.md`). The adapters never
//! touch the filesystem; they only see the loaded [`SkillPack`].

mod loader;
mod pack;

pub use loader::{load_skill_pack, load_skill_packs, resolve_skill_dir, SkillError};
pub use pack::{ParseTierError, SkillDescription, SkillPack, Tier};
