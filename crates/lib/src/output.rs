//! Write adapter output under a target project root.
//!
//! Paths from adapters are relative; anything absolute or climbing out of the root is rejected
//! before a single file is written.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

use crate::adapters::AdapterOutput;

/// How to treat the target directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteMode {
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
    /// Replace files that already exist.
    pub force: bool,
}

/// Write every file in `output` below `root`. Returns the full paths, in output order.
pub fn write_output(root: &Path, output: &AdapterOutput, mode: WriteMode) -> Result<Vec<PathBuf>> {
    let mut planned = Vec::with_capacity(output.files.len());
    for file in &output.files {
        let dest = root.join(checked_relative(&file.path)?);
        if dest.exists() && !mode.force {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite",
                dest.display()
            );
        }
        planned.push(dest);
    }

    if mode.dry_run {
        return Ok(planned);
    }

    for (file, dest) in output.files.iter().zip(&planned) {
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        std::fs::write(dest, &file.content)
            .with_context(|| format!("writing {}", dest.display()))?;
        log::info!("wrote {}", dest.display());
    }
    Ok(planned)
}

fn checked_relative(path: &str) -> Result<&Path> {
    let p = Path::new(path);
    if path.is_empty() {
        anyhow::bail!("adapter produced an empty output path");
    }
    if !p
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    {
        anyhow::bail!("refusing to write outside the target directory: {}", path);
    }
    Ok(p)
}
