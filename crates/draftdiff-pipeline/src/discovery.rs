//! Batch input discovery and output directory ownership.

use crate::error::PipelineError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List the processable files of `dir`: non-recursive, extension-filtered
/// (case-insensitive), with platform temp/lock files (`~$` prefix, the
/// Office convention) and dotfiles skipped.
///
/// The listing is sorted lexicographically so batch order is deterministic
/// across platforms.
pub fn discover_inputs(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, PipelineError> {
    if !dir.is_dir() {
        return Err(PipelineError::MissingInputDir(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with("~$") || name.starts_with('.') {
            debug!("skipping temp/hidden file: {}", name);
            continue;
        }

        let path = entry.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        if extensions.contains(&ext.as_str()) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Take ownership of a stage output directory: create it if needed and
/// remove any files left by a prior run.
pub fn prepare_output_dir(dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(dir)?;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
