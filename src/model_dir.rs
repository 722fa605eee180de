//! Model directory detection and removal
//!
//! A model directory is flat (no subdirectories) and only contains files
//! whose extension is on the allow-list (`.json`, `.pkl`, `.dat` by
//! default). An empty directory qualifies.
//!
//! A missing path or a path that is not a directory is an error, not
//! `false`. Symlinks are not followed and are judged by their own name.
//!
//! [`remove_model`] checks and then deletes. The two steps are not atomic:
//! content added between them is deleted too.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::config::ModelDirPolicy;
use crate::error::{Result, UtilsError};

static DEFAULT_POLICY: Lazy<ModelDirPolicy> = Lazy::new(ModelDirPolicy::default);

/// Check `path` against the default extension allow-list
pub fn is_model_dir(path: impl AsRef<Path>) -> Result<bool> {
    is_model_dir_with(path, &DEFAULT_POLICY)
}

/// Check `path` against an explicit policy
pub fn is_model_dir_with(path: impl AsRef<Path>, policy: &ModelDirPolicy) -> Result<bool> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| UtilsError::io(path, "stat", e))?;
    if !metadata.is_dir() {
        return Err(UtilsError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for entry in walker {
        let entry = entry.map_err(|e| UtilsError::DirWalk {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if entry.file_type().is_dir() {
            tracing::debug!(
                path = %path.display(),
                subdir = %entry.path().display(),
                "not a model dir: contains subdirectory"
            );
            return Ok(false);
        }

        let extension = dotted_extension(entry.path());
        if !policy.allows(&extension) {
            tracing::debug!(
                path = %path.display(),
                file = %entry.path().display(),
                "not a model dir: unexpected file extension"
            );
            return Ok(false);
        }
    }

    Ok(true)
}

/// Extension with its leading dot, `""` when there is none
///
/// Leading dots of the file name are skipped first, so `.json` and `..json`
/// have no extension. `a.tar.gz` gives `.gz` and `a.` gives `.`.
fn dotted_extension(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };
    let stem = name.trim_start_matches('.');
    match stem.rfind('.') {
        Some(idx) => stem[idx..].to_string(),
        None => String::new(),
    }
}

/// Delete `path` recursively if it is a model directory
///
/// Returns `Ok(true)` once deleted. Refuses with
/// [`UtilsError::NotModelDir`] before touching anything otherwise.
pub fn remove_model(path: impl AsRef<Path>) -> Result<bool> {
    remove_model_with(path, &DEFAULT_POLICY)
}

pub fn remove_model_with(path: impl AsRef<Path>, policy: &ModelDirPolicy) -> Result<bool> {
    let path = path.as_ref();

    if !is_model_dir_with(path, policy)? {
        tracing::warn!(path = %path.display(), "refusing to remove non-model directory");
        return Err(UtilsError::NotModelDir {
            path: path.to_path_buf(),
        });
    }

    fs::remove_dir_all(path).map_err(|e| UtilsError::io(path, "remove", e))?;
    tracing::info!(path = %path.display(), "removed model directory");
    Ok(true)
}
