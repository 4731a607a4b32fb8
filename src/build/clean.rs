//! Build output directory management.
//!
//! - `bober build` / `bober run` - make sure `build/` exists
//! - `bober clean` - remove it again

use std::fs;
use std::path::Path;

use crate::error::{BoberError, Result};

pub fn ensure_build_dir(build_dir: &Path) -> Result<()> {
    fs::create_dir_all(build_dir).map_err(|source| BoberError::DirCreate {
        path: build_dir.to_path_buf(),
        source,
    })
}

/// Removes the build directory tree. Returns `false` if there was nothing
/// to remove.
pub fn clean(build_dir: &Path) -> Result<bool> {
    if !build_dir.exists() {
        return Ok(false);
    }

    fs::remove_dir_all(build_dir).map_err(|source| BoberError::Clean {
        path: build_dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}
