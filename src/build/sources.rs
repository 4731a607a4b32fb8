use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{BoberError, Result};

/// The only extension that ends up in `SRCS`.
pub const SOURCE_EXTENSION: &str = "cpp";

const PATTERN_SUFFIX: &str = "/**/*.*";

/// `"src/**/*.*"` -> `"src"`. Anything else is taken as a directory already.
///
/// A pattern with nothing before the glob (`"/**/*.*"`) yields `""`, which
/// [`find_sources`] rejects rather than walking the whole project.
pub fn base_dir(pattern: &str) -> &str {
    pattern.strip_suffix(PATTERN_SUFFIX).unwrap_or(pattern)
}

/// Collects every `.cpp` file below each pattern's base directory.
///
/// Patterns are resolved against `root` and the returned paths are relative
/// to it whenever possible, so they can be written into a Makefile that
/// `make` runs from `root`. Order is pattern order, then a file-name sorted
/// depth-first walk.
pub fn find_sources(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        let base = base_dir(pattern);
        if base.is_empty() {
            return Err(BoberError::Discovery {
                dir: PathBuf::from(pattern),
                source: io::Error::new(io::ErrorKind::NotFound, "pattern has no base directory"),
            });
        }

        let dir = root.join(base);
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.map_err(|e| BoberError::Discovery {
                dir: dir.clone(),
                source: e.into(),
            })?;

            // Symlinked files count; symlinked directories are not entered.
            let path = entry.path();
            if !entry.file_type().is_dir()
                && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
            {
                let relative = path.strip_prefix(root).unwrap_or(path);
                sources.push(relative.to_path_buf());
            }
        }
    }

    Ok(sources)
}
