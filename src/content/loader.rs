//! Post scanner - enumerates HTML posts in the source directory

use std::path::{Path, PathBuf};

use crate::error::{ImportError, Result};

/// Finds source posts by extension
pub struct PostScanner {
    source_dir: PathBuf,
    extension: String,
}

impl PostScanner {
    pub fn new<P: AsRef<Path>>(source_dir: P, extension: &str) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Glob pattern matching every post directly inside the source directory
    pub fn pattern(&self) -> String {
        let dir = glob::Pattern::escape(&self.source_dir.to_string_lossy());
        format!("{}/*.{}", dir.trim_end_matches('/'), self.extension)
    }

    /// Lazily enumerate matching posts
    ///
    /// Order follows the filesystem and is not guaranteed. Each call starts a
    /// fresh listing.
    pub fn scan(&self) -> Result<impl Iterator<Item = PathBuf>> {
        if !self.source_dir.is_dir() {
            return Err(ImportError::SourceDirMissing(self.source_dir.clone()));
        }

        let pattern = self.pattern();
        let paths = glob::glob(&pattern)
            .map_err(|source| ImportError::InvalidPattern { pattern, source })?;

        Ok(paths.filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(path),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry {:?}: {}", e.path(), e.error());
                None
            }
        }))
    }
}
