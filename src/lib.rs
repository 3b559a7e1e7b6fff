//! posts-html2md: convert HTML blog posts into Markdown posts
//!
//! Each source post is a front-matter block between `---` lines followed by
//! an HTML body. The front-matter is copied unchanged and the body is handed
//! to an external HTML-to-Markdown converter.

pub mod commands;
pub mod config;
pub mod content;
pub mod converter;
pub mod error;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use commands::convert::ConvertReport;
pub use config::ImportConfig;
pub use converter::{ExternalConverter, MarkdownConverter};
pub use error::ImportError;

/// The main importer application
#[derive(Debug, Clone)]
pub struct Importer {
    /// Import configuration
    pub config: ImportConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the HTML posts
    pub source_dir: PathBuf,
    /// Directory receiving the Markdown posts
    pub dest_dir: PathBuf,
}

impl Importer {
    /// Create an importer from a directory, reading `_import.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config = ImportConfig::load_or_default(base_dir.as_ref())?;
        Self::with_config(base_dir, config)
    }

    /// Create an importer with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: ImportConfig) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let base_dir = if base_dir.is_absolute() {
            base_dir.to_path_buf()
        } else {
            std::env::current_dir()?.join(base_dir)
        };

        let source_dir = base_dir.join(&config.source_dir);
        let dest_dir = base_dir.join(&config.dest_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            dest_dir,
        })
    }

    /// Scanner over the source posts
    pub fn scanner(&self) -> content::PostScanner {
        content::PostScanner::new(&self.source_dir, &self.config.source_ext)
    }

    /// Destination path for a source post
    pub fn dest_path(&self, source: &Path) -> PathBuf {
        content::dest_path_for(source, &self.source_dir, &self.dest_dir, &self.config.dest_ext)
    }

    /// Convert every post with the configured external converter
    pub fn convert(&self) -> Result<ConvertReport> {
        commands::convert::run(self)
    }

    /// Print the posts that would be converted
    pub fn list(&self) -> Result<()> {
        commands::list::run(self)
    }
}
