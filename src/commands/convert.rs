//! Convert HTML posts to Markdown

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{OutputPost, PostFile};
use crate::converter::{ExternalConverter, MarkdownConverter};
use crate::error::ImportError;
use crate::Importer;

/// Outcome of a conversion run
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Destination paths that were written
    pub converted: Vec<PathBuf>,
    /// Source paths that failed, with the error message
    pub failed: Vec<(PathBuf, String)>,
    /// Posts with fewer than two delimiters
    pub malformed: usize,
}

impl ConvertReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} converted, {} failed",
            self.converted.len(),
            self.failed.len()
        );
        if self.malformed > 0 {
            summary.push_str(&format!(", {} without front-matter", self.malformed));
        }
        summary
    }
}

/// Convert every post using the configured external converter
pub fn run(importer: &Importer) -> Result<ConvertReport> {
    let converter = ExternalConverter::from_config(&importer.config);
    run_with(importer, &converter)
}

/// Convert every post with the given converter
///
/// Per-post failures are logged and recorded in the report. Processing stops
/// at the first failure only when `fail_fast` is set.
pub fn run_with<C: MarkdownConverter>(importer: &Importer, converter: &C) -> Result<ConvertReport> {
    let start = std::time::Instant::now();

    let posts = importer.scanner().scan()?;
    prepare_dest_dir(importer)?;

    let mut report = ConvertReport::default();

    for source in posts {
        match convert_post(importer, converter, &source) {
            Ok((dest, well_formed)) => {
                tracing::debug!("Converted {:?} -> {:?}", source, dest);
                if !well_formed {
                    report.malformed += 1;
                }
                report.converted.push(dest);
            }
            Err(e) => {
                tracing::warn!("Failed to convert {:?}: {}", source, e);
                report.failed.push((source, e.to_string()));
                if importer.config.fail_fast {
                    tracing::info!("Stopping at first failure (fail_fast)");
                    break;
                }
            }
        }
    }

    tracing::info!(
        "{} in {:.2}s",
        report.summary(),
        start.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Convert a single post, returning its destination and whether it had
/// both delimiters
pub fn convert_post<C: MarkdownConverter>(
    importer: &Importer,
    converter: &C,
    source: &Path,
) -> std::result::Result<(PathBuf, bool), ImportError> {
    let post = PostFile::load(source)?;
    let well_formed = post.is_well_formed();
    if !well_formed {
        tracing::warn!(
            "{:?} has {} front-matter delimiter(s), body will be empty",
            source,
            post.delimiters
        );
    }

    let markdown = converter.convert(&post.body)?;

    let dest = importer.dest_path(source);
    OutputPost::new(dest.clone(), post.frontmatter, markdown).write()?;

    Ok((dest, well_formed))
}

fn prepare_dest_dir(importer: &Importer) -> Result<()> {
    if importer.dest_dir.is_dir() {
        return Ok(());
    }

    if !importer.config.create_dest_dir {
        return Err(ImportError::DestDirMissing(importer.dest_dir.clone()).into());
    }

    fs::create_dir_all(&importer.dest_dir).map_err(|source| ImportError::Write {
        path: importer.dest_dir.clone(),
        source,
    })?;
    tracing::info!("Created: {:?}", importer.dest_dir);
    Ok(())
}
