//! HTML to Markdown conversion
//!
//! The conversion itself is delegated to an external program. It is invoked as
//! `<program> [args...] <html-file> <encoding>` and must print Markdown on
//! stdout.

use std::io::Write;
use std::process::Command;

use crate::config::ImportConfig;
use crate::error::{ImportError, Result};

/// Converts an HTML fragment to Markdown
pub trait MarkdownConverter {
    fn convert(&self, html: &str) -> Result<String>;
}

/// Runs an external converter on a temporary copy of the HTML
#[derive(Debug, Clone)]
pub struct ExternalConverter {
    program: String,
    args: Vec<String>,
    encoding: String,
}

impl ExternalConverter {
    pub fn new(program: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            encoding: encoding.into(),
        }
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(&config.converter, &config.encoding).with_args(config.converter_args.clone())
    }

    /// Arguments passed before the HTML file path
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl MarkdownConverter for ExternalConverter {
    fn convert(&self, html: &str) -> Result<String> {
        // Unique per call, removed when dropped
        let mut tmp = tempfile::Builder::new()
            .prefix("post-")
            .suffix(".html")
            .tempfile()
            .map_err(ImportError::TempFile)?;
        tmp.write_all(html.as_bytes())
            .and_then(|_| tmp.flush())
            .map_err(ImportError::TempFile)?;

        tracing::debug!("Running {} on {:?}", self.program, tmp.path());

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(tmp.path())
            .arg(&self.encoding)
            .output()
            .map_err(|source| ImportError::ConverterSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ImportError::ConverterFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = ImportConfig {
            converter: "pandoc-wrap".to_string(),
            converter_args: vec!["--atx".to_string()],
            ..Default::default()
        };
        let converter = ExternalConverter::from_config(&config);
        assert_eq!(converter.program(), "pandoc-wrap");
        assert_eq!(converter.args, vec!["--atx"]);
        assert_eq!(converter.encoding, "utf-8");
    }

    #[test]
    fn test_missing_program() {
        let converter = ExternalConverter::new("posts-html2md-no-such-converter", "utf-8");
        let err = converter.convert("<p>hi</p>").unwrap_err();
        assert!(matches!(err, ImportError::ConverterSpawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        // Echoes the temp file back along with the encoding argument
        let converter = ExternalConverter::new("sh", "utf-8").with_args(vec![
            "-c".to_string(),
            r#"cat "$1"; printf ' [%s]' "$2""#.to_string(),
            "sh".to_string(),
        ]);
        let markdown = converter.convert("<p>Hi</p>").unwrap();
        assert_eq!(markdown, "<p>Hi</p> [utf-8]");
    }

    #[cfg(unix)]
    #[test]
    fn test_uses_unique_temp_files() {
        let converter = ExternalConverter::new("sh", "utf-8").with_args(vec![
            "-c".to_string(),
            r#"printf '%s' "$1""#.to_string(),
            "sh".to_string(),
        ]);
        let first = converter.convert("a").unwrap();
        let second = converter.convert("b").unwrap();
        assert!(first.ends_with(".html"));
        assert_ne!(first, second);
        // Removed once the conversion finishes
        assert!(!std::path::Path::new(&first).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit() {
        let converter = ExternalConverter::new("sh", "utf-8").with_args(vec![
            "-c".to_string(),
            "echo partial; echo boom >&2; exit 3".to_string(),
            "sh".to_string(),
        ]);
        match converter.convert("<p>x</p>").unwrap_err() {
            ImportError::ConverterFailed {
                program,
                status,
                stderr,
            } => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
