//! Error types for the import pipeline

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Source directory not found: {0:?}")]
    SourceDirMissing(PathBuf),

    #[error("Destination directory not found: {0:?}")]
    DestDirMissing(PathBuf),

    #[error("Invalid source pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to prepare temporary file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("Failed to run converter `{program}`: {source}")]
    ConverterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Converter `{program}` exited with {status}: {stderr}")]
    ConverterFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

pub type Result<T> = std::result::Result<T, ImportError>;
