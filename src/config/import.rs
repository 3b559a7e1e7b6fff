//! Import configuration (_import.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the base directory
pub const CONFIG_FILE: &str = "_import.yml";

/// Import configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImportConfig {
    // Directory
    pub source_dir: String,
    pub dest_dir: String,
    pub create_dest_dir: bool,

    // Files
    pub source_ext: String,
    pub dest_ext: String,

    // Converter
    pub converter: String,
    /// Extra arguments passed before the HTML file path
    pub converter_args: Vec<String>,
    pub encoding: String,

    pub fail_fast: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            source_dir: "_posts_html".to_string(),
            dest_dir: "_posts".to_string(),
            create_dest_dir: true,

            source_ext: "html".to_string(),
            dest_ext: "md".to_string(),

            converter: "html2mkd".to_string(),
            converter_args: Vec::new(),
            encoding: "utf-8".to_string(),

            fail_fast: false,
        }
    }
}

impl ImportConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ImportConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Load `_import.yml` from the base directory, or fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}
