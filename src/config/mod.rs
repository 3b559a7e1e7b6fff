//! Configuration module

mod import;

pub use import::ImportConfig;
pub use import::CONFIG_FILE;
