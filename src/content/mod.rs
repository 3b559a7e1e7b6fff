//! Content module - reading, splitting and reassembling posts

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::{Region, SplitPost, DELIMITER};
pub use loader::PostScanner;
pub use post::{dest_path_for, OutputPost, PostFile};
