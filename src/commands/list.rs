//! List the posts that would be converted

use anyhow::Result;
use std::path::PathBuf;

use crate::Importer;

/// Source and destination of every post, sorted by source path
pub fn plan(importer: &Importer) -> Result<Vec<(PathBuf, PathBuf)>> {
    let mut entries: Vec<_> = importer
        .scanner()
        .scan()?
        .map(|source| {
            let dest = importer.dest_path(&source);
            (source, dest)
        })
        .collect();
    entries.sort();
    Ok(entries)
}

/// Print the conversion plan
pub fn run(importer: &Importer) -> Result<()> {
    let entries = plan(importer)?;

    println!("Posts ({}):", entries.len());
    for (source, dest) in entries {
        let source = source.strip_prefix(&importer.base_dir).unwrap_or(&source);
        let dest = dest.strip_prefix(&importer.base_dir).unwrap_or(&dest);
        println!("  {} -> {}", source.display(), dest.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImportConfig;
    use std::fs;

    #[test]
    fn test_plan() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("_posts_html");
        fs::create_dir(&html).unwrap();
        fs::write(html.join("b.html"), "").unwrap();
        fs::write(html.join("a.html"), "").unwrap();

        let importer = Importer::with_config(dir.path(), ImportConfig::default()).unwrap();
        let entries = plan(&importer).unwrap();

        assert_eq!(
            entries,
            vec![
                (html.join("a.html"), dir.path().join("_posts/a.md")),
                (html.join("b.html"), dir.path().join("_posts/b.md")),
            ]
        );
        // Nothing is written
        assert!(!dir.path().join("_posts").exists());
    }

    #[test]
    fn test_plan_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let importer = Importer::with_config(dir.path(), ImportConfig::default()).unwrap();
        assert!(plan(&importer).is_err());
    }
}
