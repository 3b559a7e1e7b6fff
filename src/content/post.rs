//! Post file and output post models

use std::fs;
use std::path::{Path, PathBuf};

use super::frontmatter::{SplitPost, DELIMITER};
use crate::error::{ImportError, Result};

/// An HTML post read from the source directory
#[derive(Debug, Clone)]
pub struct PostFile {
    /// Full path to the source file
    pub source: PathBuf,
    /// Front-matter text between the first two delimiters
    pub frontmatter: String,
    /// HTML body after the second delimiter
    pub body: String,
    /// Number of delimiter lines found
    pub delimiters: usize,
}

impl PostFile {
    /// Read and split a post from disk
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_split(path, SplitPost::from_bytes(&bytes)))
    }

    pub fn from_split(path: &Path, split: SplitPost) -> Self {
        Self {
            source: path.to_path_buf(),
            frontmatter: split.frontmatter,
            body: split.body,
            delimiters: split.delimiters,
        }
    }

    /// Whether the post had both front-matter delimiters
    pub fn is_well_formed(&self) -> bool {
        self.delimiters >= 2
    }
}

/// A reassembled Markdown post ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPost {
    pub path: PathBuf,
    pub frontmatter: String,
    pub markdown: String,
}

impl OutputPost {
    pub fn new(path: PathBuf, frontmatter: String, markdown: String) -> Self {
        Self {
            path,
            frontmatter,
            markdown,
        }
    }

    /// Render the final file contents
    pub fn render(&self) -> String {
        [
            DELIMITER,
            self.frontmatter.as_str(),
            DELIMITER,
            "",
            self.markdown.as_str(),
        ]
        .join("\n")
    }

    /// Write the post, overwriting any existing file
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, self.render()).map_err(|source| ImportError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Map a source post path to its destination path
///
/// The part of `source` below `source_dir` is re-rooted under `dest_dir` and
/// the extension is replaced with `dest_ext`. Paths outside `source_dir` keep
/// only their file name.
pub fn dest_path_for(source: &Path, source_dir: &Path, dest_dir: &Path, dest_ext: &str) -> PathBuf {
    let relative = match source.strip_prefix(source_dir) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => source
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| source.to_path_buf()),
    };

    dest_dir.join(relative).with_extension(dest_ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_output_post() {
        let post = OutputPost::new(
            PathBuf::from("_posts/hello.md"),
            "title: Hello".to_string(),
            "Hi **there**\n".to_string(),
        );
        assert_eq!(post.render(), "---\ntitle: Hello\n---\n\nHi **there**\n");
    }

    #[test]
    fn test_render_empty_parts() {
        let post = OutputPost::new(PathBuf::from("x.md"), String::new(), String::new());
        assert_eq!(post.render(), "---\n\n---\n\n");
    }

    #[test]
    fn test_render_preserves_frontmatter() {
        let frontmatter = "title: \"Quoted: yes\"\ntags:\n  - a\n  - b";
        let post = OutputPost::new(PathBuf::from("x.md"), frontmatter.to_string(), "body".into());
        let rendered = post.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "---");
        assert_eq!(lines[1..5].join("\n"), frontmatter);
        assert_eq!(lines[5], "---");
        assert_eq!(lines[6], "");
    }

    #[test]
    fn test_dest_path_for() {
        let dest = dest_path_for(
            Path::new("/blog/_posts_html/2014-03-02-hello.html"),
            Path::new("/blog/_posts_html"),
            Path::new("/blog/_posts"),
            "md",
        );
        assert_eq!(dest, PathBuf::from("/blog/_posts/2014-03-02-hello.md"));
    }

    #[test]
    fn test_dest_path_keeps_dotted_names() {
        // Only the extension changes, not other dots in the stem
        let dest = dest_path_for(
            Path::new("/blog/_posts_html/v1.html.intro.html"),
            Path::new("/blog/_posts_html"),
            Path::new("/blog/_posts"),
            "md",
        );
        assert_eq!(dest, PathBuf::from("/blog/_posts/v1.html.intro.md"));
    }

    #[test]
    fn test_dest_path_outside_source_dir() {
        let dest = dest_path_for(
            Path::new("/elsewhere/post.html"),
            Path::new("/blog/_posts_html"),
            Path::new("/blog/_posts"),
            "markdown",
        );
        assert_eq!(dest, PathBuf::from("/blog/_posts/post.markdown"));
    }

    #[test]
    fn test_load_post_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.html");
        fs::write(&path, "---\ntitle: A\n---\n<p>a</p>\n").unwrap();

        let post = PostFile::load(&path).unwrap();
        assert_eq!(post.source, path);
        assert_eq!(post.frontmatter, "title: A");
        assert_eq!(post.body, "<p>a</p>");
        assert!(post.is_well_formed());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PostFile::load(&dir.path().join("missing.html")).unwrap_err();
        assert!(matches!(err, ImportError::Read { .. }));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.md");
        fs::write(&path, "old contents that are longer than the new ones").unwrap();

        let post = OutputPost::new(path.clone(), "t: 1".into(), "new".into());
        post.write().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "---\nt: 1\n---\n\nnew");
    }
}
