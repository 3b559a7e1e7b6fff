//! Front-matter splitting
//!
//! A post is split on lines that are exactly `---`. Everything between the
//! first and second delimiter is front-matter, everything after the second is
//! body. Delimiter lines themselves are never kept, including any that show up
//! again inside the body.

/// Delimiter line separating front-matter from body
pub const DELIMITER: &str = "---";

/// Where the splitter currently is within a post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// No delimiter seen yet
    BeforeFrontmatter,
    /// One delimiter seen
    InFrontmatter,
    /// Two or more delimiters seen
    InBody,
}

impl Region {
    /// Transition taken on a delimiter line
    pub fn advance(self) -> Self {
        match self {
            Region::BeforeFrontmatter => Region::InFrontmatter,
            Region::InFrontmatter | Region::InBody => Region::InBody,
        }
    }

    pub fn is_body(self) -> bool {
        self == Region::InBody
    }
}

/// A post split into its front-matter and body text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitPost {
    pub frontmatter: String,
    pub body: String,
    /// Number of delimiter lines seen
    pub delimiters: usize,
}

impl SplitPost {
    /// Split decoded post content
    pub fn parse(content: &str) -> Self {
        let mut region = Region::BeforeFrontmatter;
        let mut delimiters = 0;
        let mut frontmatter = Vec::new();
        let mut body = Vec::new();

        for line in content.lines() {
            if line == DELIMITER {
                delimiters += 1;
                region = region.advance();
                continue;
            }

            if region.is_body() {
                body.push(line);
            } else {
                frontmatter.push(line);
            }
        }

        Self {
            frontmatter: frontmatter.join("\n"),
            body: body.join("\n"),
            delimiters,
        }
    }

    /// Split raw file bytes, decoding them as UTF-8
    ///
    /// Invalid sequences are replaced rather than rejected.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let content = String::from_utf8_lossy(bytes);
        if let std::borrow::Cow::Owned(_) = content {
            tracing::warn!("Post contains invalid UTF-8, replacing bad sequences");
        }
        Self::parse(&content)
    }

    /// Whether both delimiters were found
    pub fn is_well_formed(&self) -> bool {
        self.delimiters >= 2
    }
}
