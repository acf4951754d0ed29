use std::path::PathBuf;

use lab_catalog_shared_kernel::NOT_AVAILABLE;

use crate::extraction;

/// A markdown file as read from disk.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into() }
    }

    pub fn parse(&self) -> ParsedDocument {
        extraction::parse(&self.content)
    }
}

/// Metadata pulled out of a document's text.
///
/// `title` and `description` may be empty; `technologies` is already
/// rendered and falls back to the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDocument {
    pub title: String,
    pub description: String,
    pub technologies: String,
}

impl ParsedDocument {
    /// Title and description merged into the single catalog column.
    pub fn combined_description(&self) -> String {
        match (self.title.is_empty(), self.description.is_empty()) {
            (false, false) => format!("{}. {}", self.title, self.description),
            (_, false) => self.description.clone(),
            (false, true) => self.title.clone(),
            (true, true) => NOT_AVAILABLE.to_string(),
        }
    }
}
