//! Content parser: summary (title/description) plus technology labels.

pub mod summary;
pub mod technologies;

pub use summary::{Summary, SummaryOrigin, extract_summary};
pub use technologies::{TechnologyCatalog, TechnologyPattern};

use crate::model::ParsedDocument;

/// Run both extractors over a document's text.
pub fn parse(content: &str) -> ParsedDocument {
    let summary = extract_summary(content);
    ParsedDocument {
        title: summary.title,
        description: summary.description,
        technologies: TechnologyCatalog::builtin().render(content),
    }
}
