use lab_catalog_shared_kernel::Provenance;
use serde::Serialize;

use super::document::ParsedDocument;

/// Column names of the catalog, in output order.
pub const CATALOG_HEADER: [&str; 5] =
    ["filename", "description", "technologies", "last_change_date", "last_change_author"];

/// One catalog row. Built once per document and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataRecord {
    pub filename: String,
    pub description: String,
    pub technologies: String,
    pub last_change_date: String,
    pub last_change_author: String,
}

impl MetadataRecord {
    pub fn assemble(filename: impl Into<String>, parsed: &ParsedDocument, provenance: &Provenance) -> Self {
        let (last_change_date, last_change_author) = provenance.fields();
        Self {
            filename: filename.into(),
            description: parsed.combined_description(),
            technologies: parsed.technologies.clone(),
            last_change_date,
            last_change_author,
        }
    }

    /// Field values in [`CATALOG_HEADER`] order.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.filename.as_str(),
            self.description.as_str(),
            self.technologies.as_str(),
            self.last_change_date.as_str(),
            self.last_change_author.as_str(),
        ]
    }
}
