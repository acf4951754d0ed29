use std::path::PathBuf;

/// Outcome of one catalog run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    /// Files matched during enumeration.
    pub enumerated: usize,
    /// Rows written to the catalog.
    pub written: usize,
    /// Files skipped because they could not be read.
    pub skipped: usize,
    pub output: PathBuf,
}
