// crates/ports/src/catalog.rs
use std::path::Path;

use lab_catalog_domain::{MetadataRecord, OutputFormat};
use lab_catalog_shared_kernel::Result;

/// Port for persisting the finished catalog in a single write.
pub trait CatalogSink {
    fn write(&self, records: &[MetadataRecord], format: OutputFormat, output: &Path) -> Result<()>;
}
