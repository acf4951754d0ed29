//! Catalog serialization and the file sink.

mod delimited;
mod json;

use std::path::Path;

use lab_catalog_domain::{MetadataRecord, OutputFormat};
use lab_catalog_ports::catalog::CatalogSink;
use lab_catalog_shared_kernel::{ErrorContext, InfrastructureError, Result};

pub use delimited::{escape_field, write_delimited};
pub use json::write_json;

use crate::persistence::FileWriter;

/// Render the whole catalog in memory.
pub fn render(records: &[MetadataRecord], format: OutputFormat) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match format.delimiter() {
        Some(sep) => write_delimited(records, sep, &mut buf)?,
        None => write_json(records, &mut buf)?,
    }
    Ok(buf)
}

/// Writes the rendered catalog to disk in one atomic replace.
#[derive(Debug, Default)]
pub struct CatalogFileWriter;

impl CatalogSink for CatalogFileWriter {
    fn write(&self, records: &[MetadataRecord], format: OutputFormat, output: &Path) -> Result<()> {
        let bytes = render(records, format).with_context(|| format!("rendering {} records", records.len()))?;
        FileWriter::atomic_write(output, &bytes)
            .map_err(|source| InfrastructureError::FileWrite { path: output.to_path_buf(), source })
            .with_context(|| format!("writing {} catalog", format.name()))
    }
}
