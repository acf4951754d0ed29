use std::path::{Path, PathBuf};

use lab_catalog_domain::{CatalogConfig, Document, MetadataRecord};
use lab_catalog_ports::{
    catalog::CatalogSink, documents::DocumentSource, progress::RunNotifier, provenance::ProvenanceLookup,
};
use lab_catalog_shared_kernel::{
    ApplicationError, Result,
    path::{relative_to, to_slash_string},
};
use tracing::debug;

use crate::dto::CatalogReport;

/// Catalog assembler: enumerate, parse + look up each file, write once.
pub struct BuildCatalog<'a> {
    documents: &'a dyn DocumentSource,
    provenance: &'a dyn ProvenanceLookup,
    sink: &'a dyn CatalogSink,
    notifier: Option<&'a dyn RunNotifier>,
}

impl<'a> BuildCatalog<'a> {
    pub fn new(
        documents: &'a dyn DocumentSource,
        provenance: &'a dyn ProvenanceLookup,
        sink: &'a dyn CatalogSink,
        notifier: Option<&'a dyn RunNotifier>,
    ) -> Self {
        Self { documents, provenance, sink, notifier }
    }

    pub fn run(&self, config: &CatalogConfig) -> Result<CatalogReport> {
        let files = self.enumerate(config)?;
        let (records, skipped) = self.assemble(&files, config);
        self.write(&records, config)?;

        Ok(CatalogReport {
            enumerated: files.len(),
            written: records.len(),
            skipped,
            output: config.output.clone(),
        })
    }

    fn enumerate(&self, config: &CatalogConfig) -> Result<Vec<PathBuf>> {
        let files = self.documents.enumerate(&config.scan_dir, &config.extension).map_err(|e| {
            ApplicationError::EnumerationFailed { reason: e.to_string(), source: Some(Box::new(e)) }
        })?;
        self.info(&format!(
            "Found {} {} files in {}",
            files.len(),
            config.extension.extension(),
            config.scan_dir.display()
        ));
        Ok(files)
    }

    /// One record per readable file, in enumeration order, plus the skip count.
    fn assemble(&self, files: &[PathBuf], config: &CatalogConfig) -> (Vec<MetadataRecord>, usize) {
        let mut records = Vec::with_capacity(files.len());
        let mut skipped = 0;
        for path in files {
            self.info(&format!("Processing: {}", path.display()));
            match self.build_record(path, config) {
                Ok(record) => records.push(record),
                Err(err) => {
                    skipped += 1;
                    self.warn(&format!("Error processing {}: {err}", path.display()));
                }
            }
        }
        (records, skipped)
    }

    fn build_record(&self, path: &Path, config: &CatalogConfig) -> Result<MetadataRecord> {
        let document = Document::new(path, self.documents.read(path)?);
        let parsed = document.parse();
        let provenance = self.provenance.lookup(path, &config.repo_root);
        let filename = to_slash_string(&relative_to(path, &config.scan_dir));
        debug!(file = %filename, known = provenance.is_known(), "assembled record");
        Ok(MetadataRecord::assemble(filename, &parsed, &provenance))
    }

    fn write(&self, records: &[MetadataRecord], config: &CatalogConfig) -> Result<()> {
        self.sink.write(records, config.format, &config.output).map_err(|e| {
            ApplicationError::CatalogWriteFailed { reason: e.to_string(), source: Some(Box::new(e)) }.into()
        })
    }

    fn info(&self, message: &str) {
        if let Some(notifier) = self.notifier {
            notifier.info(message);
        }
    }

    fn warn(&self, message: &str) {
        if let Some(notifier) = self.notifier {
            notifier.warn(message);
        }
    }
}
