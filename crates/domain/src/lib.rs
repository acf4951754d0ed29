//! # Domain
//!
//! Catalog records and the pure content parser that fills them.
//!
//! - [`model`]: documents, parsed metadata and catalog rows
//! - [`extraction`]: frontmatter/heading summary and technology detection
//! - [`config`]: resolved run configuration

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod extraction;
pub mod model;

pub use config::{CatalogConfig, ExtensionPattern, OutputFormat};
pub use extraction::{parse, TechnologyCatalog};
pub use model::{Document, MetadataRecord, ParsedDocument, CATALOG_HEADER};
