pub mod document;
pub mod record;

pub use document::{Document, ParsedDocument};
pub use record::{MetadataRecord, CATALOG_HEADER};
