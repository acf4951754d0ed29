//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: the catalog assembler driving parse + lookup per file
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::CatalogReport;
pub use orchestrator::BuildCatalog;
