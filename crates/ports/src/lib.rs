// crates/ports/src/lib.rs
//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`documents`]: enumerating and reading markdown files
//! - [`provenance`]: version-control history lookups
//! - [`catalog`]: persisting the assembled catalog
//! - [`progress`]: operator-facing progress and warnings
//!
//! The use case layer depends on these traits only; adapters live in `infra`.

#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod documents;
pub mod progress;
pub mod provenance;
