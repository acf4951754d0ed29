// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, CatalogError, DomainError, DomainResult, ErrorContext, InfraResult,
    InfrastructureError, PresentationError, PresentationResult, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{NOT_AVAILABLE, Provenance, or_sentinel};
