// crates/shared-kernel/src/value_objects/mod.rs
pub mod provenance;
pub mod sentinel;

pub use provenance::Provenance;
pub use sentinel::{NOT_AVAILABLE, or_sentinel};
