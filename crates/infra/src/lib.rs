// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod notifier;
pub mod output;
pub mod persistence;
pub mod vcs;
