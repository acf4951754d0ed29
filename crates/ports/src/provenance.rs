// crates/ports/src/provenance.rs
use std::path::Path;

use lab_catalog_shared_kernel::Provenance;

/// Port for version-control history.
///
/// Lookups are infallible: every failure is reported as [`Provenance::Unknown`].
pub trait ProvenanceLookup {
    fn lookup(&self, path: &Path, repo_root: &Path) -> Provenance;
}
