// crates/ports/src/documents.rs
use std::path::{Path, PathBuf};

use lab_catalog_domain::ExtensionPattern;
use lab_catalog_shared_kernel::Result;

/// Port for locating and loading documents.
pub trait DocumentSource {
    /// Every file under `root` whose name matches `extension`, sorted by path.
    fn enumerate(&self, root: &Path, extension: &ExtensionPattern) -> Result<Vec<PathBuf>>;

    /// Full UTF-8 text of `path`.
    fn read(&self, path: &Path) -> Result<String>;
}
