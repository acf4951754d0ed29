// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use lab_catalog_domain::ExtensionPattern;
use lab_catalog_ports::documents::DocumentSource;
use lab_catalog_shared_kernel::{InfrastructureError, Result};
use tracing::warn;

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `DocumentSource` port.
///
/// Walks every directory, hidden ones included, and ignores `.gitignore`
/// style filters so the catalog reflects what is on disk. Symlinked files are
/// listed; symlinked directories are not descended into.
#[derive(Debug, Default)]
pub struct WalkDocumentSource;

impl WalkDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSource for WalkDocumentSource {
    fn enumerate(&self, root: &Path, extension: &ExtensionPattern) -> Result<Vec<PathBuf>> {
        Ok(collect_documents(root, extension))
    }

    fn read(&self, path: &Path) -> Result<String> {
        FileReader::read_utf8(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
    }
}

fn collect_documents(root: &Path, extension: &ExtensionPattern) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!("scan directory {} does not exist or is not a directory", root.display());
        return Vec::new();
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);

    let mut files: Vec<PathBuf> = builder
        .build()
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("walk error: {err}");
                None
            }
        })
        .filter(is_document_file)
        .map(ignore::DirEntry::into_path)
        .filter(|path| extension.matches(path))
        .collect();

    sort_paths(&mut files);
    files
}

fn is_document_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().metadata().is_ok_and(|meta| meta.is_file()),
        _ => false,
    }
}

/// Component-wise path order, so `a/b.md` sorts before `a-b.md`.
fn sort_paths(files: &mut [PathBuf]) {
    files.sort();
}
