use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use lab_catalog_shared_kernel::{DomainError, DomainResult};

/// Directory under the repository root that holds the lab documents.
pub const DEFAULT_SCAN_DIR: &str = "Instructions";
/// Catalog file name written under the repository root.
pub const DEFAULT_OUTPUT_FILE: &str = "lab_catalog.csv";
pub const DEFAULT_EXTENSION: &str = "md";
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Serialization used for the catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
        }
    }

    /// Field separator for the delimited formats.
    pub const fn delimiter(self) -> Option<char> {
        match self {
            Self::Csv => Some(','),
            Self::Tsv => Some('\t'),
            Self::Json => None,
        }
    }
}

/// File-name matcher for the document extension (`*.md` by default).
#[derive(Debug, Clone)]
pub struct ExtensionPattern {
    extension: String,
    matcher: GlobMatcher,
}

impl ExtensionPattern {
    pub fn new(extension: &str) -> DomainResult<Self> {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "extension must not be empty".into() });
        }
        if extension.contains(['/', '\\', '*', '?', '[', ']', '{', '}']) {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("extension '{extension}' must be a plain suffix"),
            });
        }

        let pattern = format!("*.{extension}");
        let glob = Glob::new(&pattern).map_err(|err| DomainError::InvalidPattern {
            pattern: pattern.clone(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { extension: extension.to_string(), matcher: glob.compile_matcher() })
    }

    /// Match against the final path component only.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.matcher.is_match(name))
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Fully resolved run configuration. All paths are absolute.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub repo_root: PathBuf,
    pub scan_dir: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub extension: ExtensionPattern,
    pub git_program: String,
    pub quiet: bool,
}

impl CatalogConfig {
    /// Configuration with every default anchored at `repo_root`.
    pub fn with_defaults(repo_root: impl Into<PathBuf>) -> DomainResult<Self> {
        let repo_root = repo_root.into();
        Ok(Self {
            scan_dir: repo_root.join(DEFAULT_SCAN_DIR),
            output: repo_root.join(DEFAULT_OUTPUT_FILE),
            repo_root,
            format: OutputFormat::default(),
            extension: ExtensionPattern::new(DEFAULT_EXTENSION)?,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            quiet: false,
        })
    }
}
