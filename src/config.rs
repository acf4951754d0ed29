use std::path::{Path, PathBuf};

use lab_catalog_domain::{CatalogConfig, ExtensionPattern};
use lab_catalog_shared_kernel::{PresentationError, PresentationResult, path::logical_absolute};

use crate::cli::Args;

/// Convert parsed CLI arguments into a domain configuration.
///
/// Relative `--scan-dir` values hang off the repository root; a relative
/// `--output` is taken from the working directory.
pub fn build_config(args: &Args) -> PresentationResult<CatalogConfig> {
    let repo_root = logical_absolute(args.repo_root.as_deref().unwrap_or(Path::new(".")));
    if !repo_root.is_dir() {
        return Err(PresentationError::InvalidValue {
            flag: "--repo-root".into(),
            value: repo_root.display().to_string(),
            reason: "not a directory".into(),
        });
    }

    let mut config = CatalogConfig::with_defaults(&repo_root)
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;

    if let Some(scan_dir) = &args.scan_dir {
        config.scan_dir = anchor(&repo_root, scan_dir);
    }
    if let Some(output) = &args.output {
        config.output = logical_absolute(output);
    }
    config.extension = ExtensionPattern::new(&args.extension).map_err(|e| PresentationError::InvalidValue {
        flag: "--extension".into(),
        value: args.extension.clone(),
        reason: e.to_string(),
    })?;
    if args.git_program.trim().is_empty() {
        return Err(PresentationError::InvalidValue {
            flag: "--git-program".into(),
            value: args.git_program.clone(),
            reason: "must not be empty".into(),
        });
    }
    config.git_program = args.git_program.clone();
    config.format = args.format.into();
    config.quiet = args.quiet;

    Ok(config)
}

fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
