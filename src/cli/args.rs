use std::path::PathBuf;

use clap::{Parser, ValueHint};
use lab_catalog_domain::config::{DEFAULT_EXTENSION, DEFAULT_GIT_PROGRAM};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lab_catalog",
    version = crate::VERSION,
    about = "Generate a catalog of markdown lab documents with their last merge date and author"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Repository root used for history queries [default: current directory]
    #[arg(long, value_hint = ValueHint::DirPath, help_heading = "Input")]
    pub repo_root: Option<PathBuf>,

    /// Directory scanned for documents, relative to the repository root [default: Instructions]
    #[arg(long, value_hint = ValueHint::DirPath, help_heading = "Input")]
    pub scan_dir: Option<PathBuf>,

    /// Document file extension
    #[arg(long, default_value = DEFAULT_EXTENSION, help_heading = "Input")]
    pub extension: String,

    /// Catalog file to write [default: <repo-root>/lab_catalog.csv]
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Catalog format
    #[arg(long, value_enum, default_value = "csv", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Executable used for history queries
    #[arg(long, default_value = DEFAULT_GIT_PROGRAM, help_heading = "History")]
    pub git_program: String,

    /// Suppress progress lines (warnings are still printed)
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, help_heading = "Logging")]
    pub verbose: bool,
}
