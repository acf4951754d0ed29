// crates/infra/src/vcs/git.rs
use std::{
    path::Path,
    process::{Command, Output},
};

use chrono::NaiveDate;
use lab_catalog_ports::provenance::ProvenanceLookup;
use lab_catalog_shared_kernel::{InfraResult, InfrastructureError, Provenance, path::relative_to};
use tracing::{debug, warn};

/// `%ai` is the author date (`2024-03-05 10:00:00 +0100`), `%an` the author name.
const LOG_FORMAT: &str = "--format=%ai|%an";

/// Which history a query walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryScope {
    /// Merges on the first-parent chain whose diff touches the path.
    Merges,
    /// Any commit touching the path.
    AnyCommit,
}

impl HistoryScope {
    fn args(self) -> &'static [&'static str] {
        match self {
            Self::Merges => &["log", "-1", "--first-parent", "--merges", LOG_FORMAT, "--"],
            Self::AnyCommit => &["log", "-1", LOG_FORMAT, "--"],
        }
    }
}

/// Outcome of parsing one `git log` line.
#[derive(Debug, PartialEq, Eq)]
enum LogLine {
    Parsed { date: NaiveDate, author: String },
    /// Nothing usable; the next query may still succeed.
    Missing,
    /// Two fields were present but the date did not parse; the lookup gives up.
    BadDate(String),
}

/// Provenance adapter shelling out to the `git` CLI.
#[derive(Debug, Clone)]
pub struct GitProvenance {
    program: String,
}

impl Default for GitProvenance {
    fn default() -> Self {
        Self { program: "git".to_string() }
    }
}

impl GitProvenance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable for history queries.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn resolve(&self, rel_path: &Path, repo_root: &Path) -> InfraResult<Provenance> {
        for scope in [HistoryScope::Merges, HistoryScope::AnyCommit] {
            let output = self.run_log(scope, rel_path, repo_root)?;
            match parse_log_output(output.as_deref()) {
                LogLine::Parsed { date, author } => return Ok(Provenance::known(date, author)),
                LogLine::Missing => debug!(?scope, path = %rel_path.display(), "no history entry"),
                LogLine::BadDate(raw) => {
                    warn!("Could not get git info for {}: unparseable date '{raw}'", rel_path.display());
                    return Ok(Provenance::unknown());
                }
            }
        }
        Ok(Provenance::unknown())
    }

    fn run_log(&self, scope: HistoryScope, rel_path: &Path, repo_root: &Path) -> InfraResult<Option<String>> {
        let output = Command::new(&self.program)
            .args(scope.args())
            .arg(rel_path)
            .current_dir(repo_root)
            .output()
            .map_err(|err| InfrastructureError::GitError {
                operation: format!("{} {}", self.program, scope.args().join(" ")),
                details: err.to_string(),
            })?;
        Ok(successful_stdout(output))
    }
}

impl ProvenanceLookup for GitProvenance {
    fn lookup(&self, path: &Path, repo_root: &Path) -> Provenance {
        let rel_path = relative_to(path, repo_root);
        match self.resolve(&rel_path, repo_root) {
            Ok(provenance) => provenance,
            Err(err) => {
                warn!("Could not get git info for {}: {err}", path.display());
                Provenance::unknown()
            }
        }
    }
}

fn successful_stdout(output: Output) -> Option<String> {
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn parse_log_output(output: Option<&str>) -> LogLine {
    let Some(line) = output else {
        return LogLine::Missing;
    };
    let parts: Vec<&str> = line.split('|').collect();
    let [timestamp, author] = parts.as_slice() else {
        return LogLine::Missing;
    };
    let day = timestamp.split_whitespace().next().unwrap_or_default();
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => LogLine::Parsed { date, author: (*author).to_string() },
        Err(_) => LogLine::BadDate((*timestamp).to_string()),
    }
}
