use anyhow::{Context, Result};
use lab_catalog_domain::CatalogConfig;
use lab_catalog_infra::{
    filesystem::WalkDocumentSource, notifier::ConsoleNotifier, output::CatalogFileWriter, vcs::GitProvenance,
};
use lab_catalog_ports::progress::RunNotifier;
use lab_catalog_usecase::{BuildCatalog, CatalogReport};

use crate::{cli::Args, config::build_config};

const RULE_WIDTH: usize = 60;

pub fn run(args: &Args) -> Result<CatalogReport> {
    let config = build_config(args).context("invalid arguments")?;
    run_with_config(&config)
}

pub fn run_with_config(config: &CatalogConfig) -> Result<CatalogReport> {
    let documents = WalkDocumentSource::new();
    let provenance = GitProvenance::with_program(&config.git_program);
    let sink = CatalogFileWriter;
    let notifier = ConsoleNotifier::new(config.quiet);

    banner(&notifier, "Lab Catalog Generator");
    let report = BuildCatalog::new(&documents, &provenance, &sink, Some(&notifier))
        .run(config)
        .with_context(|| format!("failed to generate {}", config.output.display()))?;

    notifier.info("");
    notifier.info(&format!("Catalog file generated: {}", report.output.display()));
    notifier.info(&format!("Total labs documented: {}", report.written));
    if report.skipped > 0 {
        notifier.info(&format!("Skipped (unreadable): {}", report.skipped));
    }
    notifier.info("");
    banner(&notifier, "Done!");

    Ok(report)
}

fn banner(notifier: &dyn RunNotifier, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    notifier.info(&rule);
    notifier.info(title);
    notifier.info(&rule);
}
