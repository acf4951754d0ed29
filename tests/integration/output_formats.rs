// tests/integration/output_formats.rs
use lab_catalog::run_with_config;
use lab_catalog_domain::{CatalogConfig, ExtensionPattern, OutputFormat};
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::LabRepo;

fn config(repo: &LabRepo, format: OutputFormat, file: &str) -> CatalogConfig {
    let mut config = CatalogConfig::with_defaults(repo.path()).expect("defaults are valid");
    config.quiet = true;
    config.format = format;
    config.output = repo.path().join(file);
    config
}

#[test]
fn tsv_output_uses_tabs() {
    let repo = LabRepo::new();
    repo.lab("lab.md", "# Tabs\n\nEvaluation, then embedding.\n");

    run_with_config(&config(&repo, OutputFormat::Tsv, "catalog.tsv")).unwrap();

    let text = std::fs::read_to_string(repo.path().join("catalog.tsv")).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("filename\tdescription\ttechnologies\tlast_change_date\tlast_change_author")
    );
    assert_eq!(lines.next(), Some("lab.md\tTabs. Evaluation, then embedding.\tembedding, Evaluation\tN/A\tN/A"));
}

#[test]
fn json_output_lists_records() {
    let repo = LabRepo::new();
    repo.lab("x/one.md", "---\ntitle: \"One\"\n---\n");
    repo.lab("two.md", "plain\n");

    run_with_config(&config(&repo, OutputFormat::Json, "catalog.json")).unwrap();

    let text = std::fs::read_to_string(repo.path().join("catalog.json")).unwrap();
    let json: Value = serde_json::from_str(&text).expect("valid JSON");
    let rows = json.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["filename"], "two.md");
    assert_eq!(rows[0]["description"], "N/A");
    assert_eq!(rows[1]["filename"], "x/one.md");
    assert_eq!(rows[1]["description"], "One");
    assert_eq!(rows[1]["last_change_date"], "N/A");
}

#[test]
fn custom_scan_dir_and_extension() {
    let repo = LabRepo::new();
    repo.write("docs/guide.markdown", "# Guide\n");
    repo.write("docs/skip.md", "# Skip\n");

    let mut config = config(&repo, OutputFormat::Csv, "docs.csv");
    config.scan_dir = repo.path().join("docs");
    config.extension = ExtensionPattern::new("markdown").unwrap();
    let report = run_with_config(&config).unwrap();

    assert_eq!(report.written, 1);
    let text = std::fs::read_to_string(repo.path().join("docs.csv")).unwrap();
    assert!(text.ends_with("guide.markdown,Guide,N/A,N/A,N/A\r\n"));
}
