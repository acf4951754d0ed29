// tests/integration/end_to_end.rs
use std::fs;

use lab_catalog::run_with_config;
use lab_catalog_domain::CatalogConfig;

#[path = "../common/mod.rs"]
mod common;
use common::{LabRepo, git_available};

const HEADER: &str = "filename,description,technologies,last_change_date,last_change_author\r\n";

fn quiet_config(repo: &LabRepo) -> CatalogConfig {
    let mut config = CatalogConfig::with_defaults(repo.path()).expect("defaults are valid");
    config.quiet = true;
    config
}

fn seed_labs(repo: &LabRepo) {
    repo.lab("b/02-deploy.md", "---\ntitle: \"Deploy, then test\"\ndescription: 'Ship it with GPT-4o'\n---\nbody\n");
    repo.lab("a.md", "# Introduction to Widgets\n\nThis is a lab about widgets and Azure OpenAI integration.");
    repo.lab("b/01-empty.md", "no heading here\n");
    repo.lab("c.md", [0xC3u8, 0x28, 0x0A]);
    repo.lab("notes.txt", "# Not a lab\n");
}

#[test]
fn end_to_end_generates_expected_csv() {
    let repo = LabRepo::new();
    seed_labs(&repo);

    let report = run_with_config(&quiet_config(&repo)).expect("run succeeds");

    assert_eq!(report.enumerated, 4);
    assert_eq!(report.written, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.written + report.skipped, report.enumerated);
    assert_eq!(report.output, repo.catalog_path());

    let expected = format!(
        "{HEADER}\
         a.md,Introduction to Widgets. This is a lab about widgets and Azure OpenAI integration.,Azure OpenAI,N/A,N/A\r\n\
         b/01-empty.md,N/A,N/A,N/A,N/A\r\n\
         b/02-deploy.md,\"Deploy, then test. Ship it with GPT-4o\",GPT-4o,N/A,N/A\r\n"
    );
    assert_eq!(repo.read_catalog(), expected);
}

#[test]
fn rerun_is_byte_identical() {
    let repo = LabRepo::new();
    seed_labs(&repo);
    let config = quiet_config(&repo);

    run_with_config(&config).unwrap();
    let first = fs::read(repo.catalog_path()).unwrap();
    run_with_config(&config).unwrap();
    let second = fs::read(repo.catalog_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_scan_dir_writes_header_only() {
    let repo = LabRepo::new();

    let report = run_with_config(&quiet_config(&repo)).unwrap();

    assert_eq!((report.enumerated, report.written, report.skipped), (0, 0, 0));
    assert_eq!(repo.read_catalog(), HEADER);
}

#[test]
fn unwritable_output_fails_the_run() {
    let repo = LabRepo::new();
    seed_labs(&repo);
    let mut config = quiet_config(&repo);
    config.output = repo.path().join("no/such/dir/catalog.csv");

    let err = run_with_config(&config).unwrap_err();

    assert!(format!("{err:#}").contains("catalog.csv"));
    assert!(!config.output.exists());
}

#[test]
fn provenance_comes_from_git_history() {
    if !git_available() {
        return;
    }
    let repo = LabRepo::new();
    repo.git("Setup", "2023-06-01T08:00:00+00:00", &["init", "-q"]);
    repo.lab("01.md", "# First lab\n\nUse prompt flow.\n");
    repo.git("Mara Jade", "2023-06-01T08:00:00+00:00", &["add", "Instructions"]);
    repo.git("Mara Jade", "2023-06-01T08:00:00+00:00", &["commit", "-q", "-m", "add lab"]);
    repo.lab("02.md", "# Draft\n");

    run_with_config(&quiet_config(&repo)).unwrap();

    let catalog = repo.read_catalog();
    let rows: Vec<&str> = catalog.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], "01.md,First lab. Use prompt flow.,prompt flow,2023-06-01,Mara Jade");
    assert_eq!(rows[2], "02.md,Draft,N/A,N/A,N/A");
}
