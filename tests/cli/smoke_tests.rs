use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn lab_catalog() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lab_catalog"))
}

#[test]
fn shows_help() {
    lab_catalog()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--scan-dir").and(predicate::str::contains("--repo-root")));
}

#[test]
fn shows_version() {
    lab_catalog()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn writes_catalog_and_reports_totals() {
    let dir = tempfile::tempdir().unwrap();
    let labs = dir.path().join("Instructions");
    fs::create_dir_all(&labs).unwrap();
    fs::write(labs.join("01.md"), "# Chat basics\n\nOpen the chat playground.\n").unwrap();
    fs::write(labs.join("02.md"), [0xffu8, 0xfe]).unwrap();

    lab_catalog()
        .args(["--repo-root", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Lab Catalog Generator")
                .and(predicate::str::contains("Processing: "))
                .and(predicate::str::contains("Total labs documented: 1"))
                .and(predicate::str::contains("Skipped (unreadable): 1"))
                .and(predicate::str::contains("Done!")),
        )
        .stderr(predicate::str::contains("Error processing"));

    let catalog = fs::read_to_string(dir.path().join("lab_catalog.csv")).unwrap();
    assert!(catalog.contains("01.md,Chat basics. Open the chat playground.,chat playground,N/A,N/A\r\n"));
    assert!(!catalog.contains("02.md"));
}

#[test]
fn quiet_suppresses_progress() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");

    lab_catalog()
        .args(["-q", "--format", "json", "--repo-root", dir.path().to_str().unwrap()])
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(output).unwrap().trim(), "[]");
}

#[test]
fn rejects_invalid_extension() {
    let dir = tempfile::tempdir().unwrap();
    lab_catalog()
        .args(["--extension", "*", "--repo-root", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--extension"));
}

#[test]
fn missing_output_directory_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    lab_catalog()
        .args(["-q", "--repo-root", dir.path().to_str().unwrap(), "-o"])
        .arg(dir.path().join("missing/lab_catalog.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "));
}
