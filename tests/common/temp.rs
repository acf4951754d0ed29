use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

/// Scratch repository root with an `Instructions/` tree.
#[derive(Debug)]
pub struct LabRepo {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl LabRepo {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.path().join("lab_catalog.csv")
    }

    /// Write `contents` to `Instructions/<rel>`.
    pub fn lab(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        self.write(&format!("Instructions/{rel}"), contents)
    }

    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| panic!("create {parent:?}: {e}"));
        }
        fs::write(&path, contents).unwrap_or_else(|e| panic!("write {path:?}: {e}"));
        path
    }

    pub fn read_catalog(&self) -> String {
        fs::read_to_string(self.catalog_path()).expect("catalog written")
    }

    /// Run git with a pinned identity and date.
    pub fn git(&self, author: &str, date: &str, args: &[&str]) {
        let status = Command::new("git")
            .args(["-c", "commit.gpgsign=false", "-c", "init.defaultBranch=main"])
            .args(args)
            .current_dir(self.path())
            .env("GIT_AUTHOR_NAME", author)
            .env("GIT_AUTHOR_EMAIL", "labs@example.com")
            .env("GIT_COMMITTER_NAME", author)
            .env("GIT_COMMITTER_EMAIL", "labs@example.com")
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .status()
            .unwrap_or_else(|e| panic!("git {args:?}: {e}"));
        assert!(status.success(), "git {args:?} exited with {status}");
    }
}

pub fn git_available() -> bool {
    Command::new("git").arg("--version").output().is_ok_and(|o| o.status.success())
}
