#![allow(dead_code)]

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Creates a repository with one commit containing `README.md`.
pub fn init_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    git(dir, &["init", "--quiet"]);
    git(dir, &["config", "user.email", "tests@example.com"]);
    git(dir, &["config", "user.name", "Tests"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    std::fs::write(dir.join("README.md"), "# widgets\n").unwrap();
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "--quiet", "-m", "initial"]);
    temp
}

pub fn current_branch(dir: &Path) -> String {
    git(dir, &["rev-parse", "--abbrev-ref", "HEAD"])
}

pub fn commit_count(dir: &Path) -> usize {
    git(dir, &["rev-list", "--count", "HEAD"]).parse().unwrap()
}

/// Creates an empty bare repository to push to.
pub fn init_bare_remote() -> TempDir {
    let temp = TempDir::new().unwrap();
    git(temp.path(), &["init", "--quiet", "--bare"]);
    temp
}

/// Returns the commit subject at `reference`, failing if it does not exist.
pub fn subject_at(dir: &Path, reference: &str) -> String {
    git(dir, &["log", "-1", "--format=%s", reference])
}
