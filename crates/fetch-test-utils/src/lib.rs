//! Shared fixtures for node-fetcher integration tests.
//!
//! Fixture repositories are created with the `git` CLI, the same tool the
//! synchronizer itself shells out to, so tests never need network access:
//! a local path works as a clone URL.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Initialise a real git repository at `path` with one commit on `main`.
///
/// Configures a throwaway user identity and disables commit signing so the
/// fixture works in a bare CI environment.
///
/// # Panics
/// Panics if any git operation fails.
pub fn git_repo_with_commit(path: &Path) {
    fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("git_repo_with_commit: failed to create {path:?}: {e}"));

    let run = |args: &[&str]| {
        let output = Command::new("git")
            .args(args)
            .current_dir(path)
            .output()
            .unwrap_or_else(|e| panic!("git_repo_with_commit: failed to run `git {args:?}`: {e}"));
        if !output.status.success() {
            panic!(
                "git_repo_with_commit: `git {args:?}` failed:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
    };

    run(&["init"]);
    run(&["config", "user.email", "test@test.com"]);
    run(&["config", "user.name", "Test User"]);
    run(&["config", "commit.gpgsign", "false"]);

    fs::write(path.join("README.md"), "# Fixture")
        .unwrap_or_else(|e| panic!("git_repo_with_commit: failed to write README.md: {e}"));

    run(&["add", "."]);
    run(&["commit", "-m", "Initial commit"]);
    // Best-effort: older git versions may not support branch renaming
    let _ = Command::new("git")
        .args(["branch", "-m", "main"])
        .current_dir(path)
        .output();
}

/// Write a minimal workflow JSON file whose nodes carry the given
/// provenance identifiers.
///
/// # Panics
/// Panics if the file cannot be written.
pub fn workflow_file(dir: &Path, name: &str, ids: &[&str]) {
    let nodes: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| serde_json::json!({"type": "Node", "properties": {"cnr_id": id}}))
        .collect();
    let doc = serde_json::json!({"nodes": nodes});
    fs::write(dir.join(name), doc.to_string())
        .unwrap_or_else(|e| panic!("workflow_file: failed to write {name}: {e}"));
}
