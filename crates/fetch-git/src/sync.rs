//! Repository clone/update and per-node install steps.

use std::path::Path;

use fetch_core::Reporter;

use crate::pip::install_requirements;
use crate::runner::run_command;

/// Dependency declaration file checked in the checkout root.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Install script checked in the checkout root.
pub const INSTALL_SCRIPT: &str = "install.py";

/// Local directory name for a repository URL: the last path segment with a
/// trailing `.git` stripped.
pub fn repo_dir_name(repo_url: &str) -> String {
    let trimmed = repo_url.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    last.strip_suffix(".git").unwrap_or(last).to_string()
}

/// Ensure a working checkout of `repo_url` exists under `target_dir` and is
/// updated, with dependencies and install routine executed best-effort.
///
/// A missing checkout is cloned shallowly with submodules; clone failure is
/// terminal for this repository and nothing further is attempted. For an
/// existing (or freshly cloned) checkout, fetch, pull (rebase + autostash),
/// submodule sync, and submodule update are each attempted independently:
/// a failed update leaves the checkout usable at its last-known state, so
/// those failures are logged without escalating.
///
/// Returns `true` iff the checkout exists (pre-existing or just cloned);
/// update and install failures never flip the result.
///
/// The install script runs unconditionally with inherited privileges, the
/// same trust the host application extends to the node pack itself.
pub fn sync_repo(
    repo_url: &str,
    target_dir: &Path,
    pip_exec: Option<&Path>,
    reporter: &Reporter,
) -> bool {
    let repo_name = repo_dir_name(repo_url);
    let repo_dir = target_dir.join(&repo_name);
    let repo_dir_str = repo_dir.display().to_string();

    if !repo_dir.exists() {
        reporter.log(&format!("CLONING: {repo_url} -> {repo_dir_str}"));
        let clone = run_command(
            "git",
            &[
                "clone",
                "--recurse-submodules",
                "--depth",
                "1",
                repo_url,
                &repo_dir_str,
            ],
            None,
            reporter,
        );
        if !clone.success {
            reporter.log(&format!("ERROR: clone failed for {repo_url}"));
            return false;
        }
    } else {
        reporter.log(&format!("PRESENT: {repo_dir_str}, attempting fetch & pull"));
    }

    // Attempted independently; the checkout stays usable even if these fail.
    run_command(
        "git",
        &["-C", &repo_dir_str, "fetch", "--all", "--tags", "--prune"],
        None,
        reporter,
    );
    run_command(
        "git",
        &["-C", &repo_dir_str, "pull", "--rebase", "--autostash"],
        None,
        reporter,
    );
    run_command(
        "git",
        &["-C", &repo_dir_str, "submodule", "sync", "--recursive"],
        None,
        reporter,
    );
    run_command(
        "git",
        &[
            "-C",
            &repo_dir_str,
            "submodule",
            "update",
            "--init",
            "--recursive",
        ],
        None,
        reporter,
    );

    let requirements = repo_dir.join(REQUIREMENTS_FILE);
    if requirements.exists() && !install_requirements(pip_exec, &requirements, reporter) {
        reporter.log(&format!(
            "WARN: pip install -r {} failed for {repo_name}",
            requirements.display()
        ));
    }

    let install_script = repo_dir.join(INSTALL_SCRIPT);
    if install_script.exists()
        && !run_command("python3", &[INSTALL_SCRIPT], Some(&repo_dir), reporter).success
    {
        reporter.log(&format!("WARN: {INSTALL_SCRIPT} failed for {repo_name}"));
    }

    true
}
