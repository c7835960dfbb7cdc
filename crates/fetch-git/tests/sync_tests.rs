//! Synchronizer tests against real local git repositories.
//!
//! Local paths work as clone URLs, so none of these tests touch the
//! network. The operation log doubles as the observable record of which
//! external commands were attempted.

use std::fs;
use std::path::Path;

use fetch_core::Reporter;
use fetch_git::{repo_dir_name, sync_repo};
use fetch_test_utils::git_repo_with_commit;
use tempfile::TempDir;

fn read_log(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

#[test]
fn test_fresh_clone_succeeds() {
    let tmp = TempDir::new().unwrap();
    let fixture = tmp.path().join("fixture-pack");
    git_repo_with_commit(&fixture);

    let target = tmp.path().join("custom_nodes");
    fs::create_dir_all(&target).unwrap();
    let log = tmp.path().join("fetch.log");
    let reporter = Reporter::new(&log);

    let url = fixture.display().to_string();
    assert!(sync_repo(&url, &target, None, &reporter));

    let checkout = target.join(repo_dir_name(&url));
    assert!(checkout.join(".git").exists(), "clone should exist");
    assert!(checkout.join("README.md").exists());

    let logged = read_log(&log);
    assert!(logged.contains("CLONING:"), "got: {logged}");
    assert!(logged.contains("clone --recurse-submodules --depth 1"));
}

#[test]
fn test_clone_failure_short_circuits() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("custom_nodes");
    fs::create_dir_all(&target).unwrap();
    let log = tmp.path().join("fetch.log");
    let reporter = Reporter::new(&log);

    let url = "/nonexistent/absent-pack.git";
    assert!(!sync_repo(url, &target, None, &reporter));
    assert!(!target.join("absent-pack").exists());

    let logged = read_log(&log);
    assert!(logged.contains("ERROR: clone failed"), "got: {logged}");
    // No update or install step may run after a failed clone.
    assert!(!logged.contains("fetch --all"), "got: {logged}");
    assert!(!logged.contains("pull --rebase"), "got: {logged}");
    assert!(!logged.contains("pip"), "got: {logged}");
}

#[test]
fn test_existing_checkout_skips_clone_and_updates() {
    let tmp = TempDir::new().unwrap();
    let fixture = tmp.path().join("fixture-pack");
    git_repo_with_commit(&fixture);

    let target = tmp.path().join("custom_nodes");
    fs::create_dir_all(&target).unwrap();
    let url = fixture.display().to_string();

    // First run clones; second run must find the checkout present.
    assert!(sync_repo(&url, &target, None, &Reporter::stdout_only()));

    let log = tmp.path().join("second-run.log");
    let reporter = Reporter::new(&log);
    assert!(sync_repo(&url, &target, None, &reporter));

    let logged = read_log(&log);
    assert!(logged.contains("PRESENT:"), "got: {logged}");
    assert!(!logged.contains("CLONING:"), "got: {logged}");
    assert!(logged.contains("fetch --all --tags --prune"));
    assert!(logged.contains("pull --rebase --autostash"));
    assert!(logged.contains("submodule sync --recursive"));
    assert!(logged.contains("submodule update --init --recursive"));
}

/// Only the clone-or-presence step decides the result: a present checkout
/// whose update steps all fail still reports success, because the checkout
/// stays usable at its last-known state.
#[test]
fn test_update_failures_do_not_flip_success() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("custom_nodes");
    fs::create_dir_all(&target).unwrap();

    // A checkout with no upstream: pull --rebase has nothing to pull from
    // and fails, fetch of a missing remote likewise.
    let checkout = target.join("orphan-pack");
    git_repo_with_commit(&checkout);
    let run = |args: &[&str]| {
        std::process::Command::new("git")
            .args(args)
            .current_dir(&checkout)
            .output()
            .unwrap()
    };
    run(&["remote", "add", "origin", "/nonexistent/origin.git"]);

    let log = tmp.path().join("fetch.log");
    let reporter = Reporter::new(&log);
    assert!(sync_repo("/nonexistent/orphan-pack.git", &target, None, &reporter));

    let logged = read_log(&log);
    assert!(logged.contains("PRESENT:"), "got: {logged}");
    // Every update step was still attempted despite earlier failures.
    assert!(logged.contains("fetch --all --tags --prune"));
    assert!(logged.contains("pull --rebase --autostash"));
    assert!(logged.contains("submodule update --init --recursive"));
    assert!(logged.contains("ERR:"), "expected failed steps, got: {logged}");
}

#[test]
fn test_requirements_install_failure_is_warning() {
    let tmp = TempDir::new().unwrap();
    let fixture = tmp.path().join("needy-pack");
    // The requirements file must be committed so it survives the clone.
    fs::create_dir_all(&fixture).unwrap();
    fs::write(fixture.join("requirements.txt"), "example-package\n").unwrap();
    git_repo_with_commit(&fixture);

    let target = tmp.path().join("custom_nodes");
    fs::create_dir_all(&target).unwrap();
    let log = tmp.path().join("fetch.log");
    let reporter = Reporter::new(&log);

    // /bin/false as pip: the install is attempted and fails, non-fatally.
    let url = fixture.display().to_string();
    assert!(sync_repo(&url, &target, Some(Path::new("/bin/false")), &reporter));

    let logged = read_log(&log);
    assert!(logged.contains("WARN: pip install -r"), "got: {logged}");
}

#[test]
fn test_install_script_is_invoked_in_checkout() {
    let tmp = TempDir::new().unwrap();
    let fixture = tmp.path().join("scripted-pack");
    fs::create_dir_all(&fixture).unwrap();
    fs::write(
        fixture.join("install.py"),
        "open('install-marker.txt', 'w').write('ran')\n",
    )
    .unwrap();
    git_repo_with_commit(&fixture);

    let target = tmp.path().join("custom_nodes");
    fs::create_dir_all(&target).unwrap();
    let log = tmp.path().join("fetch.log");
    let reporter = Reporter::new(&log);

    let url = fixture.display().to_string();
    assert!(sync_repo(&url, &target, None, &reporter));

    let logged = read_log(&log);
    let checkout = target.join("scripted-pack");
    assert!(
        logged.contains(&format!("RUN: python3 install.py (cwd={})", checkout.display())),
        "got: {logged}"
    );
}
