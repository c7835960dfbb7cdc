//! Dependency installation via pip.

use std::path::{Path, PathBuf};

use fetch_core::Reporter;

use crate::runner::run_command;

/// Return the pip candidate only when it exists on disk.
///
/// The CLI feeds this `--pip`, the `PIP_EXEC` environment variable, or the
/// default venv path; when none of those exists we fall back to invoking
/// pip through the interpreter's module mechanism instead.
pub fn resolve_pip_executable(candidate: &Path) -> Option<PathBuf> {
    if candidate.exists() {
        Some(candidate.to_path_buf())
    } else {
        tracing::debug!(candidate = %candidate.display(), "pip executable not on disk");
        None
    }
}

/// Install a requirements file with the given pip, or `python3 -m pip`.
///
/// Returns `true` when the requirements file does not exist (nothing to do)
/// or the install succeeds.
pub fn install_requirements(
    pip_exec: Option<&Path>,
    req_path: &Path,
    reporter: &Reporter,
) -> bool {
    if !req_path.exists() {
        return true;
    }
    let req = req_path.display().to_string();
    match pip_exec {
        Some(pip) => run_command(
            &pip.display().to_string(),
            &["install", "-r", &req],
            None,
            reporter,
        )
        .success,
        None => run_command("python3", &["-m", "pip", "install", "-r", &req], None, reporter).success,
    }
}
