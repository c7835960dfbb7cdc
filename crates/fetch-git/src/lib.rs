//! Repository synchronization for node-fetcher.
//!
//! All version-control and install work shells out to external tools (`git`,
//! pip, `python3`) through a single logged command runner. Everything here
//! is best-effort: outcomes are reported, and only a failed clone marks a
//! repository as failed.

pub mod pip;
pub mod runner;
pub mod sync;

pub use pip::{install_requirements, resolve_pip_executable};
pub use runner::{CommandOutcome, run_command};
pub use sync::{INSTALL_SCRIPT, REQUIREMENTS_FILE, repo_dir_name, sync_repo};
