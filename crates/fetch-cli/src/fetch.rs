//! The fetch procedure: scan, resolve, synchronize, report.

use std::fs;

use fetch_core::{NodeMapping, Reporter, Resolution, load_extra_repos, resolve, scan_workflows};
use fetch_git::{resolve_pip_executable, sync_repo};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Run the whole provisioning procedure.
///
/// Repositories are processed strictly one at a time: all sorted workflow
/// identifiers first, then extra-repo entries in file order. Individual
/// repository failures are logged and never abort the run; only pre-flight
/// problems (unusable target directory, malformed map file) return an
/// error.
pub fn run_fetch(cli: &Cli) -> Result<()> {
    fs::create_dir_all(&cli.target).map_err(|e| {
        CliError::user(format!(
            "cannot create target directory {}: {e}",
            cli.target.display()
        ))
    })?;

    let mut mapping = NodeMapping::with_known();
    if let Some(map_file) = &cli.map_file {
        mapping.merge_file(map_file)?;
    }

    let reporter = Reporter::new(&cli.log_file);
    let pip_exec = resolve_pip_executable(&cli.pip);

    let ids = match &cli.workflows {
        Some(dir) => scan_workflows(dir, &reporter),
        None => Vec::new(),
    };
    reporter.log(&format!("Found node ids in workflows: {ids:?}"));

    let mut unresolved = Vec::new();
    for id in &ids {
        match resolve(&mapping, id) {
            Resolution::Repo(url) => {
                sync_repo(&url, &cli.target, pip_exec.as_deref(), &reporter);
            }
            Resolution::Builtin => {
                reporter.log(&format!("SKIP: '{id}' is built in, nothing to fetch"));
            }
            Resolution::Unresolved => {
                reporter.log(&format!(
                    "NO REPO MAPPING for node id '{id}' - add it via --map-file or supply the \
                     repo URL via --extra-repos-file"
                ));
                unresolved.push(id.clone());
            }
        }
    }

    if let Some(path) = &cli.extra_repos_file {
        let extra = load_extra_repos(Some(path));
        if !extra.is_empty() {
            reporter.log(&format!(
                "Processing extra repos file: {} ({} entries)",
                path.display(),
                extra.len()
            ));
            for url in &extra {
                sync_repo(url, &cli.target, pip_exec.as_deref(), &reporter);
            }
        }
    }

    if !unresolved.is_empty() {
        reporter.log(
            "Some node ids had no mapping. Add them via --map-file or pass repo URLs via \
             --extra-repos-file:",
        );
        for id in &unresolved {
            reporter.log(&format!(" - {id}"));
        }
    }

    Ok(())
}
