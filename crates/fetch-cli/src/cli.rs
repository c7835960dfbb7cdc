//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use fetch_core::DEFAULT_LOG_FILE;

/// Default pip executable, pointing at the runtime virtualenv.
pub const DEFAULT_PIP: &str = "/opt/venv/bin/pip";

/// Ensure custom nodes referenced by workflows are present and up to date
///
/// Scans a directory of workflow JSON files for node identifiers, resolves
/// them to repository URLs, and clones or updates each repository under the
/// target directory. Extra repositories can be supplied via a plain-text
/// file, one URL per line.
#[derive(Parser, Debug)]
#[command(name = "fetch-nodes")]
#[command(author, version, about)]
pub struct Cli {
    /// Directory to place custom node checkouts in
    #[arg(short, long)]
    pub target: PathBuf,

    /// Directory of workflow JSON files to scan for node identifiers
    #[arg(short, long)]
    pub workflows: Option<PathBuf>,

    /// Plain file with one repo URL per line (# comments ignored)
    #[arg(long)]
    pub extra_repos_file: Option<PathBuf>,

    /// Path to the pip executable to use for installs
    #[arg(long, env = "PIP_EXEC", default_value = DEFAULT_PIP)]
    pub pip: PathBuf,

    /// TOML overlay extending or overriding the node mapping
    #[arg(long)]
    pub map_file: Option<PathBuf>,

    /// Operation log file (failures to write are ignored)
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
