//! Operation reporting to stdout and an append-only log file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default location of the operation log.
pub const DEFAULT_LOG_FILE: &str = "/var/log/fetch_nodes.log";

/// Reporter for operation records.
///
/// Every record is written to stdout and appended to the log file as a
/// single timestamped line. Log-file failures (missing directory, no write
/// permission) are swallowed: reporting must never abort the run, so on
/// failure only the stdout copy remains.
#[derive(Debug, Clone)]
pub struct Reporter {
    log_path: Option<PathBuf>,
}

impl Reporter {
    /// Create a reporter appending to the given log file.
    pub fn new(log_path: impl AsRef<Path>) -> Self {
        Self {
            log_path: Some(log_path.as_ref().to_path_buf()),
        }
    }

    /// Create a reporter that only writes to stdout.
    pub fn stdout_only() -> Self {
        Self { log_path: None }
    }

    /// Record one operation line.
    pub fn log(&self, msg: &str) {
        let line = format!(
            "[{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            msg
        );
        println!("{line}");

        if let Some(path) = &self.log_path {
            let _ = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .and_then(|mut f| writeln!(f, "{line}"));
        }
    }
}
