//! Extra-repository list loading.

use std::fs;
use std::path::Path;

/// Load additional repository URLs from an optional plain-text file.
///
/// One URL per line, trimmed; blank lines and `#` comments are skipped.
/// File order is preserved. A missing argument, missing file, or unreadable
/// file yields an empty list, never an error.
pub fn load_extra_repos(path: Option<&Path>) -> Vec<String> {
    let Some(path) = path else {
        return Vec::new();
    };
    let Ok(content) = fs::read_to_string(path) else {
        tracing::debug!(path = %path.display(), "extra-repos file not readable");
        return Vec::new();
    };

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
