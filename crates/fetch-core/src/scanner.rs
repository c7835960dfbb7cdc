//! Workflow scanning for node provenance labels.
//!
//! ComfyUI workflow files are JSON documents whose nodes carry a `cnr_id`
//! provenance label naming the custom-node pack they came from. The scanner
//! collects every distinct label value across a directory of workflows.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::report::Reporter;

/// The provenance label field marking a node's pack of origin.
pub const PROVENANCE_LABEL: &str = "cnr_id";

/// Scan a directory of workflow JSON files for node identifiers.
///
/// Returns the sorted set of distinct identifiers found across all `*.json`
/// files directly in `dir` (non-recursive). Files that cannot be read or
/// parsed are skipped with a warning; a missing directory yields an empty
/// set. Identifier casing is preserved as written.
pub fn scan_workflows(dir: &Path, reporter: &Reporter) -> Vec<String> {
    let mut ids = BTreeSet::new();
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "workflow directory does not exist");
        return Vec::new();
    }

    let pattern = Regex::new(&format!(r#""{}"\s*:\s*"([^"]+)""#, PROVENANCE_LABEL))
        .expect("provenance pattern is valid");

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            reporter.log(&format!("WARN: failed to read {}: {}", dir.display(), e));
            return Vec::new();
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|text| {
                serde_json::from_str::<serde_json::Value>(&text).map_err(|e| e.to_string())
            });
        let value = match parsed {
            Ok(value) => value,
            Err(e) => {
                reporter.log(&format!("WARN: failed to parse {}: {}", path.display(), e));
                continue;
            }
        };

        // Scan the re-serialized document so the label is found at any
        // nesting depth without walking the structure.
        let text = value.to_string();
        for capture in pattern.captures_iter(&text) {
            ids.insert(capture[1].to_string());
        }
    }

    ids.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_workflow(dir: &Path, name: &str, ids: &[&str]) {
        let nodes: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| serde_json::json!({"type": "Node", "properties": {"cnr_id": id}}))
            .collect();
        let doc = serde_json::json!({"nodes": nodes});
        fs::write(dir.join(name), doc.to_string()).unwrap();
    }

    #[test]
    fn test_missing_directory_yields_empty_set() {
        let reporter = Reporter::stdout_only();
        let ids = scan_workflows(Path::new("/nonexistent/workflows"), &reporter);
        assert!(ids.is_empty());
    }

    #[test]
    fn test_distinct_sorted_across_files() {
        let tmp = TempDir::new().unwrap();
        let reporter = Reporter::stdout_only();
        write_workflow(tmp.path(), "a.json", &["zeta-pack", "alpha-pack"]);
        write_workflow(tmp.path(), "b.json", &["alpha-pack", "mid-pack"]);

        let ids = scan_workflows(tmp.path(), &reporter);
        assert_eq!(ids, vec!["alpha-pack", "mid-pack", "zeta-pack"]);
    }

    #[test]
    fn test_invalid_json_is_skipped_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let log = tmp.path().join("fetch.log");
        let reporter = Reporter::new(&log);
        write_workflow(tmp.path(), "good.json", &["alpha-pack"]);
        fs::write(tmp.path().join("bad.json"), "{not json").unwrap();

        let ids = scan_workflows(tmp.path(), &reporter);
        assert_eq!(ids, vec!["alpha-pack"]);

        let logged = fs::read_to_string(&log).unwrap();
        assert!(logged.contains("WARN"), "expected a warning, got: {logged}");
        assert!(logged.contains("bad.json"));
    }

    #[test]
    fn test_non_json_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        let reporter = Reporter::stdout_only();
        fs::write(tmp.path().join("notes.txt"), r#""cnr_id": "sneaky""#).unwrap();

        let ids = scan_workflows(tmp.path(), &reporter);
        assert!(ids.is_empty());
    }

    #[test]
    fn test_nested_label_is_found() {
        let tmp = TempDir::new().unwrap();
        let reporter = Reporter::stdout_only();
        let doc = serde_json::json!({
            "groups": [{"nodes": [{"meta": {"cnr_id": "deep-pack"}}]}]
        });
        fs::write(tmp.path().join("deep.json"), doc.to_string()).unwrap();

        let ids = scan_workflows(tmp.path(), &reporter);
        assert_eq!(ids, vec!["deep-pack"]);
    }

    #[test]
    fn test_casing_preserved() {
        let tmp = TempDir::new().unwrap();
        let reporter = Reporter::stdout_only();
        write_workflow(tmp.path(), "a.json", &["Mixed-Case-Pack"]);

        let ids = scan_workflows(tmp.path(), &reporter);
        assert_eq!(ids, vec!["Mixed-Case-Pack"]);
    }

    #[test]
    fn test_subdirectories_not_recursed() {
        let tmp = TempDir::new().unwrap();
        let reporter = Reporter::stdout_only();
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        write_workflow(&sub, "inner.json", &["hidden-pack"]);

        let ids = scan_workflows(tmp.path(), &reporter);
        assert!(ids.is_empty());
    }
}
