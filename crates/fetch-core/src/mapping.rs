//! Static node-to-repository mapping.
//!
//! The mapping is an explicit value passed into the resolver, not global
//! state, so tests can run against synthetic tables. A TOML overlay file
//! can add or override entries at runtime.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Mapping from node identifiers to repository URLs.
///
/// An entry holding `None` is the explicit "no repository" marker used for
/// built-in/core identifiers: resolution treats it as a deliberate skip,
/// not a failure. Heuristics are an ordered list of (substring, URL) pairs
/// consulted when no table entry matches; first match wins.
#[derive(Debug, Clone, Default)]
pub struct NodeMapping {
    entries: HashMap<String, Option<String>>,
    heuristics: Vec<(String, String)>,
}

/// A single `[[heuristics]]` entry in a mapping overlay file.
#[derive(Debug, Deserialize)]
struct HeuristicEntry {
    contains: String,
    url: String,
}

/// Parsed form of a mapping overlay file.
#[derive(Debug, Default, Deserialize)]
struct MappingFile {
    /// Identifier → repository URL additions/overrides.
    #[serde(default)]
    nodes: HashMap<String, String>,

    /// Identifiers to mark as built-in (skipped, never cloned).
    #[serde(default)]
    builtin: Vec<String>,

    /// Extra substring heuristics, appended after the built-in ones.
    #[serde(default)]
    heuristics: Vec<HeuristicEntry>,
}

impl NodeMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapping populated with the known node catalog.
    pub fn with_known() -> Self {
        let mut mapping = Self::new();
        for (id, url) in [
            (
                "comfyui-kjnodes",
                "https://github.com/kijai/ComfyUI-KJNodes.git",
            ),
            ("rgthree-comfy", "https://github.com/rgthree/rgthree-comfy.git"),
            (
                "cg-use-everywhere",
                "https://github.com/chrisgoringe/cg-use-everywhere.git",
            ),
            (
                "was-node-suite-comfyui",
                "https://github.com/WASasquatch/was-node-suite-comfyui.git",
            ),
            (
                "comfyui-florence2",
                "https://github.com/kijai/ComfyUI-Florence2.git",
            ),
            (
                "comfyui-frame-interpolation",
                "https://github.com/Fannovel16/ComfyUI-Frame-Interpolation.git",
            ),
            (
                "comfyui_essentials",
                "https://github.com/cubiq/ComfyUI_essentials.git",
            ),
            (
                "comfyui-videohelpersuite",
                "https://github.com/Kosinkadink/ComfyUI-VideoHelperSuite.git",
            ),
            (
                "comfyui-crystools",
                "https://github.com/rgthree/comfyui-crystools.git",
            ),
            (
                "comfyui_tinyterranodes",
                "https://github.com/comfyanonymous/comfyui_tinyterranodes.git",
            ),
            ("teacache", "https://github.com/welltop-cn/ComfyUI-TeaCache.git"),
            // best-effort guesses; override via a mapping overlay file
            (
                "crt-nodes",
                "https://github.com/ComfyUI-Community/CRT-Nodes.git",
            ),
            (
                "comfyui-chibi-nodes",
                "https://github.com/erred-io/ComfyUI-Chibi-Nodes.git",
            ),
            ("comfyui-gguf", "https://github.com/erred-io/ComfyUI-GGUF.git"),
            (
                "aegisflow_utility_nodes",
                "https://github.com/aegisflow/aegisflow_utility_nodes.git",
            ),
            (
                "comfy-image-saver",
                "https://github.com/rgthree/comfyui-image-saver.git",
            ),
        ] {
            mapping.insert(id, url);
        }
        // core placeholder shipped with the host application
        mapping.insert_builtin("comfy-core");

        mapping.push_heuristic("rgthree", "https://github.com/rgthree/rgthree-comfy.git");
        mapping.push_heuristic("crt", "https://github.com/ComfyUI-Community/CRT-Nodes.git");
        mapping
    }

    /// Map an identifier to a repository URL.
    pub fn insert(&mut self, id: impl Into<String>, url: impl Into<String>) {
        self.entries.insert(id.into(), Some(url.into()));
    }

    /// Mark an identifier as built-in (no repository, deliberately skipped).
    pub fn insert_builtin(&mut self, id: impl Into<String>) {
        self.entries.insert(id.into(), None);
    }

    /// Append a (substring, URL) heuristic. Heuristics are consulted in
    /// insertion order; the first matching substring wins.
    pub fn push_heuristic(&mut self, contains: impl Into<String>, url: impl Into<String>) {
        self.heuristics.push((contains.into(), url.into()));
    }

    /// Look up an identifier exactly as written.
    pub fn get(&self, id: &str) -> Option<&Option<String>> {
        self.entries.get(id)
    }

    /// The ordered heuristic list.
    pub fn heuristics(&self) -> &[(String, String)] {
        &self.heuristics
    }

    /// Number of table entries (built-in markers included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge a TOML overlay file into this mapping.
    ///
    /// `[nodes]` and `builtin` entries override existing table entries;
    /// `[[heuristics]]` entries are appended after the existing ones so
    /// earlier heuristics keep winning.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)?;
        let overlay: MappingFile =
            toml::from_str(&content).map_err(|source| Error::MappingParse {
                path: path.to_path_buf(),
                source,
            })?;

        for (id, url) in overlay.nodes {
            self.entries.insert(id, Some(url));
        }
        for id in overlay.builtin {
            self.entries.insert(id, None);
        }
        for h in overlay.heuristics {
            self.heuristics.push((h.contains, h.url));
        }
        Ok(())
    }
}
