//! Identifier resolution against a [`NodeMapping`].

use crate::mapping::NodeMapping;

/// Outcome of resolving a node identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The identifier maps to a repository URL.
    Repo(String),
    /// The identifier is a built-in node; skip it, this is not an error.
    Builtin,
    /// No mapping and no heuristic matched; report to the operator.
    Unresolved,
}

/// Resolve an identifier to at most one repository URL.
///
/// Lookup order: exact-case table entry, lowercase table entry, then the
/// ordered substring heuristics over the lowercased identifier (first
/// match wins). A table entry carrying the built-in marker resolves to
/// [`Resolution::Builtin`] immediately.
///
/// Pure function: the table is an explicit input and nothing is mutated.
pub fn resolve(mapping: &NodeMapping, id: &str) -> Resolution {
    let lower = id.to_lowercase();

    if let Some(entry) = mapping.get(id).or_else(|| mapping.get(&lower)) {
        return match entry {
            Some(url) => Resolution::Repo(url.clone()),
            None => Resolution::Builtin,
        };
    }

    for (substring, url) in mapping.heuristics() {
        if lower.contains(substring.as_str()) {
            tracing::debug!(id, substring, "resolved via heuristic");
            return Resolution::Repo(url.clone());
        }
    }

    Resolution::Unresolved
}
