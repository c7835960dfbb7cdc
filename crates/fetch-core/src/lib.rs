//! Core building blocks for node-fetcher.
//!
//! This crate provides the node mapping table and resolver, the workflow
//! scanner, the extra-repository list loader, and the operation reporter
//! shared by the synchronizer and the CLI.

pub mod error;
pub mod extra;
pub mod mapping;
pub mod report;
pub mod resolver;
pub mod scanner;

pub use error::{Error, Result};
pub use extra::load_extra_repos;
pub use mapping::NodeMapping;
pub use report::{DEFAULT_LOG_FILE, Reporter};
pub use resolver::{Resolution, resolve};
pub use scanner::{PROVENANCE_LABEL, scan_workflows};
