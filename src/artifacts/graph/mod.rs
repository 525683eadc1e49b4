//! Commit graph rendering
//!
//! - `emitter`: writes the complete document from resolved refs and commits
//! - `commit_label`: HTML label for a single commit node

pub mod commit_label;
pub mod emitter;

/// Name of the emitted digraph
pub const GRAPH_NAME: &str = "git_log";

/// Commit subjects longer than this are cut and suffixed with [`ELLIPSIS`]
pub const SUBJECT_MAX_WIDTH: usize = 60;

pub const ELLIPSIS: &str = "...";
