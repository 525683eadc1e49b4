//! Render the commit and reference graph of a git repository as a Graphviz
//! dot document.
//!
//! ```text
//! gitlogviz | dot -Tpdf -o git-log.pdf
//! ```
//!
//! - `areas`: the working copy and the git data sources (refs, history)
//! - `artifacts`: refs, commits and the dot rendering
//! - `commands`: the `visualize` pipeline tying them together

pub mod areas;
pub mod artifacts;
pub mod commands;
