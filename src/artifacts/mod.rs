//! Data structures and algorithms behind the graph
//!
//! - `objects`: object IDs, commit records and annotated tag peeling
//! - `refs`: ref names, kinds and the parsers for both ref sources
//! - `log`: lazy commit stream over `git log` output
//! - `dot`: Graphviz statement writer, attribute lists and HTML labels
//! - `graph`: assembles the commit graph document

pub mod dot;
pub mod graph;
pub mod log;
pub mod objects;
pub mod refs;
