//! Graphviz dot output
//!
//! - `writer`: statement writer with block indentation and identifier sanitization
//! - `attribute`: `[key=value, ...]` attribute lists
//! - `html`: HTML-like labels and text escaping

pub mod attribute;
pub mod html;
pub mod writer;
