#![allow(dead_code)]

pub mod command;

use std::collections::HashSet;

/// Node identifiers declared in a dot document (statements without `->`)
pub fn declared_nodes(dot: &str) -> HashSet<String> {
    dot.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('_') && !line.contains("->"))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// `(from, to)` pairs of every edge statement in a dot document
pub fn edges(dot: &str) -> Vec<(String, String)> {
    dot.lines()
        .map(str::trim)
        .filter_map(|line| {
            let (from, rest) = line.split_once(" -> ")?;
            let to = rest.split([' ', ';']).next()?;
            Some((from.to_string(), to.to_string()))
        })
        .collect()
}

/// Byte offset of `needle` in `haystack`, panicking with the document on a miss
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in\n{haystack}"))
}
