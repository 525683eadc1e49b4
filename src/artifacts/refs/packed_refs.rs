//! Parser for `.git/packed-refs`
//!
//! ## File Format
//!
//! ```text
//! # pack-refs with: peeled fully-peeled sorted
//! 1f0c9e... refs/heads/main
//! 5b2a77... refs/tags/v1.0
//! ^9d0e41...
//! ```
//!
//! A `^<sha>` line peels the entry right above it: the annotated tag on the
//! previous line is replaced by the commit it points to.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::refs::ref_name::RefName;
use std::collections::BTreeMap;

const PEELED_PREFIX: char = '^';
const COMMENT_PREFIX: char = '#';

pub fn parse_packed_refs(content: &str) -> BTreeMap<RefName, ObjectId> {
    let mut refs = BTreeMap::new();
    let mut previous: Option<RefName> = None;

    for line in content.lines().map(str::trim_end) {
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        if let Some(peeled) = line.strip_prefix(PEELED_PREFIX) {
            match (previous.take(), ObjectId::try_parse(peeled.to_string())) {
                (Some(name), Ok(oid)) => {
                    refs.insert(name, oid);
                }
                _ => tracing::debug!(line, "skipping orphan peeled line in packed-refs"),
            }
            continue;
        }

        match parse_entry(line) {
            Some((name, oid)) => {
                refs.insert(name.clone(), oid);
                previous = Some(name);
            }
            None => {
                tracing::debug!(line, "skipping malformed packed-refs line");
                previous = None;
            }
        }
    }

    refs
}

fn parse_entry(line: &str) -> Option<(RefName, ObjectId)> {
    let (oid, name) = line.split_once(' ')?;
    let oid = ObjectId::try_parse(oid.to_string()).ok()?;
    Some((RefName::from_full_path(name)?, oid))
}
