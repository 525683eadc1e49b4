//! Annotated tag objects
//!
//! A loose ref under `refs/tags/` may point at a tag object instead of a
//! commit. The on-disk (inflated) form is:
//!
//! ```text
//! tag <size>\0
//! object <target-sha>
//! type <target-type>
//! tag <name>
//! tagger <name> <email> <timestamp> <timezone>
//!
//! <message>
//! ```
//!
//! Only the `object` header is needed to peel the tag.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::BufRead;

/// Read the `<type> <size>\0` header of an inflated object and return the type
pub fn read_object_header(object: &mut impl BufRead) -> anyhow::Result<String> {
    let mut header = Vec::new();
    object.read_until(b'\0', &mut header)?;

    if header.pop() != Some(b'\0') {
        anyhow::bail!("object header is not NUL-terminated");
    }

    let header = String::from_utf8(header).context("object header is not UTF-8")?;
    let (object_type, _size) = header
        .split_once(' ')
        .with_context(|| format!("malformed object header {header:?}"))?;

    Ok(object_type.to_string())
}

/// Read the `object <sha>` header of a tag body
pub fn parse_tag_target(body: &mut impl BufRead) -> anyhow::Result<ObjectId> {
    for line in body.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }

        if let Some(target) = line.strip_prefix("object ") {
            return ObjectId::try_parse(target.trim().to_string())
                .with_context(|| format!("invalid tag target {target:?}"));
        }
    }

    anyhow::bail!("tag object has no object header")
}

/// What a loose object turned out to be while peeling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Peeled {
    /// A tag object pointing at another object
    Tag(ObjectId),
    /// Anything else (commit, tree, blob); peeling stops here
    Other(String),
}

/// Inspect an inflated object and, for tags, extract the tagged object
pub fn peel_once(object: &mut impl BufRead) -> anyhow::Result<Peeled> {
    match read_object_header(object)?.as_str() {
        "tag" => Ok(Peeled::Tag(parse_tag_target(object)?)),
        other => Ok(Peeled::Other(other.to_string())),
    }
}
