//! Reference names, kinds and their resolved views
//!
//! - `ref_name`: ref names relative to `refs/` and the kind derived from them
//! - `show_ref`: parser for `git show-ref -d` output
//! - `packed_refs`: parser for the `.git/packed-refs` listing
//! - `resolved_refs`: the final name → commit mapping split by kind

use crate::artifacts::refs::ref_name::RefKind;

pub mod packed_refs;
pub mod ref_name;
pub mod resolved_refs;
pub mod show_ref;

/// Leading path segment of a ref name → kind of ref
pub const REF_NAMESPACES: phf::Map<&'static str, RefKind> = phf::phf_map! {
    "heads" => RefKind::Branch,
    "tags" => RefKind::Tag,
    "remotes" => RefKind::Remote,
    "stash" => RefKind::Stash,
};

/// Maximum number of `ref:` indirections or nested tags followed
pub const MAX_REF_DEPTH: usize = 5;
