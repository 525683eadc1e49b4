//! Resolved references split by kind
//!
//! The flat name → commit mapping produced by either resolution strategy is
//! partitioned once, right after it is built. Each view is ordered by ref
//! name, which is also the order `git show-ref` reports them in.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::refs::ref_name::{RefKind, RefName};
use std::collections::BTreeMap;

/// Refs of a single kind, ordered by name
pub type RefView = BTreeMap<RefName, ObjectId>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRefs {
    branches: RefView,
    tags: RefView,
    remotes: RefView,
    stashes: RefView,
}

impl ResolvedRefs {
    pub fn view(&self, kind: RefKind) -> &RefView {
        match kind {
            RefKind::Branch => &self.branches,
            RefKind::Tag => &self.tags,
            RefKind::Remote => &self.remotes,
            RefKind::Stash => &self.stashes,
        }
    }

    pub fn branches(&self) -> &RefView {
        &self.branches
    }

    pub fn tags(&self) -> &RefView {
        &self.tags
    }

    pub fn remotes(&self) -> &RefView {
        &self.remotes
    }

    pub fn stashes(&self) -> &RefView {
        &self.stashes
    }

    /// Every target, once per ref pointing at it
    pub fn targets(&self) -> impl Iterator<Item = &ObjectId> {
        [&self.branches, &self.tags, &self.remotes, &self.stashes]
            .into_iter()
            .flat_map(|view| view.values())
    }

    pub fn into_entries(self) -> impl Iterator<Item = (RefName, ObjectId)> {
        [self.branches, self.tags, self.remotes, self.stashes]
            .into_iter()
            .flatten()
    }

    pub fn len(&self) -> usize {
        self.branches.len() + self.tags.len() + self.remotes.len() + self.stashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn view_mut(&mut self, kind: RefKind) -> &mut RefView {
        match kind {
            RefKind::Branch => &mut self.branches,
            RefKind::Tag => &mut self.tags,
            RefKind::Remote => &mut self.remotes,
            RefKind::Stash => &mut self.stashes,
        }
    }
}

impl FromIterator<(RefName, ObjectId)> for ResolvedRefs {
    /// Later entries for the same name replace earlier ones; names without a
    /// drawable kind are dropped.
    fn from_iter<I: IntoIterator<Item = (RefName, ObjectId)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ResolvedRefs::default(), |mut refs, (name, oid)| {
                if let Some(kind) = name.kind() {
                    refs.view_mut(kind).insert(name, oid);
                } else {
                    tracing::trace!(%name, "ignoring ref outside drawn namespaces");
                }
                refs
            })
    }
}
