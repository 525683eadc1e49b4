use crate::artifacts::refs::REF_NAMESPACES;
use derive_new::new;

/// Prefix shared by every ref that ends up in the graph
pub const REFS_PREFIX: &str = "refs/";

/// Kind of a ref, derived from the first segment of its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefKind {
    Branch,
    Tag,
    Remote,
    Stash,
}

impl RefKind {
    /// Graphviz color keyword used for nodes and edges of this kind
    pub fn color(&self) -> &'static str {
        match self {
            RefKind::Branch => "red",
            RefKind::Tag => "blue",
            RefKind::Remote => "green",
            RefKind::Stash => "orange",
        }
    }
}

/// Ref name relative to `refs/`, e.g. `heads/main` or `stash`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct RefName(String);

impl RefName {
    /// Strip the `refs/` prefix from a full ref path
    ///
    /// Returns `None` for paths outside `refs/` (e.g. `HEAD`).
    pub fn from_full_path(path: &str) -> Option<Self> {
        path.strip_prefix(REFS_PREFIX)
            .filter(|name| !name.is_empty())
            .map(|name| RefName(name.to_string()))
    }

    pub fn namespace(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    /// `None` for namespaces that are not drawn (e.g. `notes`)
    pub fn kind(&self) -> Option<RefKind> {
        REF_NAMESPACES.get(self.namespace()).copied()
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("heads/main", Some(RefKind::Branch))]
    #[case("heads/feature/nested", Some(RefKind::Branch))]
    #[case("tags/v1.0", Some(RefKind::Tag))]
    #[case("remotes/origin/main", Some(RefKind::Remote))]
    #[case("stash", Some(RefKind::Stash))]
    #[case("notes/commits", None)]
    #[case("headsup/x", None)]
    fn derives_kind_from_first_segment(#[case] name: &str, #[case] kind: Option<RefKind>) {
        assert_eq!(RefName::new(name.to_string()).kind(), kind);
    }

    #[rstest]
    #[case("refs/heads/main", Some("heads/main"))]
    #[case("refs/stash", Some("stash"))]
    #[case("refs/", None)]
    #[case("HEAD", None)]
    fn strips_refs_prefix(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            RefName::from_full_path(path).as_ref().map(|name| name.as_ref()),
            expected
        );
    }
}
