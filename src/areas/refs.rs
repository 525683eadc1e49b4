//! Git references (branches, tags, remote-tracking branches, stash)
//!
//! Refs are resolved into a single name → commit mapping in one of two ways:
//!
//! - **show-ref**: ask `git show-ref -d`, which already merges the packed and
//!   loose stores and dereferences annotated tags
//! - **files**: read `.git/packed-refs` first, then overlay every loose file
//!   under `.git/refs/`. Loose entries always replace packed ones because they
//!   are more recent.
//!
//! Either way every target is then asked of `git cat-file --batch-check`,
//! which peels what is left of annotated tags and drops refs to trees or
//! blobs.
//!
//! ## File Format
//!
//! Loose ref files contain either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` for symbolic references (e.g. `refs/remotes/origin/HEAD`)
//!
//! Unreadable or malformed entries are skipped; a missing store is empty.

use crate::areas::git::Git;
use crate::artifacts::objects::batch_check::{BATCH_CHECK_ARGS, parse_response, peel_request};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tag::{Peeled, peel_once};
use crate::artifacts::refs::MAX_REF_DEPTH;
use crate::artifacts::refs::packed_refs::parse_packed_refs;
use crate::artifacts::refs::ref_name::{RefKind, RefName};
use crate::artifacts::refs::resolved_refs::ResolvedRefs;
use crate::artifacts::refs::show_ref::parse_show_ref;
use anyhow::Context;
use derive_new::new;
use flate2::read::ZlibDecoder;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// How the name → commit mapping is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RefsStrategy {
    /// Delegate to `git show-ref -d`
    #[default]
    ShowRef,
    /// Read packed-refs and the loose ref files directly
    Files,
}

/// Content of a single loose ref file
#[derive(Debug, Clone, PartialEq, Eq)]
enum LooseRef {
    Oid(ObjectId),
    SymRef(String),
}

/// References of one repository
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    pub fn resolve(&self, strategy: RefsStrategy, git: &Git) -> anyhow::Result<ResolvedRefs> {
        let refs = match strategy {
            RefsStrategy::ShowRef => self.resolve_with_show_ref(git)?,
            RefsStrategy::Files => self.resolve_from_files()?,
        };
        let refs = Self::peel_to_commits(refs, git)?;

        tracing::info!(
            ?strategy,
            branches = refs.branches().len(),
            tags = refs.tags().len(),
            remotes = refs.remotes().len(),
            stashes = refs.stashes().len(),
            "resolved refs"
        );

        Ok(refs)
    }

    /// Point every ref at the commit its target names
    ///
    /// Tag objects left unpeeled (e.g. stored only in a pack) are peeled here.
    /// Refs naming a tree or blob have no commit to point at and are dropped,
    /// so no ref edge can end outside the commit graph. When git cannot answer,
    /// the refs are kept as resolved.
    fn peel_to_commits(refs: ResolvedRefs, git: &Git) -> anyhow::Result<ResolvedRefs> {
        let targets = refs.targets().cloned().collect::<BTreeSet<_>>();
        if targets.is_empty() {
            return Ok(refs);
        }

        let requests = targets.iter().map(peel_request).collect::<String>();
        let Some(output) = git.capture_with_input(&BATCH_CHECK_ARGS, requests)? else {
            tracing::debug!("cannot check ref targets, keeping them unpeeled");
            return Ok(refs);
        };

        let commits = targets
            .into_iter()
            .zip(output.lines())
            .filter_map(|(target, line)| Some((target, parse_response(line)?)))
            .collect::<HashMap<_, _>>();

        Ok(refs
            .into_entries()
            .filter_map(|(name, target)| match commits.get(&target) {
                Some(commit) => Some((name, commit.clone())),
                None => {
                    tracing::debug!(
                        %name,
                        target = %target.to_short_oid(),
                        "dropping ref that does not name a commit"
                    );
                    None
                }
            })
            .collect())
    }

    /// Resolve through `git show-ref -d`
    pub fn resolve_with_show_ref(&self, git: &Git) -> anyhow::Result<ResolvedRefs> {
        let Some(output) = git.capture(&["show-ref", "-d"])? else {
            return Ok(ResolvedRefs::default());
        };

        Ok(parse_show_ref(&output)?.into_iter().collect())
    }

    /// Resolve by reading packed-refs, then overlaying loose refs
    pub fn resolve_from_files(&self) -> anyhow::Result<ResolvedRefs> {
        let mut refs = self.read_packed_refs();
        let mut symrefs = BTreeMap::new();

        for (name, loose) in self.read_loose_refs()? {
            match loose {
                LooseRef::Oid(oid) => {
                    let oid = match name.kind() {
                        Some(RefKind::Tag) => self.peel_loose_tag(oid),
                        _ => oid,
                    };
                    refs.insert(name, oid);
                }
                LooseRef::SymRef(target) => {
                    symrefs.insert(name, target);
                }
            }
        }

        for (name, target) in &symrefs {
            match Self::follow_symref(target, &refs, &symrefs) {
                Some(oid) => {
                    refs.insert(name.clone(), oid);
                }
                None => tracing::debug!(%name, %target, "dropping unresolvable symbolic ref"),
            }
        }

        Ok(refs.into_iter().collect())
    }

    fn read_packed_refs(&self) -> BTreeMap<RefName, ObjectId> {
        let path = self.packed_refs_path();
        if !path.exists() {
            return BTreeMap::new();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => parse_packed_refs(&content),
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "skipping unreadable packed-refs");
                BTreeMap::new()
            }
        }
    }

    fn read_loose_refs(&self) -> anyhow::Result<Vec<(RefName, LooseRef)>> {
        let refs_path = self.refs_path();
        let symref_regex = regex::Regex::new(SYMREF_REGEX)
            .with_context(|| format!("invalid symref regex: {SYMREF_REGEX}"))?;

        Ok(WalkDir::new(&refs_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let name = Self::loose_ref_name(&refs_path, entry.path())?;
                let content = match std::fs::read_to_string(entry.path()) {
                    Ok(content) => content,
                    Err(err) => {
                        tracing::debug!(%name, %err, "skipping unreadable loose ref");
                        return None;
                    }
                };
                let content = content.trim();

                if let Some(symref) = symref_regex.captures(content) {
                    return Some((name, LooseRef::SymRef(symref[1].to_string())));
                }

                match ObjectId::try_parse(content.to_string()) {
                    Ok(oid) => Some((name, LooseRef::Oid(oid))),
                    Err(_) => {
                        tracing::debug!(%name, "skipping malformed loose ref");
                        None
                    }
                }
            })
            .collect::<Vec<_>>())
    }

    /// `refs/heads/feature/x` on disk → `heads/feature/x`
    fn loose_ref_name(refs_path: &Path, path: &Path) -> Option<RefName> {
        let relative = path.strip_prefix(refs_path).ok()?;

        // git's own lock files are never refs
        if relative.extension().is_some_and(|ext| ext == "lock") {
            return None;
        }

        let segments = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;

        Some(RefName::new(segments.join("/")))
    }

    /// Follow `ref: refs/...` chains through the merged mapping
    fn follow_symref(
        target: &str,
        refs: &BTreeMap<RefName, ObjectId>,
        symrefs: &BTreeMap<RefName, String>,
    ) -> Option<ObjectId> {
        let mut target = RefName::from_full_path(target)?;

        for _ in 0..MAX_REF_DEPTH {
            if let Some(oid) = refs.get(&target) {
                return Some(oid.clone());
            }
            target = RefName::from_full_path(symrefs.get(&target)?)?;
        }

        None
    }

    /// Replace a tag object by the commit it tags
    ///
    /// Only loose objects can be read; anything stored in a pack is left as is.
    fn peel_loose_tag(&self, oid: ObjectId) -> ObjectId {
        let mut current = oid;

        for _ in 0..MAX_REF_DEPTH {
            let object_path = self.objects_path().join(current.to_path());
            if !object_path.exists() {
                tracing::debug!(
                    oid = %current.to_short_oid(),
                    "object not loose, leaving unpeeled"
                );
                return current;
            }

            match Self::peel_object(&object_path) {
                Ok(Peeled::Tag(target)) => {
                    tracing::trace!(
                        tag = %current.to_short_oid(),
                        target = %target.to_short_oid(),
                        "peeled annotated tag"
                    );
                    current = target;
                }
                Ok(Peeled::Other(_)) => return current,
                Err(err) => {
                    tracing::debug!(
                        oid = %current.to_short_oid(),
                        err = %format!("{err:#}"),
                        "failed to peel tag"
                    );
                    return current;
                }
            }
        }

        current
    }

    fn peel_object(object_path: &Path) -> anyhow::Result<Peeled> {
        let file = std::fs::File::open(object_path)
            .with_context(|| format!("Unable to read object file {}", object_path.display()))?;
        let mut object = BufReader::new(ZlibDecoder::new(file));

        peel_once(&mut object)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn packed_refs_path(&self) -> PathBuf {
        self.path.join("packed-refs")
    }

    pub fn objects_path(&self) -> PathBuf {
        self.path.join("objects")
    }
}
