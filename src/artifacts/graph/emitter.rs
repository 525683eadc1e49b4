//! Graph emission
//!
//! Writes the whole document in one pass:
//!
//! 1. header with the default node shape
//! 2. same-rank subgraph holding branch and stash nodes
//! 3. branch edges, then stash edges
//! 4. tag nodes and edges, then remote nodes and edges
//! 5. commit nodes, each followed by its parent edges
//! 6. footer
//!
//! Branch and stash edges stay outside the subgraph, otherwise Graphviz would
//! pull their commits up into the same rank.

use crate::artifacts::dot::attribute::Attribute;
use crate::artifacts::dot::writer::DotWriter;
use crate::artifacts::graph::GRAPH_NAME;
use crate::artifacts::graph::commit_label::commit_label;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::refs::ref_name::RefKind;
use crate::artifacts::refs::resolved_refs::ResolvedRefs;
use std::io::Write;

pub struct GraphEmitter<W: Write> {
    dot: DotWriter<W>,
    subject_width: usize,
}

impl<W: Write> GraphEmitter<W> {
    pub fn new(out: W, subject_width: usize) -> Self {
        GraphEmitter {
            dot: DotWriter::new(out),
            subject_width,
        }
    }

    pub fn into_inner(self) -> W {
        self.dot.into_inner()
    }

    /// Emit the document and return how many commits were drawn
    pub fn emit(
        &mut self,
        refs: &ResolvedRefs,
        commits: impl Iterator<Item = Commit>,
    ) -> anyhow::Result<usize> {
        let subject_width = self.subject_width;
        let mut drawn = 0;

        self.dot.digraph(GRAPH_NAME, |dot| {
            dot.same_rank_subgraph(|dot| {
                ref_nodes(dot, refs, RefKind::Branch)?;
                ref_nodes(dot, refs, RefKind::Stash)
            })?;

            dot.comment("branch edges")?;
            ref_edges(dot, refs, RefKind::Branch)?;
            dot.comment("stash edges")?;
            ref_edges(dot, refs, RefKind::Stash)?;

            dot.comment("tag nodes and edges")?;
            ref_nodes_with_edges(dot, refs, RefKind::Tag)?;
            dot.comment("remote nodes and edges")?;
            ref_nodes_with_edges(dot, refs, RefKind::Remote)?;

            dot.comment("commit nodes and edges")?;
            for commit in commits {
                commit_node(dot, &commit, subject_width)?;
                drawn += 1;
            }

            Ok(())
        })?;

        self.dot.flush()?;
        Ok(drawn)
    }
}

fn ref_node_attrs(name: &str, kind: RefKind) -> [Attribute; 2] {
    [
        Attribute::raw("color", kind.color()),
        Attribute::string("label", name),
    ]
}

fn ref_edge_attrs(kind: RefKind) -> [Attribute; 1] {
    [Attribute::raw("color", kind.color())]
}

fn ref_nodes<W: Write>(
    dot: &mut DotWriter<W>,
    refs: &ResolvedRefs,
    kind: RefKind,
) -> anyhow::Result<()> {
    for name in refs.view(kind).keys() {
        dot.node(name.as_ref(), &ref_node_attrs(name.as_ref(), kind))?;
    }
    Ok(())
}

fn ref_edges<W: Write>(
    dot: &mut DotWriter<W>,
    refs: &ResolvedRefs,
    kind: RefKind,
) -> anyhow::Result<()> {
    for (name, oid) in refs.view(kind) {
        dot.edge(name.as_ref(), oid.as_ref(), &ref_edge_attrs(kind))?;
    }
    Ok(())
}

fn ref_nodes_with_edges<W: Write>(
    dot: &mut DotWriter<W>,
    refs: &ResolvedRefs,
    kind: RefKind,
) -> anyhow::Result<()> {
    for (name, oid) in refs.view(kind) {
        dot.node(name.as_ref(), &ref_node_attrs(name.as_ref(), kind))?;
        dot.edge(name.as_ref(), oid.as_ref(), &ref_edge_attrs(kind))?;
    }
    Ok(())
}

fn commit_node<W: Write>(
    dot: &mut DotWriter<W>,
    commit: &Commit,
    subject_width: usize,
) -> anyhow::Result<()> {
    let label = commit_label(commit, subject_width);
    dot.node(
        commit.oid().as_ref(),
        &[Attribute::raw("label", label.to_string())],
    )?;

    for parent in commit.parents() {
        dot.edge(commit.oid().as_ref(), parent.as_ref(), &[])?;
    }

    if commit.is_merge() {
        tracing::trace!(
            commit = %commit.oid().to_short_oid(),
            parents = commit.parents().len(),
            "merge commit"
        );
    }

    Ok(())
}
