use crate::artifacts::dot::attribute::{Attribute, render_attr_list};
use std::io::Write;

/// One level of block indentation
const INDENT: &str = "  ";

/// Marker that starts every node identifier and every escape sequence
const NODE_ID_MARKER: char = '_';

/// Map an arbitrary ref name or hash onto a bare Graphviz identifier
///
/// Alphanumeric ASCII is kept, every other character becomes `_xx` per UTF-8
/// byte. The marker is escaped as well (`_` → `_5f`), so the mapping is
/// injective: `heads/main` → `_heads_2fmain`.
pub fn nodify(name: &str) -> String {
    let mut id = String::with_capacity(name.len() + 1);
    id.push(NODE_ID_MARKER);

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c);
        } else {
            let mut buffer = [0; 4];
            for byte in c.encode_utf8(&mut buffer).bytes() {
                id.push_str(&format!("{NODE_ID_MARKER}{byte:02x}"));
            }
        }
    }

    id
}

/// Streaming writer for a Graphviz dot document
///
/// Every statement is written as soon as it is produced; blocks only track
/// the indentation depth.
pub struct DotWriter<W: Write> {
    out: W,
    depth: usize,
}

impl<W: Write> DotWriter<W> {
    pub fn new(out: W) -> Self {
        DotWriter { out, depth: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `digraph <name> { node [shape=box]; ... }`
    pub fn digraph(
        &mut self,
        name: &str,
        body: impl FnOnce(&mut Self) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        self.block(&format!("digraph {name} {{"), |dot| {
            dot.line("node [shape=box];")?;
            body(dot)
        })
    }

    /// `subgraph { rank=same; ... }`
    pub fn same_rank_subgraph(
        &mut self,
        body: impl FnOnce(&mut Self) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        self.block("subgraph {", |dot| {
            dot.line("rank=same;")?;
            body(dot)
        })
    }

    pub fn comment(&mut self, text: &str) -> anyhow::Result<()> {
        self.line(&format!("// {text}"))
    }

    pub fn node(&mut self, name: &str, attrs: &[Attribute]) -> anyhow::Result<()> {
        self.line(&format!("{}{};", nodify(name), render_attr_list(attrs)))
    }

    pub fn edge(&mut self, from: &str, to: &str, attrs: &[Attribute]) -> anyhow::Result<()> {
        self.line(&format!(
            "{} -> {}{};",
            nodify(from),
            nodify(to),
            render_attr_list(attrs)
        ))
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn block(
        &mut self,
        opening: &str,
        body: impl FnOnce(&mut Self) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        self.line(opening)?;

        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result?;

        self.line("}")
    }

    fn line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}{}", INDENT.repeat(self.depth), line)?;
        Ok(())
    }
}
