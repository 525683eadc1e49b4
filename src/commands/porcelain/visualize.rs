use crate::areas::history::History;
use crate::areas::refs::RefsStrategy;
use crate::areas::repository::Repository;
use crate::artifacts::graph::SUBJECT_MAX_WIDTH;
use crate::artifacts::graph::emitter::GraphEmitter;
use anyhow::Context;

#[derive(Debug, Clone)]
pub struct VisualizeOptions {
    pub refs: RefsStrategy,
    pub subject_width: usize,
}

impl Default for VisualizeOptions {
    fn default() -> Self {
        VisualizeOptions {
            refs: RefsStrategy::default(),
            subject_width: SUBJECT_MAX_WIDTH,
        }
    }
}

impl Repository {
    /// Write the commit graph of the whole repository as a dot document
    pub fn visualize(&self, opts: &VisualizeOptions) -> anyhow::Result<()> {
        let refs = self.refs().resolve(opts.refs, self.git())?;
        let history = History::spawn(self.git())?;

        let mut writer = self.writer();
        let drawn = GraphEmitter::new(&mut *writer, opts.subject_width)
            .emit(&refs, history)
            .context("failed to write graph")?;

        tracing::info!(commits = drawn, path = %self.path().display(), "graph written");

        Ok(())
    }
}
