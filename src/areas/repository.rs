use crate::areas::git::Git;
use crate::areas::refs::Refs;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory at the root of a working copy
pub const GIT_DIR_NAME: &str = ".git";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    git: Git,
    refs: Refs,
}

impl Repository {
    /// Open the working copy at `path`
    ///
    /// Fails without touching `writer` when `path` has no `.git` directory.
    pub fn open(
        path: &Path,
        git_program: &str,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        if !Self::is_working_copy(path) {
            anyhow::bail!("not a git repository ({GIT_DIR_NAME} directory not found)");
        }

        let path = path.canonicalize()?;
        let git = Git::new(git_program.to_string(), path.clone().into_boxed_path());
        let refs = Refs::new(path.join(GIT_DIR_NAME).into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            git,
            refs,
        })
    }

    pub fn is_working_copy(path: &Path) -> bool {
        path.join(GIT_DIR_NAME).is_dir()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
