use crate::areas::git::Git;
use crate::artifacts::log::commit_reader::CommitReader;
use crate::artifacts::objects::commit::{Commit, LOG_FORMAT};
use anyhow::Context;
use std::io::BufReader;
use std::process::{Child, ChildStdout, ExitStatus};

/// Every commit reachable from any ref, read lazily from `git log`
///
/// The sequence is forward-only and cannot be restarted. Dropping it reaps
/// the `git log` child, killing it first if it is still running.
pub struct History {
    child: Child,
    commits: CommitReader<BufReader<ChildStdout>>,
    exhausted: bool,
}

impl History {
    pub fn spawn(git: &Git) -> anyhow::Result<Self> {
        let format = format!("--format={LOG_FORMAT}");
        let mut child = git.spawn(&["log", "--all", "--full-history", &format])?;

        let stdout = child
            .stdout
            .take()
            .context("stdout of git log was not captured")?;

        Ok(History {
            child,
            commits: CommitReader::new(BufReader::new(stdout)),
            exhausted: false,
        })
    }
}

impl Iterator for History {
    type Item = Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.commits.next();
        self.exhausted = commit.is_none();
        commit
    }
}

impl History {
    /// Wait for `git log` to exit, killing it first if the stream was not
    /// read to the end
    fn reap(&mut self) -> Option<ExitStatus> {
        // stopped early: git may be blocked writing to a pipe nobody reads
        if !self.exhausted {
            let _ = self.child.kill();
        }

        match self.child.wait() {
            Ok(status) => {
                if self.exhausted && !status.success() {
                    tracing::warn!(%status, "git log exited unsuccessfully");
                }
                Some(status)
            }
            Err(err) => {
                tracing::warn!(%err, "failed to wait for git log");
                None
            }
        }
    }
}

impl Drop for History {
    fn drop(&mut self) {
        self.reap();

        if self.commits.skipped() > 0 {
            tracing::info!(
                skipped = self.commits.skipped(),
                "skipped malformed log records"
            );
        }
    }
}
