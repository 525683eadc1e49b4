//! The `git` executable as a data source
//!
//! All commands run inside the working copy and are read to completion (or
//! streamed) before the next one starts.

use anyhow::Context;
use derive_new::new;
use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};

pub const DEFAULT_GIT_PROGRAM: &str = "git";

#[derive(Debug, Clone, new)]
pub struct Git {
    program: String,
    work_dir: Box<Path>,
}

impl Git {
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `git <args>` and capture its stdout
    ///
    /// A non-zero exit status yields `Ok(None)`: `git show-ref` exits with 1
    /// when there is nothing to show, which is not a failure for us.
    pub fn capture(&self, args: &[&str]) -> anyhow::Result<Option<String>> {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to run {}", self.describe(args)))?;

        self.stdout_on_success(args, output)
    }

    /// Like [`Git::capture`], feeding `input` to the command's stdin
    ///
    /// The input is written from a separate thread so a command that answers
    /// line by line cannot fill its stdout pipe while we are still writing.
    pub fn capture_with_input(
        &self,
        args: &[&str],
        input: String,
    ) -> anyhow::Result<Option<String>> {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to run {}", self.describe(args)))?;

        let mut stdin = child
            .stdin
            .take()
            .with_context(|| format!("stdin of {} was not captured", self.describe(args)))?;
        let feeder = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .with_context(|| format!("failed to wait for {}", self.describe(args)))?;

        match feeder.join() {
            Ok(Ok(())) => {}
            Ok(Err(err)) => tracing::debug!(command = %args.join(" "), %err, "short write to git"),
            Err(_) => anyhow::bail!("input thread of {} panicked", self.describe(args)),
        }

        self.stdout_on_success(args, output)
    }

    /// Start `git <args>` with its stdout piped back to us
    pub fn spawn(&self, args: &[&str]) -> anyhow::Result<Child> {
        tracing::debug!(command = %args.join(" "), "spawning git");

        self.command(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to spawn {}", self.describe(args)))
    }

    fn stdout_on_success(&self, args: &[&str], output: Output) -> anyhow::Result<Option<String>> {
        if !output.status.success() {
            tracing::debug!(
                command = %self.describe(args),
                status = %output.status,
                "git exited unsuccessfully"
            );
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()))
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.program(), args.join(" "))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.program);
        command.current_dir(&self.work_dir).args(args);
        command
    }
}
