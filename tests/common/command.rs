use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

const AUTHOR_NAME: &str = "A U Thor";
const AUTHOR_EMAIL: &str = "author@example.com";
const AUTHOR_DATE: &str = "2023-01-01T12:00:00+0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// An empty repository whose HEAD points at `main`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    git(repository_dir.path(), &["init", "-q"]);
    git(
        repository_dir.path(),
        &["symbolic-ref", "HEAD", "refs/heads/main"],
    );
    repository_dir
}

/// A repository with a single root commit on `main`
#[fixture]
pub fn single_commit_repository_dir(init_repository_dir: TempDir) -> TempDir {
    git_commit(init_repository_dir.path(), "init");
    init_repository_dir
}

pub fn run_gitlogviz_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlogviz").expect("Failed to find gitlogviz binary");
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// `git` isolated from the user's configuration, with a fixed identity
pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    cmd.envs(vec![
        ("GIT_CONFIG_NOSYSTEM", "1"),
        ("GIT_CONFIG_GLOBAL", "/dev/null"),
        ("GIT_AUTHOR_NAME", AUTHOR_NAME),
        ("GIT_AUTHOR_EMAIL", AUTHOR_EMAIL),
        ("GIT_AUTHOR_DATE", AUTHOR_DATE),
        ("GIT_COMMITTER_NAME", AUTHOR_NAME),
        ("GIT_COMMITTER_EMAIL", AUTHOR_EMAIL),
        ("GIT_COMMITTER_DATE", AUTHOR_DATE),
    ]);
    cmd.args(["-c", "commit.gpgsign=false", "-c", "tag.gpgsign=false"]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run a git command that must succeed and return its trimmed stdout
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = run_git_command(dir, args)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Commit without touching the working tree and return the new hash
pub fn git_commit(dir: &Path, message: &str) -> String {
    git(dir, &["commit", "-q", "--allow-empty", "-m", message]);
    git(dir, &["rev-parse", "HEAD"])
}

pub fn author_line() -> String {
    format!("{AUTHOR_NAME} {AUTHOR_EMAIL}")
}
