use clap::{ArgAction, Parser};
use colored::Colorize;
use gitlogviz::areas::git::DEFAULT_GIT_PROGRAM;
use gitlogviz::areas::refs::RefsStrategy;
use gitlogviz::areas::repository::Repository;
use gitlogviz::artifacts::graph::SUBJECT_MAX_WIDTH;
use gitlogviz::commands::porcelain::visualize::VisualizeOptions;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitlogviz",
    version = "0.1.0",
    about = "Render the commit graph of a git repository as a Graphviz dot document",
    long_about = "Run this in the top level of a git working copy. The output is meant \
    to be sent to Graphviz, e.g. `gitlogviz | dot -Tpdf -o git-log.pdf`. \
    Branches, stashes, tags and remote-tracking branches are drawn as colored \
    nodes pointing at the commits they reference.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        long,
        value_name = "PATH",
        default_value = ".",
        help = "The working copy to draw"
    )]
    repo: PathBuf,
    #[arg(
        long,
        value_enum,
        default_value_t = RefsStrategy::ShowRef,
        help = "How refs are resolved: via `git show-ref` or by reading .git directly"
    )]
    refs: RefsStrategy,
    #[arg(
        long,
        value_name = "N",
        default_value_t = SUBJECT_MAX_WIDTH,
        help = "Commit subjects longer than this are truncated"
    )]
    subject_width: usize,
    #[arg(
        long,
        value_name = "PROGRAM",
        default_value = DEFAULT_GIT_PROGRAM,
        help = "The git executable to run"
    )]
    git: String,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Log more details to stderr (repeat for more)"
    )]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let repository = Repository::open(&cli.repo, &cli.git, Box::new(std::io::stdout().lock()))?;

    repository.visualize(&VisualizeOptions {
        refs: cli.refs,
        subject_width: cli.subject_width,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    colored::control::set_override(std::io::stderr().is_terminal());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "fatal:".red().bold());
            ExitCode::FAILURE
        }
    }
}
