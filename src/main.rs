//! chmsg - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use git2::Repository;

use chmsg::commit::{CommitOptions, GitBackend};
use chmsg::config::{GitConfig, OverlayConfig};
use chmsg::derive::{Derivation, Deriver};
use chmsg::diff::WorkingTreeDiff;

/// Commit with a message derived from new changelog entries.
#[derive(Parser, Debug)]
#[command(name = "chmsg")]
#[command(about = "Commit with a message derived from new changelog entries")]
#[command(version)]
struct Cli {
    /// Paths to commit (defaults to all changed files)
    paths: Vec<String>,

    /// Use the given message instead of deriving one
    #[arg(short, long)]
    message: Option<String>,

    /// Read the commit message from a file instead of deriving one
    #[arg(short = 'F', long = "file", value_name = "FILE")]
    logfile: Option<PathBuf>,

    /// Changelog file name (overrides changelog.filename in git config)
    #[arg(short = 'c', long)]
    changelog: Option<String>,

    /// Path to the repository or working tree
    #[arg(short = 'C', long = "repo", default_value = ".")]
    repo: PathBuf,

    /// Print the derived message to stdout without committing
    #[arg(long)]
    show: bool,

    /// Commit without opening the editor
    #[arg(long)]
    no_edit: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let repo = Repository::discover(&cli.repo)
        .context("Not a git repository. Run chmsg from within a git repository.")?;

    let git_config = GitConfig::open(&repo).context("Failed to read git configuration")?;
    let config = OverlayConfig::new(&git_config, cli.changelog.clone());
    let diff = WorkingTreeDiff::new(&repo);
    let deriver = Deriver::new(&diff, &config);

    let options = CommitOptions {
        message: cli.message.clone(),
        logfile: cli.logfile.clone(),
        force_editor: false,
    };

    if cli.show {
        // Standalone filter mode: derive and print, no commit.
        let message = match deriver
            .derive(&cli.paths, &options)
            .context("Failed to derive a message from the changelog")?
        {
            Derivation::Message(log) => log,
            Derivation::Passthrough => options.message.clone().unwrap_or_default(),
        };
        println!("{message}");
        return Ok(());
    }

    let backend = GitBackend::new(&repo).with_editor(!cli.no_edit);
    let oid = deriver
        .commit(&backend, &cli.paths, &options)
        .context("Failed to create commit")?;

    println!("Committed {oid}");
    Ok(())
}
