//! # Repo Digest CLI (`digest`)
//!
//! The `digest` binary turns a repository payload (a JSON array from the
//! upstream fetch stage) into grounded summaries for AI consumption.
//!
//! ## Usage
//!
//! ```bash
//! digest [--config ./digest.toml] <command> [INPUT]
//! ```
//!
//! `INPUT` is a JSON file; omit it or pass `-` to read stdin.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `digest analyze` | Print the aggregate summary as JSON |
//! | `digest details` | Print the flattened per-repository text |
//! | `digest readme` | List README status and main idea per repository |
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=repo_digest=debug`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use repo_digest::{analyze, config, details, readme};

/// Repo Digest CLI: deterministic repository summaries for AI tools.
#[derive(Parser)]
#[command(
    name = "digest",
    about = "Repo Digest — deterministic repository summaries for AI tools",
    version,
    long_about = "Repo Digest normalizes repository metadata fetched from a source-control \
    hosting API into structured reviews, aggregate statistics, and flattened text, so that \
    every fact an AI model sees is grounded in literal repository data."
)]
struct Cli {
    /// Path to an optional configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize repositories as JSON.
    ///
    /// Emits the username, repository counts, language histogram, profile
    /// strength, per-repository reviews, and the flattened details text.
    Analyze {
        /// Repository payload (JSON array). Reads stdin when omitted or `-`.
        input: Option<PathBuf>,

        /// Owner login to report instead of the one found in the payload.
        #[arg(long)]
        owner: Option<String>,

        /// Write the summary to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Emit single-line JSON.
        #[arg(long)]
        compact: bool,
    },

    /// Print the flattened per-repository text used for retrieval.
    Details {
        /// Repository payload (JSON array). Reads stdin when omitted or `-`.
        input: Option<PathBuf>,
    },

    /// List each repository's README status and main idea.
    Readme {
        /// Repository payload (JSON array). Reads stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::Config::default(),
    };

    match cli.command {
        Commands::Analyze {
            input,
            owner,
            output,
            compact,
        } => {
            let input = input.or_else(|| cfg.input.path.clone());
            analyze::run_analyze(
                &cfg,
                input.as_deref(),
                owner.as_deref(),
                output.as_deref(),
                compact,
            )?;
        }
        Commands::Details { input } => {
            let input = input.or_else(|| cfg.input.path.clone());
            details::run_details(input.as_deref())?;
        }
        Commands::Readme { input } => {
            let input = input.or_else(|| cfg.input.path.clone());
            readme::run_readme(input.as_deref())?;
        }
    }

    Ok(())
}
