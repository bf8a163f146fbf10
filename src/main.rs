//! # Profile Twin CLI (`twin`)
//!
//! The `twin` binary is the interface for Profile Twin. It provides
//! commands for building the document store from a profile, chatting
//! against it, searching it non-interactively, and inspecting it.
//!
//! ## Usage
//!
//! ```bash
//! twin --config ./twin.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `twin build` | Flatten the profile JSON into the document store |
//! | `twin chat` | Start the interactive chatbot |
//! | `twin query <terms>...` | Search the store and print matches |
//! | `twin stats` | Print store location, size, and per-type counts |
//!
//! Set `GROQ_API_KEY` to enable AI-generated chat answers; without it the
//! chatbot runs in basic mode and prints the matched context directly.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use profile_twin::{builder, chat, config, query, stats};

/// Profile Twin — a profile-backed question-answering chatbot.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. The file is optional; every setting has a built-in default. See
/// `config/twin.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "twin",
    about = "Profile Twin — a profile-backed question-answering chatbot",
    version,
    long_about = "Profile Twin flattens a structured profile JSON into a searchable document \
    store and answers questions about it, either by printing the matched context directly or \
    by forwarding it to a hosted completion API for a conversational answer."
)]
struct Cli {
    /// Path to configuration file (TOML). Optional; defaults apply when absent.
    #[arg(long, global = true, default_value = "./twin.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Build the document store from the profile JSON.
    ///
    /// Reads the raw profile, flattens every section into documents, and
    /// overwrites the store file whole. Rerunning regenerates all documents;
    /// there is no incremental mode.
    Build {
        /// Override the profile path from config.
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Override the store path from config.
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Start the interactive chatbot.
    ///
    /// Runs in AI mode when `GROQ_API_KEY` is set, otherwise in basic
    /// mode where responses are the raw matched context. Type `help`
    /// inside the session for commands.
    Chat,

    /// Search the document store and print the top matches.
    ///
    /// All terms are joined into one query. Documents containing the whole
    /// query as a substring rank ahead of per-word matches. With no matches
    /// the available document types and counts are listed instead.
    Query {
        /// Search terms (joined with spaces).
        terms: Vec<String>,
    },

    /// Print document store statistics.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Build { profile, store } => {
            if let Some(path) = profile {
                cfg.profile.path = path;
            }
            if let Some(path) = store {
                cfg.store.path = path;
            }
            builder::run_build(&cfg)?;
        }
        Commands::Chat => {
            chat::run_chat(cfg).await?;
        }
        Commands::Query { terms } => {
            query::run_query(&cfg, &terms)?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg)?;
        }
    }

    Ok(())
}
