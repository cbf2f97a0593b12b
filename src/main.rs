//! # embedscan CLI
//!
//! Command-line interface for locating published posts that embed the
//! read-more block within a date range.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `embedscan init` | Create the SQLite database and schema |
//! | `embedscan add` | Create a post (optionally with an embed block) |
//! | `embedscan search` | Print ids of marked published posts, newest first |
//!
//! ## Examples
//!
//! ```bash
//! embedscan init --config ./config/embedscan.toml
//! embedscan add --title "Welcome" --embed-post 42
//! embedscan search
//! embedscan search --date-after=2025-01-01 --date-before=2025-02-01
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use embedscan::{config, ingest, migrate, search};

/// embedscan — locate published posts that embed the read-more block
/// within a date range.
#[derive(Parser)]
#[command(
    name = "embedscan",
    about = "Locate published posts that embed the read-more block within a date range",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/embedscan.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and the posts table. Idempotent —
    /// running it multiple times is safe.
    Init,

    /// Create a post.
    Add {
        /// Post title.
        #[arg(long)]
        title: String,

        /// Post body text.
        #[arg(long)]
        body: Option<String>,

        /// Publication status. Only published posts are searchable.
        #[arg(long, default_value = "published")]
        status: String,

        /// Publication date (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`).
        /// Defaults to now.
        #[arg(long)]
        date: Option<String>,

        /// Append a read-more embed block referencing the given post id.
        #[arg(long)]
        embed_post: Option<i64>,
    },

    /// Search published posts containing the read-more embed.
    ///
    /// Prints matching post ids, newest first, one per line. Invalid
    /// date flags produce a warning, not a failure.
    Search {
        /// Inclusive lower bound. Accepts YYYY-MM-DD or
        /// YYYY-MM-DD HH:MM:SS. Defaults to midnight at the start of the
        /// configured window (30 days ago).
        #[arg(long)]
        date_after: Option<String>,

        /// Inclusive upper bound. Accepts YYYY-MM-DD or
        /// YYYY-MM-DD HH:MM:SS. Defaults to now.
        #[arg(long)]
        date_before: Option<String>,

        /// Fail on unrecognized dates instead of substituting defaults.
        #[arg(long)]
        strict_dates: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&cfg).await?;
            println!("Database initialized successfully.");
        }
        Commands::Add {
            title,
            body,
            status,
            date,
            embed_post,
        } => {
            ingest::run_add(&cfg, title, body, status, date, embed_post).await?;
        }
        Commands::Search {
            date_after,
            date_before,
            strict_dates,
        } => {
            search::run_search(&cfg, date_after, date_before, strict_dates).await?;
        }
    }

    Ok(())
}
