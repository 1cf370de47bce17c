//! Shelfview CLI - browse a book catalog from the terminal

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use shelfview_core::{FilterConfig, ReadingStatus, SortBy, StatusFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelfview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the catalog document
    #[arg(short, long, global = true, default_value = "books.json")]
    catalog: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books matching the given filters
    List {
        /// Restrict to books carrying at least one of these tags (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Restrict to books in one of these language codes (repeatable)
        #[arg(short, long = "language")]
        languages: Vec<String>,

        /// Reading status to show
        #[arg(short, long, default_value = "read")]
        status: StatusArg,

        /// Sort order for the listing
        #[arg(long, default_value = "date-read")]
        sort: SortArg,

        /// Match a substring of title or author, case-insensitively
        #[arg(long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display aggregate counters for the whole catalog
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the tags and languages available for filtering
    Filters {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Status selector, including the distinguished "all" option
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Read,
    WantToRead,
    All,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Read => StatusFilter::Only(ReadingStatus::Read),
            StatusArg::WantToRead => StatusFilter::Only(ReadingStatus::WantToRead),
            StatusArg::All => StatusFilter::All,
        }
    }
}

/// Sort mode selector
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    DateRead,
    Rating,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::DateRead => SortBy::DateRead,
            SortArg::Rating => SortBy::Rating,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelfview_cli=debug,shelfview_core=debug"
    } else {
        "shelfview_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::List {
            tags,
            languages,
            status,
            sort,
            search,
            json,
        } => {
            let config = FilterConfig {
                tags: tags.into_iter().collect(),
                languages: languages.into_iter().collect(),
                status: status.into(),
                sort_by: sort.into(),
                search_term: search.unwrap_or_default(),
            };
            commands::list(&cli.catalog, &config, json).await
        }

        Commands::Stats { json } => commands::stats(&cli.catalog, json).await,

        Commands::Filters { json } => commands::filters(&cli.catalog, json).await,
    }
}
