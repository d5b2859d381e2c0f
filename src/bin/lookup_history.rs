//! Command-line access to the lookup history.
//!
//! Operates on the same `history` slot the UI uses, stored as
//! `<dir>/history.json`.
//!
//! ```bash
//! lookup-history add 8.8.8.8
//! lookup-history --limit 50 list
//! lookup-history search ipv6
//! lookup-history classify AS13335
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use clap::{Parser, Subcommand};
use lookup_kit::config::load_config_from_env;
use lookup_kit::history::{classify, FileStore, HistoryItem, HistoryLimit, HistoryStore};
use std::path::PathBuf;
use std::process::ExitCode;

/// Manage the local lookup history
#[derive(Parser, Debug)]
#[command(name = "lookup-history")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the history slot (defaults to the user config dir)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Maximum number of entries to keep (negative for unbounded)
    #[arg(long, global = true, allow_negative_numbers = true)]
    limit: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a query
    Add {
        /// The query to record
        query: String,
    },
    /// Print all entries, most recent first
    List,
    /// Print entries whose query or type contains TERM
    Search {
        /// Case-insensitive search term
        term: String,
    },
    /// Delete all entries with this exact query
    Remove {
        /// The query to remove
        query: String,
    },
    /// Delete every entry
    Clear,
    /// Print the type of a query without recording it
    Classify {
        /// The query to classify
        query: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { query } => println!("{}", classify(&query)),
        Commands::Add { query } => {
            if query.trim().is_empty() {
                eprintln!("lookup-history: query must not be empty");
                return ExitCode::FAILURE;
            }
            match open_store(cli.dir, cli.limit) {
                Some(store) => store.add(&query),
                None => return ExitCode::FAILURE,
            }
        }
        Commands::List => match open_store(cli.dir, cli.limit) {
            Some(store) => print_items(&store.list()),
            None => return ExitCode::FAILURE,
        },
        Commands::Search { term } => match open_store(cli.dir, cli.limit) {
            Some(store) => print_items(&store.search(&term)),
            None => return ExitCode::FAILURE,
        },
        Commands::Remove { query } => match open_store(cli.dir, cli.limit) {
            Some(store) => store.remove(&query),
            None => return ExitCode::FAILURE,
        },
        Commands::Clear => match open_store(cli.dir, cli.limit) {
            Some(store) => store.clear(),
            None => return ExitCode::FAILURE,
        },
    }

    ExitCode::SUCCESS
}

/// Opens the history in `dir`, or the default directory, reporting failures on stderr.
fn open_store(dir: Option<PathBuf>, limit: Option<i64>) -> Option<HistoryStore<FileStore>> {
    let storage = match dir {
        Some(dir) => FileStore::new(dir),
        None => match FileStore::open_default() {
            Ok(storage) => storage,
            Err(e) => {
                eprintln!("lookup-history: {}", e);
                return None;
            }
        },
    };

    let config = load_config_from_env();
    let limit = HistoryLimit::from_config_value(limit.unwrap_or(config.history_limit));
    log::debug!("Using {} with limit {:?}", storage.dir().display(), limit);

    Some(HistoryStore::new(storage, limit))
}

fn print_items(items: &[HistoryItem]) {
    for item in items {
        let time = item
            .created_at()
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| item.timestamp.to_string());
        println!("{}\t{}\t{}", item.query, item.query_type, time);
    }
}
