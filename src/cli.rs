//! Command-line interface.

use crate::query::{PageRequest, RecordQueryEngine, Searchable};
use crate::records::seed;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

/// Searchable, paginated in-memory user directory
#[derive(Debug, Parser)]
#[command(name = "userdir", version, about = "Searchable, paginated in-memory user directory")]
pub struct Args {
    #[arg(long, global = true, help = "Verbose output")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        global = true,
        env = "USERDIR_CONFIG",
        value_name = "PATH",
        help = "Config file (default: ~/.userdir/config.toml)"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        #[arg(long, help = "Interface to bind")]
        host: Option<String>,

        #[arg(short, long, help = "Port to listen on")]
        port: Option<u16>,
    },

    /// Query a seed dataset once and print the page as JSON
    Query {
        #[arg(value_enum)]
        dataset: Dataset,

        #[arg(short, long, default_value = "", help = "Case-insensitive name/email filter")]
        search: String,

        #[arg(long, allow_hyphen_values = true, help = "1-based page number")]
        page: Option<String>,

        #[arg(long, allow_hyphen_values = true, help = "Records per page")]
        page_size: Option<String>,
    },
}

/// Built-in seed datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    /// Team members
    Members,
    /// Accounts
    Users,
    /// Directory users
    Directory,
}

/// Run one query against a seed dataset and render it as pretty JSON.
pub fn run_query(
    dataset: Dataset,
    search: &str,
    page: Option<&str>,
    page_size: Option<&str>,
    default_page_size: usize,
) -> Result<String> {
    let request = PageRequest::from_raw(Some(search), page, page_size, default_page_size);
    match dataset {
        Dataset::Members => render(&RecordQueryEngine::new(seed::members()), &request),
        Dataset::Users => render(&RecordQueryEngine::new(seed::accounts()), &request),
        Dataset::Directory => render(&RecordQueryEngine::new(seed::users()), &request),
    }
}

fn render<T: Searchable + Clone + Serialize>(
    engine: &RecordQueryEngine<T>,
    request: &PageRequest,
) -> Result<String> {
    let page = engine.run(request);
    tracing::debug!(total = page.total, page = page.page, "query complete");
    Ok(serde_json::to_string_pretty(&page)?)
}
