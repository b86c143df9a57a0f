use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use userdir::cli::{self, Args, Command};
use userdir::config::ServerConfig;
use userdir::server;

/// Initialize tracing with `RUST_LOG` filtering. Logs go to stderr so
/// `query` output stays clean on stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);
    let mut config = ServerConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            server::run(config).await
        }
        Command::Query {
            dataset,
            search,
            page,
            page_size,
        } => {
            let out = cli::run_query(
                dataset,
                &search,
                page.as_deref(),
                page_size.as_deref(),
                config.default_page_size,
            )?;
            println!("{}", out);
            Ok(())
        }
    }
}
