//! mydump - Streaming MySQL dump tool
//!
//! Usage:
//!   # Dump every table of a database
//!   mydump -u root --password secret -d shop -o shop.sql
//!
//!   # Dump selected tables, in order, one INSERT per row
//!   mydump -u root -d shop -o shop.sql \
//!     --tables orders,customers \
//!     --skip-extended-insert
//!
//!   # Connection settings from the environment
//!   MYDUMP_HOST=db.example.com MYDUMP_PASSWORD=secret \
//!     mydump -u root -d shop -o shop.sql

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing with configured log level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = cli.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let config = cli.to_dump_config();
    let stats = mydump::dump(&config).await?;

    tracing::info!(
        "Dumped {} tables ({} rows, {} bytes) to {} in {:?}",
        stats.tables,
        stats.rows,
        stats.bytes_written,
        config.dest.display(),
        stats.elapsed
    );

    Ok(())
}
