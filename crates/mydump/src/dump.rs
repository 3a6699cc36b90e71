//! Dump orchestration
//!
//! Sequences the whole session over one connection and one output stream:
//! preamble, then per table the schema section followed by the data section.
//! Each phase is awaited to completion before the next statement is
//! submitted, so the script order always matches the table order.
//!
//! Every failure path converges into the single returned result. When a
//! session fails after the destination was created, the partial file is
//! removed best-effort; the error that aborted the session is returned
//! either way.

use std::path::Path;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::fs::File;
use tokio::io::{AsyncWrite, BufWriter};
use tracing::{debug, info, warn};

use crate::catalog::resolve_tables;
use crate::config::DumpConfig;
use crate::connection::Connection;
use crate::data::dump_table_data;
use crate::error::{Error, Result};
use crate::mysql::MySqlConnection;
use crate::schema::dump_table_schema;
use crate::writer::ScriptWriter;

/// Tool name stamped into the script preamble
const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
/// Tool version stamped into the script preamble
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summary of a completed dump session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DumpStats {
    /// Number of tables dumped
    pub tables: u64,
    /// Total rows written across all tables
    pub rows: u64,
    /// Bytes written to the destination
    pub bytes_written: u64,
    /// Wall-clock duration of the session
    pub elapsed: Duration,
}

/// Dump a database into the configured destination file.
///
/// Opens the destination, connects to the server and streams every selected
/// table's schema and data into the file. Returns exactly once: either the
/// session stats or the first error encountered.
pub async fn dump(config: &DumpConfig) -> Result<DumpStats> {
    let file = create_destination(&config.dest).await?;

    let result = match MySqlConnection::connect(config).await {
        Ok(mut conn) => drive(config, &mut conn, file).await,
        Err(e) => {
            // Close the handle before cleanup removes the file
            drop(file);
            Err(e)
        }
    };

    finish(&config.dest, result).await
}

/// Dump a database through an already established connection.
///
/// Same contract as [`dump`], for callers that manage their own connection.
pub async fn dump_with_connection<C>(config: &DumpConfig, conn: &mut C) -> Result<DumpStats>
where
    C: Connection + ?Sized,
{
    let file = create_destination(&config.dest).await?;
    let result = drive(config, conn, file).await;
    finish(&config.dest, result).await
}

async fn create_destination(dest: &Path) -> Result<File> {
    File::create(dest).await.map_err(|e| {
        Error::destination_with_source(format!("Failed to create {}", dest.display()), e)
    })
}

async fn drive<C>(config: &DumpConfig, conn: &mut C, file: File) -> Result<DumpStats>
where
    C: Connection + ?Sized,
{
    let start = Instant::now();
    info!(
        "Dumping database {} on {} into {}",
        config.database,
        config.host,
        config.dest.display()
    );

    let mut writer = ScriptWriter::new(BufWriter::new(file));
    let (tables, rows) = run_dump(config, conn, &mut writer).await?;
    writer.flush().await?;

    let stats = DumpStats {
        tables,
        rows,
        bytes_written: writer.bytes_written(),
        elapsed: start.elapsed(),
    };

    info!(
        "Dump complete: {} tables, {} rows, {} bytes in {:?}",
        stats.tables, stats.rows, stats.bytes_written, stats.elapsed
    );

    Ok(stats)
}

async fn finish(dest: &Path, result: Result<DumpStats>) -> Result<DumpStats> {
    if result.is_err() {
        remove_partial_output(dest).await;
    }
    result
}

/// Best-effort removal of a partially written destination.
///
/// The error that aborted the session always wins: a missing file is
/// ignored and any other removal failure is only logged.
async fn remove_partial_output(dest: &Path) {
    match tokio::fs::remove_file(dest).await {
        Ok(()) => debug!("Removed partial dump file {}", dest.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove partial dump file {}: {}", dest.display(), e),
    }
}

/// Run the dump protocol over an open connection and writer.
///
/// Returns the table and row counts. The connection is closed on success;
/// on error it is left to the caller to drop.
async fn run_dump<C, W>(
    config: &DumpConfig,
    conn: &mut C,
    writer: &mut ScriptWriter<W>,
) -> Result<(u64, u64)>
where
    C: Connection + ?Sized,
    W: AsyncWrite + Unpin + Send,
{
    write_preamble(writer, config).await?;

    let tables = resolve_tables(conn, config).await?;
    debug!("Dumping {} tables", tables.len());

    let mut total_rows: u64 = 0;
    for table in &tables {
        dump_table_schema(conn, writer, config, table).await?;
        total_rows += dump_table_data(conn, writer, config, table).await?;
    }

    conn.close().await?;

    Ok((tables.len() as u64, total_rows))
}

async fn write_preamble<W>(writer: &mut ScriptWriter<W>, config: &DumpConfig) -> Result<()>
where
    W: AsyncWrite + Unpin + Send,
{
    let dumped_on = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT");

    writer
        .write(&format!("-- {} {}\n--\n", TOOL_NAME, TOOL_VERSION))
        .await?;
    writer
        .write(&format!("-- Dumped on {}\n--\n", dumped_on))
        .await?;
    writer
        .write(&format!(
            "-- Host: {}    Database: {}\n\
             -- ------------------------------------------------------\n\n",
            config.host, config.database
        ))
        .await?;

    Ok(())
}
