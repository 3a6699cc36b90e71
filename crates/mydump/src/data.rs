//! Data section emission
//!
//! Streams `SELECT *` one row at a time; each row is rendered and handed to
//! the writer before the next row is fetched, so memory use stays bounded by
//! a single row no matter how large the table is.
//!
//! A table with no rows produces no output at all: no banner, no lock or
//! key statements, no INSERT.

use tokio::io::AsyncWrite;
use tracing::debug;

use crate::config::DumpConfig;
use crate::connection::Connection;
use crate::error::Result;
use crate::escape::{literal, quote_identifier};
use crate::writer::ScriptWriter;

/// Write the data section for one table, returning the number of rows
pub async fn dump_table_data<C, W>(
    conn: &mut C,
    writer: &mut ScriptWriter<W>,
    config: &DumpConfig,
    table: &str,
) -> Result<u64>
where
    C: Connection + ?Sized,
    W: AsyncWrite + Unpin + Send,
{
    let quoted = quote_identifier(table);
    let sql = format!("SELECT * FROM {}", quoted);
    let mut stream = conn.query_stream(&sql).await?;

    let prefix = {
        let columns: Vec<String> = stream
            .columns()
            .iter()
            .map(|c| quote_identifier(c))
            .collect();
        format!("INSERT INTO {}({}) VALUES", quoted, columns.join(", "))
    };

    let mut rows_written: u64 = 0;

    while let Some(row) = stream.next().await? {
        let values: Vec<String> = row.values().iter().map(literal).collect();
        let tuple = values.join(", ");

        if rows_written == 0 {
            writer
                .write(&format!("\n--\n-- Dumping data for table {}\n--\n\n", quoted))
                .await?;
            if config.add_locks {
                writer
                    .write(&format!("LOCK TABLES {} WRITE;\n", quoted))
                    .await?;
            }
            if config.disable_keys {
                writer
                    .write(&format!(
                        "/*!40000 ALTER TABLE {} DISABLE KEYS */;\n",
                        quoted
                    ))
                    .await?;
            }
        }

        if config.extended_insert {
            if rows_written == 0 {
                writer.write(&format!("{}\n({})", prefix, tuple)).await?;
            } else {
                writer.write(&format!(",\n({})", tuple)).await?;
            }
        } else {
            writer.write(&format!("{} ({});\n", prefix, tuple)).await?;
        }

        rows_written += 1;
    }

    if rows_written > 0 {
        if config.extended_insert {
            writer.write(";\n").await?;
        }
        if config.disable_keys {
            writer
                .write(&format!("/*!40000 ALTER TABLE {} ENABLE KEYS */;", quoted))
                .await?;
        }
        if config.add_locks {
            writer.write("\nUNLOCK TABLES;\n").await?;
        }
    }

    debug!("Wrote {} rows for table {}", rows_written, table);

    Ok(rows_written)
}
