//! Schema section emission
//!
//! One section per table: a comment banner, an optional drop statement and
//! the CREATE TABLE statement exactly as the server reports it. The create
//! statement is never parsed or rewritten.

use tokio::io::AsyncWrite;
use tracing::debug;

use crate::config::DumpConfig;
use crate::connection::Connection;
use crate::error::{Error, Result};
use crate::escape::quote_identifier;
use crate::writer::ScriptWriter;

/// Write the schema section for one table
pub async fn dump_table_schema<C, W>(
    conn: &mut C,
    writer: &mut ScriptWriter<W>,
    config: &DumpConfig,
    table: &str,
) -> Result<()>
where
    C: Connection + ?Sized,
    W: AsyncWrite + Unpin + Send,
{
    let quoted = quote_identifier(table);
    let sql = format!("SHOW CREATE TABLE {}", quoted);
    let rows = conn.query(&sql).await?;

    // One row: (table name, create statement)
    let create = rows
        .first()
        .and_then(|row| row.get(1))
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::query_with_sql("Missing create statement in result", &sql))?;

    writer
        .write(&format!(
            "\n\n--\n-- Table structure for table {}\n--\n\n",
            quoted
        ))
        .await?;

    if config.add_drop_table {
        writer
            .write(&format!("DROP TABLE IF EXISTS {};\n", quoted))
            .await?;
    }

    writer.write(&format!("{};\n", create)).await?;

    debug!("Wrote schema section for table {}", table);

    Ok(())
}
