//! MySQL backend for the dump engine
//!
//! Implements the connection seam over mysql_async. Buffered statements run
//! through the text protocol; data selects run through the binary protocol
//! (`exec_iter`) so numeric and NULL values arrive typed instead of as byte
//! strings.

use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::{BinaryProtocol, Conn, OptsBuilder, QueryResult};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

use crate::config::DumpConfig;
use crate::connection::{Connection, RowStream};
use crate::error::{Error, Result};
use crate::types::{Row, SqlValue};

/// Convert a MySQL value to a dump value.
///
/// Temporal values are rendered to literal text here. Zero clock parts
/// collapse to a date-only literal and zero microseconds are omitted, so the
/// output replays into the same column values.
fn mysql_value_to_sql(val: mysql_async::Value) -> SqlValue {
    match val {
        mysql_async::Value::NULL => SqlValue::Null,
        mysql_async::Value::Bytes(b) => {
            // Try to convert to string, otherwise keep as bytes
            match String::from_utf8(b) {
                Ok(s) => SqlValue::Text(s),
                Err(e) => SqlValue::Bytes(e.into_bytes()),
            }
        }
        mysql_async::Value::Int(n) => SqlValue::Int(n),
        mysql_async::Value::UInt(n) => SqlValue::UInt(n),
        mysql_async::Value::Float(f) => SqlValue::Float(f),
        mysql_async::Value::Double(d) => SqlValue::Double(d),
        mysql_async::Value::Date(year, month, day, hour, min, sec, micro) => {
            if hour == 0 && min == 0 && sec == 0 && micro == 0 {
                SqlValue::Text(format!("{:04}-{:02}-{:02}", year, month, day))
            } else if micro == 0 {
                SqlValue::Text(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                    year, month, day, hour, min, sec
                ))
            } else {
                SqlValue::Text(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
                    year, month, day, hour, min, sec, micro
                ))
            }
        }
        mysql_async::Value::Time(neg, days, hours, mins, secs, micro) => {
            let sign = if neg { "-" } else { "" };
            let total_hours = days * 24 + hours as u32;
            if micro == 0 {
                SqlValue::Text(format!("{}{:02}:{:02}:{:02}", sign, total_hours, mins, secs))
            } else {
                SqlValue::Text(format!(
                    "{}{:02}:{:02}:{:02}.{:06}",
                    sign, total_hours, mins, secs, micro
                ))
            }
        }
    }
}

/// Convert a MySQL row to a dump row
fn row_from_mysql(row: mysql_async::Row) -> Row {
    let values: Vec<SqlValue> = (0..row.len())
        .map(|i| {
            let val: mysql_async::Value = row.get(i).unwrap_or(mysql_async::Value::NULL);
            mysql_value_to_sql(val)
        })
        .collect();
    Row::new(values)
}

/// MySQL connection implementation
pub struct MySqlConnection {
    conn: Option<Conn>,
}

impl MySqlConnection {
    /// Open a connection to the server named in the configuration
    pub async fn connect(config: &DumpConfig) -> Result<Self> {
        let opts = OptsBuilder::default()
            .ip_or_hostname(config.host.clone())
            .tcp_port(config.port)
            .user(Some(config.user.clone()))
            .pass(config.password.clone())
            .db_name(Some(config.database.clone()));

        let conn = Conn::new(opts)
            .await
            .map_err(|e| Error::connection(format!("Failed to connect to MySQL: {}", e)))?;

        debug!(
            "Connected to MySQL at {}:{} database {}",
            config.host, config.port, config.database
        );

        Ok(Self { conn: Some(conn) })
    }

    fn conn_mut(&mut self) -> Result<&mut Conn> {
        self.conn
            .as_mut()
            .ok_or_else(|| Error::connection("Connection not available"))
    }
}

#[async_trait]
impl Connection for MySqlConnection {
    async fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        let rows: Vec<mysql_async::Row> = self
            .conn_mut()?
            .query(sql)
            .await
            .map_err(|e| Error::query_with_sql(format!("Failed to execute query: {}", e), sql))?;

        Ok(rows.into_iter().map(row_from_mysql).collect())
    }

    async fn query_stream<'a>(&'a mut self, sql: &str) -> Result<Box<dyn RowStream + 'a>> {
        // The statement is held for as long as the stream borrows the
        // connection, so hand over an owned copy instead of the caller's slice.
        let result = self
            .conn_mut()?
            .exec_iter(sql.to_string(), ())
            .await
            .map_err(|e| Error::query_with_sql(format!("Failed to execute query: {}", e), sql))?;

        let columns: Vec<String> = result
            .columns()
            .map(|cols| cols.iter().map(|c| c.name_str().to_string()).collect())
            .unwrap_or_default();

        Ok(Box::new(MySqlRowStream { result, columns }))
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            conn.disconnect()
                .await
                .map_err(|e| Error::connection(format!("Failed to close connection: {}", e)))?;
        }
        Ok(())
    }
}

/// Streaming result set over a live connection.
///
/// Holding the stream keeps the connection mutably borrowed, so the next
/// statement cannot start until the stream is dropped.
pub struct MySqlRowStream<'a> {
    result: QueryResult<'a, 'static, BinaryProtocol>,
    columns: Vec<String>,
}

impl RowStream for MySqlRowStream<'_> {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Result<Option<Row>>> + Send + '_>> {
        Box::pin(async move {
            let row = self
                .result
                .next()
                .await
                .map_err(|e| Error::query(format!("Failed to fetch row: {}", e)))?;
            Ok(row.map(row_from_mysql))
        })
    }
}
