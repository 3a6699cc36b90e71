//! Connection seam for the dump engine
//!
//! The engine talks to the server exclusively through these traits. A
//! session owns one connection and submits statements strictly one after
//! another; a live [`RowStream`] borrows the connection mutably, so no other
//! statement can start until the stream is dropped.

use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;

use crate::error::Result;
use crate::types::Row;

/// A connection executing statements in submission order
#[async_trait]
pub trait Connection: Send {
    /// Execute a statement and buffer the full result
    async fn query(&mut self, sql: &str) -> Result<Vec<Row>>;

    /// Execute a statement and stream the result one row at a time
    async fn query_stream<'a>(&'a mut self, sql: &str) -> Result<Box<dyn RowStream + 'a>>;

    /// Close the connection, releasing server-side state
    async fn close(&mut self) -> Result<()>;
}

/// Streaming row iterator with column identity resolved up front
pub trait RowStream: Send {
    /// Column names of the result set, in select order
    fn columns(&self) -> &[String];

    /// Get the next row
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Result<Option<Row>>> + Send + '_>>;
}
