//! Buffered script output
//!
//! Thin wrapper over any async sink that maps I/O failures into dump errors
//! and counts bytes for the session stats. Fragments are handed over as soon
//! as they are produced; nothing is held back until the final flush.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::{Error, Result};

/// Incremental writer for the generated SQL script
pub struct ScriptWriter<W> {
    inner: W,
    bytes_written: u64,
}

impl<W: AsyncWrite + Unpin + Send> ScriptWriter<W> {
    /// Wrap an output sink
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    /// Append a UTF-8 fragment to the script
    pub async fn write(&mut self, fragment: &str) -> Result<()> {
        self.inner
            .write_all(fragment.as_bytes())
            .await
            .map_err(|e| Error::write_with_source("Failed to write to destination", e))?;
        self.bytes_written += fragment.len() as u64;
        Ok(())
    }

    /// Flush buffered output down to the sink
    pub async fn flush(&mut self) -> Result<()> {
        self.inner
            .flush()
            .await
            .map_err(|e| Error::write_with_source("Failed to flush destination", e))
    }

    /// Total bytes accepted so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Consume the writer and return the underlying sink
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_and_count() {
        let mut writer = ScriptWriter::new(Vec::new());
        writer.write("-- header\n").await.unwrap();
        writer.write("SELECT 1;\n").await.unwrap();
        writer.flush().await.unwrap();

        assert_eq!(writer.bytes_written(), 20);
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "-- header\nSELECT 1;\n");
    }

    #[tokio::test]
    async fn test_empty_fragment() {
        let mut writer = ScriptWriter::new(Vec::new());
        writer.write("").await.unwrap();
        assert_eq!(writer.bytes_written(), 0);
    }
}
