//! Error types for mydump
//!
//! One variant per failure phase of a dump session: destination setup,
//! connection handling, query execution and script output. Failures during
//! best-effort removal of a partial destination are logged, never returned;
//! the error that aborted the session always wins.

use thiserror::Error;

/// Result type for mydump operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mydump
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    /// Destination file could not be created
    #[error("destination error: {message}")]
    Destination {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Connection failed
    #[error("connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query execution failed
    #[error("query error: {message}")]
    Query {
        message: String,
        sql: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Writing to the output stream failed
    #[error("write error: {message}")]
    Write {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a destination error
    pub fn destination(message: impl Into<String>) -> Self {
        Self::Destination {
            message: message.into(),
            source: None,
        }
    }

    /// Create a destination error with source
    pub fn destination_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Destination {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection error with source
    pub fn connection_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a query error
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
            sql: None,
            source: None,
        }
    }

    /// Create a query error with SQL
    pub fn query_with_sql(message: impl Into<String>, sql: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
            sql: Some(sql.into()),
            source: None,
        }
    }

    /// Create a write error
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write {
            message: message.into(),
            source: None,
        }
    }

    /// Create a write error with source
    pub fn write_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Write {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::connection("connection refused");
        assert!(err.to_string().contains("connection refused"));

        let err = Error::query_with_sql("syntax error", "SHOW CREATE TABLE `users`");
        assert!(err.to_string().contains("syntax error"));

        let err = Error::destination("permission denied");
        assert!(err.to_string().starts_with("destination error"));
    }

    #[test]
    fn test_query_error_carries_sql() {
        let err = Error::query_with_sql("bad statement", "SELECT * FROM `t`");
        match err {
            Error::Query { sql, .. } => assert_eq!(sql.as_deref(), Some("SELECT * FROM `t`")),
            _ => panic!("expected query error"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = Error::write_with_source("flush failed", io);
        assert!(std::error::Error::source(&err).is_some());

        let err = Error::write("flush failed");
        assert!(std::error::Error::source(&err).is_none());
    }
}
