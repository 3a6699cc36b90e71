//! # mydump
//!
//! Streaming MySQL dump engine: exports the schema and data of a database
//! into a single SQL script that recreates the database when replayed
//! against an empty server.
//!
//! ## Features
//!
//! - **Streaming**: rows are rendered and written one at a time, so memory
//!   use is bounded by a single row regardless of table size
//! - **Strict ordering**: one connection, strictly sequential statements;
//!   a table never reaches the output before the previous one is complete
//! - **mysqldump-style toggles**: extended inserts, drop statements, lock
//!   and key markers, all on by default
//! - **Single completion result**: every failure path converges into one
//!   returned `Result`, with best-effort cleanup of partial output
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mydump::{dump, DumpConfig};
//!
//! let config = DumpConfig::new("localhost", "root", "shop", "shop.sql")
//!     .with_password("secret");
//!
//! let stats = dump(&config).await?;
//! println!(
//!     "{} tables, {} rows, {} bytes",
//!     stats.tables, stats.rows, stats.bytes_written
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod connection;
pub mod data;
pub mod dump;
pub mod error;
pub mod escape;
pub mod mysql;
pub mod schema;
pub mod types;
pub mod writer;

/// Prelude module for convenient imports
pub mod prelude {
    // Configuration
    pub use crate::config::DumpConfig;

    // Engine entry points
    pub use crate::dump::{dump, dump_with_connection, DumpStats};

    // Connection seam
    pub use crate::connection::{Connection, RowStream};
    pub use crate::mysql::MySqlConnection;

    // Values and errors
    pub use crate::error::{Error, Result};
    pub use crate::types::{Row, SqlValue};
}

// Re-export commonly used items at crate root
pub use config::DumpConfig;
pub use dump::{dump, dump_with_connection, DumpStats};
pub use error::{Error, Result};
