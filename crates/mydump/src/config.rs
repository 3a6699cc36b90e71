//! Dump configuration
//!
//! Resolved once before a session starts; the engine never mutates it.
//!
//! # Security Note
//!
//! This struct implements a custom Debug that redacts the password field
//! to prevent accidental leakage to logs.

use std::path::PathBuf;

/// Configuration for one dump session.
///
/// The format toggles default to the classic mysqldump behavior: extended
/// inserts, drop statements, table locks and key markers are all on.
#[derive(Clone)]
pub struct DumpConfig {
    /// MySQL host
    pub host: String,
    /// MySQL port (default: 3306)
    pub port: u16,
    /// Username for authentication
    pub user: String,
    /// Password for authentication
    pub password: Option<String>,
    /// Database to dump
    pub database: String,
    /// Explicit table subset, dumped in the given order (None = all tables
    /// in the order the server reports them)
    pub tables: Option<Vec<String>>,
    /// Destination file for the generated script
    pub dest: PathBuf,
    /// Batch all rows of a table into one multi-row INSERT statement
    pub extended_insert: bool,
    /// Emit DROP TABLE IF EXISTS before each CREATE TABLE
    pub add_drop_table: bool,
    /// Surround each table's data with LOCK TABLES / UNLOCK TABLES
    pub add_locks: bool,
    /// Surround each table's data with disable/enable keys markers
    pub disable_keys: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: None,
            database: String::new(),
            tables: None,
            dest: PathBuf::new(),
            extended_insert: true,
            add_drop_table: true,
            add_locks: true,
            disable_keys: true,
        }
    }
}

impl DumpConfig {
    /// Create a configuration for the given server, database and destination
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        database: impl Into<String>,
        dest: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            database: database.into(),
            dest: dest.into(),
            ..Default::default()
        }
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Restrict the dump to the given tables, in the given order
    pub fn with_tables(mut self, tables: Vec<String>) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Toggle multi-row INSERT statements
    pub fn with_extended_insert(mut self, enabled: bool) -> Self {
        self.extended_insert = enabled;
        self
    }

    /// Toggle DROP TABLE IF EXISTS statements
    pub fn with_add_drop_table(mut self, enabled: bool) -> Self {
        self.add_drop_table = enabled;
        self
    }

    /// Toggle LOCK TABLES / UNLOCK TABLES around table data
    pub fn with_add_locks(mut self, enabled: bool) -> Self {
        self.add_locks = enabled;
        self
    }

    /// Toggle disable/enable keys markers around table data
    pub fn with_disable_keys(mut self, enabled: bool) -> Self {
        self.disable_keys = enabled;
        self
    }
}

impl std::fmt::Debug for DumpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DumpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("database", &self.database)
            .field("tables", &self.tables)
            .field("dest", &self.dest)
            .field("extended_insert", &self.extended_insert)
            .field("add_drop_table", &self.add_drop_table)
            .field("add_locks", &self.add_locks)
            .field("disable_keys", &self.disable_keys)
            .finish()
    }
}
