//! CLI argument parsing for mydump
//!
//! Every option is also settable through a MYDUMP_* environment variable.
//! Format toggles follow the mysqldump --skip-* convention: the features
//! are on by default and the flags turn them off.

use clap::Parser;
use mydump::DumpConfig;
use std::path::PathBuf;

/// mydump - Streaming MySQL dump tool
///
/// Exports the schema and data of a MySQL database into a single SQL
/// script that recreates the database when replayed against an empty
/// server.
#[derive(Parser, Debug)]
#[command(name = "mydump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // ============ Connection ============
    /// Database host to connect to
    #[arg(long, default_value = "localhost", env = "MYDUMP_HOST")]
    pub host: String,

    /// Database port
    #[arg(long, default_value = "3306", env = "MYDUMP_PORT")]
    pub port: u16,

    /// User for login
    #[arg(short, long, env = "MYDUMP_USER")]
    pub user: String,

    /// Password for login
    #[arg(long, env = "MYDUMP_PASSWORD")]
    pub password: Option<String>,

    /// Database to dump
    #[arg(short, long, env = "MYDUMP_DATABASE")]
    pub database: String,

    // ============ Selection ============
    /// Tables to dump, in the given order (comma-separated; default: all)
    #[arg(long, value_delimiter = ',', env = "MYDUMP_TABLES")]
    pub tables: Vec<String>,

    // ============ Output ============
    /// Destination file for the generated script
    #[arg(short = 'o', long, env = "MYDUMP_DEST")]
    pub dest: PathBuf,

    // ============ Format ============
    /// Write one INSERT statement per row instead of one per table
    #[arg(long, default_value = "false", env = "MYDUMP_SKIP_EXTENDED_INSERT")]
    pub skip_extended_insert: bool,

    /// Do not emit DROP TABLE IF EXISTS before each CREATE TABLE
    #[arg(long, default_value = "false", env = "MYDUMP_SKIP_ADD_DROP_TABLE")]
    pub skip_add_drop_table: bool,

    /// Do not surround table data with LOCK TABLES / UNLOCK TABLES
    #[arg(long, default_value = "false", env = "MYDUMP_SKIP_ADD_LOCKS")]
    pub skip_add_locks: bool,

    /// Do not surround table data with disable/enable keys statements
    #[arg(long, default_value = "false", env = "MYDUMP_SKIP_DISABLE_KEYS")]
    pub skip_disable_keys: bool,

    // ============ Logging ============
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,
}

impl Cli {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.user.is_empty() {
            return Err("user must not be empty".to_string());
        }
        if self.database.is_empty() {
            return Err("database must not be empty".to_string());
        }
        if self.dest.as_os_str().is_empty() {
            return Err("dest must not be empty".to_string());
        }
        if self.tables.iter().any(|t| t.is_empty()) {
            return Err("table names must not be empty".to_string());
        }
        Ok(())
    }

    /// Convert CLI args to dump configuration
    pub fn to_dump_config(&self) -> DumpConfig {
        let mut config = DumpConfig::new(&self.host, &self.user, &self.database, &self.dest)
            .with_port(self.port)
            .with_extended_insert(!self.skip_extended_insert)
            .with_add_drop_table(!self.skip_add_drop_table)
            .with_add_locks(!self.skip_add_locks)
            .with_disable_keys(!self.skip_disable_keys);

        if let Some(password) = &self.password {
            config = config.with_password(password);
        }
        if !self.tables.is_empty() {
            config = config.with_tables(self.tables.clone());
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cli() {
        let cli = Cli::parse_from(["mydump", "-u", "root", "-d", "shop", "-o", "shop.sql"]);
        assert_eq!(cli.host, "localhost");
        assert_eq!(cli.port, 3306);
        assert!(cli.tables.is_empty());
        assert!(!cli.skip_extended_insert);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_table_list_parsing() {
        let cli = Cli::parse_from([
            "mydump",
            "-u",
            "root",
            "-d",
            "shop",
            "-o",
            "shop.sql",
            "--tables",
            "orders,customers",
        ]);
        assert_eq!(cli.tables, vec!["orders", "customers"]);

        let config = cli.to_dump_config();
        assert_eq!(
            config.tables,
            Some(vec!["orders".to_string(), "customers".to_string()])
        );
    }

    #[test]
    fn test_skip_flags_invert_into_config() {
        let cli = Cli::parse_from([
            "mydump",
            "-u",
            "root",
            "-d",
            "shop",
            "-o",
            "shop.sql",
            "--skip-extended-insert",
            "--skip-add-locks",
        ]);

        let config = cli.to_dump_config();
        assert!(!config.extended_insert);
        assert!(!config.add_locks);
        assert!(config.add_drop_table);
        assert!(config.disable_keys);
    }

    #[test]
    fn test_connection_fields_flow_into_config() {
        let cli = Cli::parse_from([
            "mydump",
            "--host",
            "db.example.com",
            "--port",
            "3307",
            "-u",
            "backup",
            "--password",
            "secret",
            "-d",
            "shop",
            "-o",
            "shop.sql",
        ]);

        let config = cli.to_dump_config();
        assert_eq!(config.host, "db.example.com");
        assert_eq!(config.port, 3307);
        assert_eq!(config.user, "backup");
        assert_eq!(config.password.as_deref(), Some("secret"));
        assert_eq!(config.database, "shop");
        assert_eq!(config.dest, PathBuf::from("shop.sql"));
    }

    #[test]
    fn test_validation_rejects_empty_table_name() {
        let cli = Cli::parse_from([
            "mydump",
            "-u",
            "root",
            "-d",
            "shop",
            "-o",
            "shop.sql",
            "--tables",
            "orders,,customers",
        ]);
        assert!(cli.validate().is_err());
    }
}
