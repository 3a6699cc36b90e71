//! Table selection
//!
//! The dump covers either the caller-supplied table list, verbatim and in
//! caller order, or every table the server reports, in server order. No
//! existence check is made for explicit names; a missing table surfaces as a
//! query error when its schema is fetched.

use tracing::debug;

use crate::config::DumpConfig;
use crate::connection::Connection;
use crate::error::Result;

/// Resolve the ordered list of tables to dump
pub async fn resolve_tables<C>(conn: &mut C, config: &DumpConfig) -> Result<Vec<String>>
where
    C: Connection + ?Sized,
{
    if let Some(tables) = &config.tables {
        debug!("Using explicit table list ({} tables)", tables.len());
        return Ok(tables.clone());
    }

    let rows = conn.query("SHOW TABLES").await?;
    let tables: Vec<String> = rows
        .iter()
        .filter_map(|row| row.get(0).and_then(|v| v.as_string()))
        .collect();

    debug!("Resolved {} tables from catalog", tables.len());

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::RowStream;
    use crate::error::Error;
    use crate::types::{Row, SqlValue};
    use async_trait::async_trait;

    struct CatalogStub {
        tables: Vec<&'static str>,
        queries: Vec<String>,
    }

    #[async_trait]
    impl Connection for CatalogStub {
        async fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
            self.queries.push(sql.to_string());
            if sql == "SHOW TABLES" {
                return Ok(self
                    .tables
                    .iter()
                    .map(|t| Row::new(vec![SqlValue::Text(t.to_string())]))
                    .collect());
            }
            Err(Error::query_with_sql("unexpected statement", sql))
        }

        async fn query_stream<'a>(&'a mut self, _sql: &str) -> Result<Box<dyn RowStream + 'a>> {
            panic!("not used by catalog resolution")
        }

        async fn close(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_catalog_order_preserved() {
        let mut conn = CatalogStub {
            tables: vec!["zeta", "alpha", "mid"],
            queries: vec![],
        };
        let config = DumpConfig::default();

        let tables = resolve_tables(&mut conn, &config).await.unwrap();
        assert_eq!(tables, vec!["zeta", "alpha", "mid"]);
        assert_eq!(conn.queries, vec!["SHOW TABLES"]);
    }

    #[tokio::test]
    async fn test_explicit_list_skips_catalog_query() {
        let mut conn = CatalogStub {
            tables: vec!["a", "b"],
            queries: vec![],
        };
        let config = DumpConfig::default()
            .with_tables(vec!["b".to_string(), "missing".to_string()]);

        let tables = resolve_tables(&mut conn, &config).await.unwrap();
        assert_eq!(tables, vec!["b", "missing"]);
        assert!(conn.queries.is_empty(), "explicit list must not hit the server");
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let mut conn = CatalogStub {
            tables: vec![],
            queries: vec![],
        };
        let config = DumpConfig::default();

        let tables = resolve_tables(&mut conn, &config).await.unwrap();
        assert!(tables.is_empty());
    }
}
