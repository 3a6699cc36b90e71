//! Identifier quoting and literal rendering for MySQL scripts
//!
//! One uniform rendering per scalar value: NULL and numbers are written
//! bare, everything else becomes a single-quoted escaped string. There are
//! no type-specific encodings beyond that.

use crate::types::SqlValue;

/// Quote an identifier (database, table or column name) with backticks
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Escape a string for use inside a single-quoted MySQL literal
pub fn escape_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', "\\\"")
}

/// Render a scalar value as a SQL literal
pub fn literal(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Int(n) => n.to_string(),
        SqlValue::UInt(n) => n.to_string(),
        SqlValue::Float(n) => n.to_string(),
        SqlValue::Double(n) => n.to_string(),
        SqlValue::Text(s) => format!("'{}'", escape_string(s)),
        SqlValue::Bytes(b) => format!("'{}'", escape_string(&String::from_utf8_lossy(b))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("users"), "`users`");
        assert_eq!(quote_identifier("my table"), "`my table`");
        assert_eq!(quote_identifier("weird`name"), "`weird``name`");
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("plain"), "plain");
        assert_eq!(escape_string("it's"), "it\\'s");
        assert_eq!(escape_string("a\\b"), "a\\\\b");
        assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
    }

    #[test]
    fn test_literal_null_and_numbers() {
        assert_eq!(literal(&SqlValue::Null), "NULL");
        assert_eq!(literal(&SqlValue::Int(-3)), "-3");
        assert_eq!(literal(&SqlValue::UInt(18446744073709551615)), "18446744073709551615");
        assert_eq!(literal(&SqlValue::Double(1.5)), "1.5");
    }

    #[test]
    fn test_literal_text() {
        assert_eq!(literal(&SqlValue::Text("a".into())), "'a'");
        assert_eq!(literal(&SqlValue::Text("it's".into())), "'it\\'s'");
        assert_eq!(
            literal(&SqlValue::Text("2024-01-02 03:04:05".into())),
            "'2024-01-02 03:04:05'"
        );
    }

    #[test]
    fn test_literal_bytes_lossy() {
        assert_eq!(literal(&SqlValue::Bytes(b"abc".to_vec())), "'abc'");
        // Invalid UTF-8 falls back to the replacement character
        let rendered = literal(&SqlValue::Bytes(vec![0xff, b'a']));
        assert!(rendered.starts_with('\''));
        assert!(rendered.ends_with('\''));
        assert!(rendered.contains('a'));
    }
}
