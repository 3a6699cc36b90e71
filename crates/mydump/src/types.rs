//! Value and row types for mydump
//!
//! Every driver value is converted into one of these before rendering.
//! Temporal values arrive already formatted as text, so the literal writer
//! only has to deal with NULL, numbers, text and raw bytes.

/// A scalar value as read from the server
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL
    Null,
    /// Signed integer (TINYINT through BIGINT)
    Int(i64),
    /// Unsigned integer (BIGINT UNSIGNED)
    UInt(u64),
    /// 32-bit float (FLOAT)
    Float(f32),
    /// 64-bit float (DOUBLE)
    Double(f64),
    /// Text, including temporal values rendered to text
    Text(String),
    /// Binary payloads that are not valid UTF-8
    Bytes(Vec<u8>),
}

impl SqlValue {
    /// Check if the value is NULL
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get as string slice if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as owned string, converting numbers to their decimal form
    pub fn as_string(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::UInt(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::Double(n) => Some(n.to_string()),
            Self::Null | Self::Bytes(_) => None,
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

/// One result row, values in column order.
///
/// Column names are not stored per row; they belong to the stream that
/// produced the row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: Vec<SqlValue>,
}

impl Row {
    /// Create a row from values
    pub fn new(values: Vec<SqlValue>) -> Self {
        Self { values }
    }

    /// Get a value by position
    pub fn get(&self, idx: usize) -> Option<&SqlValue> {
        self.values.get(idx)
    }

    /// All values in column order
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Number of values in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<SqlValue>> for Row {
    fn from(values: Vec<SqlValue>) -> Self {
        Self::new(values)
    }
}
