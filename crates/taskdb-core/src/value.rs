use chrono::{NaiveDate, NaiveDateTime};

use std::fmt;

/// A dynamically typed scalar stored in a [`Field`](crate::Field).
///
/// The variant set is closed: it covers exactly the scalar kinds the field
/// type enumeration can declare, plus `Null` for the empty state.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// No value set
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer, used for keys and size-like counts
    U64(u64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Calendar date without a time component
    Date(NaiveDate),

    /// Date and time, used for both date-time and timestamp columns
    DateTime(NaiveDateTime),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// Renders the canonical text form used both for SQL value literals and for
/// diagnostic display.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => f.write_str(if *v { "1" } else { "0" }),
            Self::I32(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Self::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::U32(src)
    }
}

impl From<u64> for Value {
    fn from(src: u64) -> Self {
        Self::U64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Self {
        Self::Date(src)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Self {
        Self::DateTime(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_text_forms() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Bool(true).to_string(), "1");
        assert_eq!(Value::Bool(false).to_string(), "0");
        assert_eq!(Value::I32(-7).to_string(), "-7");
        assert_eq!(Value::U64(42).to_string(), "42");
        assert_eq!(Value::F64(2.5).to_string(), "2.5");
        assert_eq!(Value::from("Jane").to_string(), "Jane");

        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(Value::Date(date).to_string(), "2026-03-09");

        let ts = date.and_hms_opt(14, 5, 0).unwrap();
        assert_eq!(Value::DateTime(ts).to_string(), "2026-03-09 14:05:00");
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Value::from(None::<u64>), Value::Null);
        assert_eq!(Value::from(Some(9u64)), Value::U64(9));
    }
}
