use crate::{async_trait, Result};

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Debug;

/// A raw scalar cell as it comes off the wire, before type-directed
/// coercion into a [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    UInt(u64),
    Double(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl SqlValue {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short kind name for conversion diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Double(_) => "double",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
        }
    }
}

/// The result of executing one statement.
///
/// For SELECT statements the column metadata must be complete: hydration
/// matches cells to record fields by column name. For inserts the
/// driver reports the last generated key.
#[derive(Debug, Clone, Default)]
pub struct ExecResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
    pub last_insert_id: u64,
}

impl ExecResponse {
    pub fn inserted(last_insert_id: u64) -> Self {
        Self {
            last_insert_id,
            ..Self::default()
        }
    }

    pub fn rows(columns: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self {
            columns,
            rows,
            last_insert_id: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The statement execution collaborator.
///
/// Implementations own every transport concern: connection lifecycle,
/// authentication, and the wire protocol. Each call is independent; no
/// connection state is shared between calls.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    async fn execute(&self, sql: &str) -> Result<ExecResponse>;
}
