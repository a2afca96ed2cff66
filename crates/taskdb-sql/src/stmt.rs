use taskdb_core::{Record, Value};

/// A statement the mapper can ask the driver to execute.
#[derive(Debug, Clone)]
pub enum Statement {
    Insert(Insert),
    Select(Select),
}

/// `INSERT INTO <db>.<table> (<columns>) VALUES (<values>)`
#[derive(Debug, Clone)]
pub struct Insert {
    pub database: String,
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

/// `SELECT * FROM <db>.<table> WHERE <col> = <value> AND ...`
#[derive(Debug, Clone)]
pub struct Select {
    pub database: String,
    pub table: String,
    pub filter: Vec<(String, Value)>,
}

impl Statement {
    /// Builds an insert from every field of the record that holds a value,
    /// in the record's field-declaration order.
    pub fn insert(database: impl Into<String>, record: &Record) -> Self {
        let mut columns = Vec::new();
        let mut values = Vec::new();

        for field in record.fields_with_values() {
            columns.push(field.column().to_string());
            values.push(field.value().clone());
        }

        Self::Insert(Insert {
            database: database.into(),
            table: record.table_name().to_string(),
            columns,
            values,
        })
    }

    /// Builds an equality-AND filter over the given pairs.
    ///
    /// An empty filter serializes to a bare `WHERE` clause; callers must
    /// supply at least one pair for a statement the server will accept.
    pub fn select(
        database: impl Into<String>,
        table: impl Into<String>,
        filter: &[(String, Value)],
    ) -> Self {
        Self::Select(Select {
            database: database.into(),
            table: table.into(),
            filter: filter.to_vec(),
        })
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Select(_))
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
