use crate::stmt::{Insert, Select, Statement};

use taskdb_core::Value;

/// Serializes a statement to SQL text.
///
/// Every value literal is the value's canonical text form, quoted
/// uniformly. Embedded quote characters are not escaped; statements are
/// assumed to carry trusted input. Parameterized statements would close
/// that gap and are the known follow-up here.
#[derive(Debug, Default)]
pub struct Serializer;

impl Serializer {
    pub fn new() -> Self {
        Self
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        match stmt {
            Statement::Insert(stmt) => self.serialize_insert(stmt),
            Statement::Select(stmt) => self.serialize_select(stmt),
        }
    }

    fn serialize_insert(&self, stmt: &Insert) -> String {
        let mut columns = String::new();
        let mut values = String::new();

        let mut sep = "";
        for (column, value) in stmt.columns.iter().zip(&stmt.values) {
            columns.push_str(sep);
            columns.push_str(column);

            values.push_str(sep);
            push_quoted(&mut values, value);

            sep = ", ";
        }

        format!(
            "INSERT INTO {}.{} ({}) VALUES ({})",
            stmt.database, stmt.table, columns, values
        )
    }

    fn serialize_select(&self, stmt: &Select) -> String {
        let mut ret = format!("SELECT * FROM {}.{} WHERE ", stmt.database, stmt.table);

        let mut sep = "";
        for (column, value) in &stmt.filter {
            ret.push_str(sep);
            ret.push_str(column);
            ret.push_str(" = ");
            push_quoted(&mut ret, value);

            sep = " AND ";
        }

        ret
    }
}

fn push_quoted(dst: &mut String, value: &Value) {
    dst.push('\'');
    dst.push_str(&value.to_string());
    dst.push('\'');
}
