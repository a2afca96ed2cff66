use taskdb_core::{Driver, ExecResponse, Field, FieldType, Record, Result, SqlValue, Value};
use taskdb_sql::{Serializer, Statement};

use chrono::NaiveTime;

/// The mapper: translates records into write statements and query rows back
/// into hydrated records.
///
/// Business-rule failures (record already stored, missing required fields,
/// row not found, row/schema mismatch) never produce an `Err`; they append
/// to an error report and return `Ok(false)`. The report is cleared at the
/// start of every public operation so stale messages never leak into the
/// next operation's outcome. Only genuine defects escape as `Err`.
#[derive(Debug)]
pub struct Db {
    driver: Box<dyn Driver>,
    database: String,
    serializer: Serializer,
    errors: String,
}

impl Db {
    pub fn new(driver: impl Driver, database: impl Into<String>) -> Self {
        Self {
            driver: Box::new(driver),
            database: database.into(),
            serializer: Serializer::new(),
            errors: String::new(),
        }
    }

    /// Every message accumulated by the most recent operation.
    pub fn error_report(&self) -> &str {
        &self.errors
    }

    /// Inserts a record that is not yet in storage.
    ///
    /// On success the storage-generated primary key is written back into
    /// the record and every field's modified flag is cleared.
    pub async fn insert(&mut self, record: &mut Record) -> Result<bool> {
        self.errors.clear();

        if record.is_in_storage() {
            self.append_error("The record is already in the database.\n");
            return Ok(false);
        }

        if !record.all_required_fields_present() {
            let report = record.missing_required_fields();
            self.append_error(&report);
            return Ok(false);
        }

        let sql = self
            .serializer
            .serialize(&Statement::insert(&self.database, record));
        tracing::debug!(sql, table = record.table_name(), "insert");

        match self.driver.execute(&sql).await {
            Ok(response) => {
                record.set_primary_key(response.last_insert_id);
                record.accept_storage_write();
                Ok(true)
            }
            Err(err) => {
                self.append_error(&format!(
                    "insert into {} failed: {err}\n",
                    record.table_name()
                ));
                Ok(false)
            }
        }
    }

    /// Fetches the single row matching the equality filter and hydrates
    /// `target` from it.
    ///
    /// The target's existing field values are untouched when no row
    /// matches.
    pub async fn fetch_one(
        &mut self,
        table: &str,
        filter: &[(String, Value)],
        target: &mut Record,
    ) -> Result<bool> {
        self.errors.clear();

        let sql = self
            .serializer
            .serialize(&Statement::select(&self.database, table, filter));
        tracing::debug!(sql, table, "fetch one");

        let response = match self.driver.execute(&sql).await {
            Ok(response) => response,
            Err(err) => {
                self.append_error(&format!("select from {table} failed: {err}\n"));
                return Ok(false);
            }
        };

        if response.is_empty() {
            self.append_error("No results from query, record not found in database!\n");
            return Ok(false);
        }

        Ok(self.hydrate(&response, target))
    }

    fn append_error(&mut self, message: &str) {
        self.errors.push_str(message);
    }

    /// Populates the target's fields from the first result row, matching
    /// cells to fields by column name and coercing per declared type.
    fn hydrate(&mut self, response: &ExecResponse, target: &mut Record) -> bool {
        let mut success = true;
        let row = &response.rows[0];

        for (column, cell) in response.columns.iter().zip(row) {
            let field = match target.field_mut(column) {
                Ok(field) => field,
                Err(_) => {
                    // The response does not match the target's schema. That
                    // is a defect in either the query or the declaration,
                    // not something to ignore.
                    self.append_error(&format!(
                        "target model {} does not contain field: {column}\n",
                        target.model_name()
                    ));
                    return false;
                }
            };

            if cell.is_null() {
                continue;
            }

            if let Err(message) = coerce(field, cell) {
                self.append_error(&format!(
                    "hydrating {}: {message}\n",
                    target.model_name()
                ));
                success = false;
            }
        }

        success
    }
}

/// Writes one wire cell into a field, directed by the field's declared
/// type. Hydrated values do not mark the field dirty.
///
/// Unlike the read accessors, a wire cell that cannot satisfy the declared
/// type is an error here: silently defaulting or truncating would corrupt
/// the record. Integer cells must fit the declared width exactly.
fn coerce(field: &mut Field, cell: &SqlValue) -> std::result::Result<(), String> {
    let value = match (field.ty(), cell) {
        (FieldType::Boolean, SqlValue::Int(v)) => Some(Value::from(*v != 0)),
        (FieldType::Boolean, SqlValue::UInt(v)) => Some(Value::from(*v != 0)),
        (FieldType::Date, SqlValue::Date(v)) => Some(Value::from(*v)),
        (FieldType::Date, SqlValue::DateTime(v)) => Some(Value::from(v.date())),
        (FieldType::DateTime | FieldType::TimeStamp, SqlValue::DateTime(v)) => {
            Some(Value::from(*v))
        }
        (FieldType::DateTime | FieldType::TimeStamp, SqlValue::Date(v)) => {
            Some(Value::from(v.and_time(NaiveTime::MIN)))
        }
        (FieldType::Int, SqlValue::Int(v)) => i32::try_from(*v).ok().map(Value::from),
        (FieldType::Int, SqlValue::UInt(v)) => i32::try_from(*v).ok().map(Value::from),
        (FieldType::UnsignedInt, SqlValue::UInt(v)) => u32::try_from(*v).ok().map(Value::from),
        (FieldType::UnsignedInt, SqlValue::Int(v)) => u32::try_from(*v).ok().map(Value::from),
        (FieldType::Key | FieldType::Size, SqlValue::UInt(v)) => Some(Value::from(*v)),
        (FieldType::Key | FieldType::Size, SqlValue::Int(v)) => {
            u64::try_from(*v).ok().map(Value::from)
        }
        (FieldType::Double, SqlValue::Double(v)) => Some(Value::from(*v)),
        (ty, SqlValue::Text(v)) if ty.is_text() => Some(Value::from(v.clone())),
        _ => None,
    };

    match value {
        Some(value) => {
            field.set_quietly(value);
            Ok(())
        }
        None => Err(mismatch(field, cell)),
    }
}

fn mismatch(field: &Field, cell: &SqlValue) -> String {
    format!(
        "cannot convert {} cell into {} column {}",
        cell.kind(),
        field.ty().name(),
        field.column()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn coerce_boolean_from_integer() {
        let mut field = Field::new(FieldType::Boolean, "Flag", false);
        coerce(&mut field, &SqlValue::Int(1)).unwrap();
        assert!(field.as_bool());
        assert!(!field.was_modified());

        coerce(&mut field, &SqlValue::Int(0)).unwrap();
        assert!(!field.as_bool());
    }

    #[test]
    fn coerce_datetime_from_date_uses_midnight() {
        let mut field = Field::new(FieldType::TimeStamp, "CreatedAt", false);
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        coerce(&mut field, &SqlValue::Date(date)).unwrap();

        assert_eq!(field.as_datetime(), date.and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn coerce_rejects_out_of_range_integers() {
        let mut field = Field::new(FieldType::Int, "Count", false);
        let too_big = i64::from(i32::MAX) + 1;
        let err = coerce(&mut field, &SqlValue::Int(too_big)).unwrap_err();
        assert!(err.contains("cannot convert int cell into Int column Count"));
        assert!(!field.has_value());

        let mut field = Field::new(FieldType::UnsignedInt, "Hours", false);
        assert!(coerce(&mut field, &SqlValue::Int(-1)).is_err());
        assert!(!field.has_value());

        let mut field = Field::new(FieldType::Key, "TaskID", false);
        assert!(coerce(&mut field, &SqlValue::Int(-1)).is_err());
        assert!(!field.has_value());
    }

    #[test]
    fn coerce_rejects_wrong_wire_kind() {
        let mut field = Field::new(FieldType::Double, "Percent", false);
        let err = coerce(&mut field, &SqlValue::Text("NaN".into())).unwrap_err();

        assert!(err.contains("cannot convert text cell into Double column Percent"));
        assert!(!field.has_value());
    }
}
