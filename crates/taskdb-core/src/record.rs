use crate::{Error, Field, FieldType, Result, Value};

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use std::fmt;

/// A schema-bound collection of [`Field`]s representing one storable entity.
///
/// A record always owns exactly one `Key`-typed field matching the primary
/// key column, created at construction. A record is "in storage" exactly
/// when that field has a value; the primary key is assigned once, by the
/// mapper, after a successful insert.
#[derive(Debug, Clone)]
pub struct Record {
    model_name: String,
    table_name: String,
    primary_key: String,
    fields: IndexMap<String, Field>,
}

impl Record {
    pub fn new(
        model_name: impl Into<String>,
        table_name: impl Into<String>,
        primary_key: impl Into<String>,
    ) -> Self {
        let primary_key = primary_key.into();
        let mut fields = IndexMap::new();
        fields.insert(
            primary_key.clone(),
            Field::new(FieldType::Key, primary_key.clone(), true),
        );

        Self {
            model_name: model_name.into(),
            table_name: table_name.into(),
            primary_key,
            fields,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn primary_key_column(&self) -> &str {
        &self.primary_key
    }

    /// Declares a column. Schema-declaration time only: called by model
    /// constructors before the record is used.
    pub fn add_field(&mut self, name: impl Into<String>, ty: FieldType, required: bool) {
        let name = name.into();
        self.fields
            .insert(name.clone(), Field::new(ty, name, required));
    }

    /// Looks up a field by column name.
    ///
    /// An unknown name is a schema or caller bug, so this fails loudly
    /// instead of defaulting.
    pub fn field(&self, name: &str) -> Result<&Field> {
        self.fields
            .get(name)
            .ok_or_else(|| Error::field_not_found(&self.model_name, name))
    }

    pub fn field_mut(&mut self, name: &str) -> Result<&mut Field> {
        let model_name = &self.model_name;
        self.fields
            .get_mut(name)
            .ok_or_else(|| Error::field_not_found(model_name, name))
    }

    /// Sets a field value, marking it dirty. Returns false when the column
    /// name is unknown.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> bool {
        match self.fields.get_mut(name) {
            Some(field) => {
                field.set(value);
                true
            }
            None => false,
        }
    }

    /// Sets a field value without marking it dirty. Used for hydration and
    /// schema defaults.
    pub fn set_value_quietly(&mut self, name: &str, value: impl Into<Value>) -> bool {
        match self.fields.get_mut(name) {
            Some(field) => {
                field.set_quietly(value);
                true
            }
            None => false,
        }
    }

    pub fn value(&self, name: &str) -> Result<&Value> {
        Ok(self.field(name)?.value())
    }

    pub fn field_has_value(&self, name: &str) -> Result<bool> {
        Ok(self.field(name)?.has_value())
    }

    pub fn field_was_modified(&self, name: &str) -> Result<bool> {
        Ok(self.field(name)?.was_modified())
    }

    pub fn get_i32(&self, name: &str) -> Result<i32> {
        Ok(self.field(name)?.as_i32())
    }

    pub fn get_u32(&self, name: &str) -> Result<u32> {
        Ok(self.field(name)?.as_u32())
    }

    pub fn get_u64(&self, name: &str) -> Result<u64> {
        Ok(self.field(name)?.as_u64())
    }

    pub fn get_key(&self, name: &str) -> Result<u64> {
        self.get_u64(name)
    }

    pub fn get_f64(&self, name: &str) -> Result<f64> {
        Ok(self.field(name)?.as_f64())
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        Ok(self.field(name)?.as_bool())
    }

    pub fn get_string(&self, name: &str) -> Result<String> {
        Ok(self.field(name)?.as_str().to_string())
    }

    pub fn get_date(&self, name: &str) -> Result<NaiveDate> {
        Ok(self.field(name)?.as_date())
    }

    pub fn get_datetime(&self, name: &str) -> Result<NaiveDateTime> {
        Ok(self.field(name)?.as_datetime())
    }

    /// Assigns the storage-generated primary key. Does not mark the record
    /// dirty; the value came from storage.
    pub fn set_primary_key(&mut self, key: u64) {
        let name = self.primary_key.clone();
        self.set_value_quietly(&name, key);
    }

    pub fn primary_key(&self) -> u64 {
        self.fields
            .get(&self.primary_key)
            .map(Field::as_key)
            .unwrap_or(0)
    }

    pub fn is_in_storage(&self) -> bool {
        self.fields
            .get(&self.primary_key)
            .is_some_and(Field::has_value)
    }

    /// Whether every required field other than the primary key has a value.
    ///
    /// The primary key is skipped: a record that has not been inserted yet
    /// legitimately has no key, and whether to insert or update is the
    /// mapper's decision.
    pub fn all_required_fields_present(&self) -> bool {
        self.fields
            .values()
            .filter(|field| field.is_required() && field.column() != self.primary_key)
            .all(Field::has_value)
    }

    /// Human-readable report of every required non-key field without a value.
    pub fn missing_required_fields(&self) -> String {
        let mut report = String::new();

        for field in self.fields.values() {
            if field.is_required() && field.column() != self.primary_key && !field.has_value() {
                report.push_str(&format!(
                    "The required field {} has not been set!\n",
                    field.column()
                ));
            }
        }

        report
    }

    /// Every field holding a value, in declaration order. Used to build an
    /// insert statement.
    pub fn fields_with_values(&self) -> Vec<&Field> {
        self.fields.values().filter(|f| f.has_value()).collect()
    }

    /// Clears every field's modified flag. Called once, immediately after a
    /// successful insert.
    pub fn accept_storage_write(&mut self) {
        for field in self.fields.values_mut() {
            field.clear_modified();
        }
    }

    pub fn any_field_modified(&self) -> bool {
        self.fields.values().any(Field::was_modified)
    }

    /// Compares every field pairwise by (type, name, value), reporting each
    /// mismatched column. Returns true when the records are the same.
    /// Equality between records is defined by this diff.
    pub fn diff(&self, other: &Record) -> bool {
        let mut same = true;

        for (name, field) in &self.fields {
            match other.fields.get(name) {
                Some(other_field) if field == other_field => {}
                Some(other_field) => {
                    same = false;
                    tracing::warn!(
                        column = %name,
                        left = %field,
                        right = %other_field,
                        "fields differ"
                    );
                }
                None => {
                    same = false;
                    tracing::warn!(column = %name, "column missing from other record");
                }
            }
        }

        for name in other.fields.keys() {
            if !self.fields.contains_key(name) {
                same = false;
                tracing::warn!(column = %name, "extra column in other record");
            }
        }

        same
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.model_name == other.model_name
            && self.primary_key == other.primary_key
            && self.diff(other)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "model: {}", self.model_name)?;
        writeln!(f, "primary key column: {}", self.primary_key)?;
        for field in self.fields.values() {
            writeln!(f, "{field}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        let mut record = Record::new("UserModel", "UserProfile", "UserID");
        record.add_field("LastName", FieldType::ShortText, true);
        record.add_field("FirstName", FieldType::ShortText, true);
        record.add_field("MiddleInitial", FieldType::ShortText, false);
        record
    }

    #[test]
    fn in_storage_follows_primary_key() {
        let mut record = sample_record();
        assert!(!record.is_in_storage());
        assert_eq!(record.primary_key(), 0);

        record.set_primary_key(17);
        assert!(record.is_in_storage());
        assert_eq!(record.primary_key(), 17);
        // Keys assigned by storage are not dirty.
        assert!(!record.field_was_modified("UserID").unwrap());
    }

    #[test]
    fn unknown_field_fails_loudly() {
        let mut record = sample_record();
        let err = record.field("LastNmae").unwrap_err();

        assert!(err.is_field_not_found());
        assert!(!record.set_value_quietly("LastNmae", "x"), "{record}");
    }

    #[test]
    fn set_value_returns_false_for_unknown_column() {
        let mut record = sample_record();
        assert!(record.set_value("LastName", "Doe"));
        assert!(!record.set_value("Nope", "Doe"));
    }

    #[test]
    fn required_field_validation_skips_primary_key() {
        let mut record = sample_record();
        assert!(!record.all_required_fields_present());

        let report = record.missing_required_fields();
        assert!(report.contains("LastName"));
        assert!(report.contains("FirstName"));
        assert!(!report.contains("UserID"));
        assert!(!report.contains("MiddleInitial"));

        record.set_value("LastName", "Doe");
        record.set_value("FirstName", "Jane");
        assert!(record.all_required_fields_present());
    }

    #[test]
    fn fields_with_values_keeps_declaration_order() {
        let mut record = sample_record();
        record.set_value("MiddleInitial", "C");
        record.set_value("LastName", "Doe");

        let columns: Vec<&str> = record
            .fields_with_values()
            .iter()
            .map(|f| f.column())
            .collect();
        assert_eq!(columns, ["LastName", "MiddleInitial"]);
    }

    #[test]
    fn accept_storage_write_clears_all_flags() {
        let mut record = sample_record();
        record.set_value("LastName", "Doe");
        record.set_value("FirstName", "Jane");
        assert!(record.any_field_modified());

        record.accept_storage_write();
        assert!(!record.any_field_modified());

        record.set_value("LastName", "Smith");
        assert!(record.field_was_modified("LastName").unwrap());
    }

    #[test]
    fn diff_reports_value_differences() {
        let mut a = sample_record();
        let mut b = sample_record();
        a.set_value("LastName", "Doe");
        b.set_value("LastName", "Doe");

        assert!(a.diff(&b));
        assert_eq!(a, b);

        b.set_value("LastName", "Smith");
        assert!(!a.diff(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn typed_getters_default_without_failing() {
        let record = sample_record();
        assert_eq!(record.get_string("MiddleInitial").unwrap(), "");
        assert_eq!(record.get_f64("LastName").unwrap(), 0.0);
        assert!(record.get_i32("Missing").is_err());
    }
}
