use crate::{FieldType, Value};

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// A single named, typed, optionally-empty scalar value with required and
/// modified tracking.
///
/// The typed accessors are deliberately lenient: when the field is empty, or
/// the stored variant does not match the declared column type, they return
/// the zero value of the requested type rather than failing. Read paths must
/// never abort; schema mistakes surface at hydration time instead.
#[derive(Debug, Clone)]
pub struct Field {
    ty: FieldType,
    column: String,
    value: Value,
    required: bool,
    modified: bool,
}

impl Field {
    pub fn new(ty: FieldType, column: impl Into<String>, required: bool) -> Self {
        Self {
            ty,
            column: column.into(),
            value: Value::Null,
            required,
            modified: false,
        }
    }

    pub fn ty(&self) -> FieldType {
        self.ty
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn has_value(&self) -> bool {
        !self.value.is_null()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn was_modified(&self) -> bool {
        self.modified
    }

    /// Sets the value and marks the field dirty.
    pub fn set(&mut self, value: impl Into<Value>) {
        self.value = value.into();
        self.modified = true;
    }

    /// Sets the value without touching the modified flag.
    ///
    /// Used when hydrating from a query row and for schema-declared
    /// defaults; values loaded from storage are not dirty.
    pub fn set_quietly(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    pub fn as_i32(&self) -> i32 {
        match &self.value {
            Value::I32(v) if self.ty == FieldType::Int => *v,
            _ => 0,
        }
    }

    pub fn as_u32(&self) -> u32 {
        match &self.value {
            Value::U32(v) if self.ty == FieldType::UnsignedInt => *v,
            _ => 0,
        }
    }

    /// Key and size-kind columns share the unsigned 64-bit representation.
    pub fn as_u64(&self) -> u64 {
        match &self.value {
            Value::U64(v) if matches!(self.ty, FieldType::Key | FieldType::Size) => *v,
            _ => 0,
        }
    }

    pub fn as_key(&self) -> u64 {
        self.as_u64()
    }

    pub fn as_f64(&self) -> f64 {
        match &self.value {
            Value::F64(v) if self.ty == FieldType::Double => *v,
            _ => 0.0,
        }
    }

    pub fn as_bool(&self) -> bool {
        match &self.value {
            Value::Bool(v) if self.ty == FieldType::Boolean => *v,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match &self.value {
            Value::String(v) if self.ty.is_text() => v,
            _ => "",
        }
    }

    pub fn as_date(&self) -> NaiveDate {
        match &self.value {
            Value::Date(v) if self.ty == FieldType::Date => *v,
            _ => NaiveDate::default(),
        }
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        match &self.value {
            Value::DateTime(v)
                if matches!(self.ty, FieldType::DateTime | FieldType::TimeStamp) =>
            {
                *v
            }
            _ => NaiveDateTime::default(),
        }
    }
}

/// Equality is (type, name, value); the required and modified flags are
/// bookkeeping, not identity.
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.column == other.column && self.value == other.value
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column: {}\ttype: {}\trequired: {}\tmodified: {}\thas value: {}",
            self.column,
            self.ty.name(),
            self.required,
            self.modified,
            self.has_value(),
        )?;

        if self.has_value() {
            write!(f, "\t{}", self.value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_marks_modified_and_quiet_set_does_not() {
        let mut field = Field::new(FieldType::ShortText, "LastName", true);
        assert!(!field.has_value());
        assert!(!field.was_modified());

        field.set_quietly("Doe");
        assert!(field.has_value());
        assert!(!field.was_modified());

        field.set("Smith");
        assert!(field.was_modified());

        field.clear_modified();
        assert!(!field.was_modified());
        assert_eq!(field.as_str(), "Smith");
    }

    #[test]
    fn accessors_default_on_empty_field() {
        let field = Field::new(FieldType::Int, "Count", false);
        assert_eq!(field.as_i32(), 0);
        assert_eq!(field.as_u64(), 0);
        assert_eq!(field.as_f64(), 0.0);
        assert_eq!(field.as_str(), "");
        assert!(!field.as_bool());
    }

    #[test]
    fn accessors_default_on_type_mismatch() {
        let mut field = Field::new(FieldType::ShortText, "LastName", false);
        field.set("Doe");

        // A text-typed field never yields a numeric value.
        assert_eq!(field.as_f64(), 0.0);
        assert_eq!(field.as_i32(), 0);
        assert_eq!(field.as_str(), "Doe");
    }

    #[test]
    fn value_stored_under_wrong_variant_reads_as_default() {
        let mut field = Field::new(FieldType::Boolean, "Flag", false);
        field.set(7u32);

        assert!(!field.as_bool());
        assert_eq!(field.as_u32(), 0);
    }

    #[test]
    fn equality_ignores_flags() {
        let mut a = Field::new(FieldType::Key, "TaskID", true);
        let mut b = Field::new(FieldType::Key, "TaskID", false);
        a.set(3u64);
        b.set_quietly(3u64);

        assert_eq!(a, b);

        b.set_quietly(4u64);
        assert_ne!(a, b);
    }
}
