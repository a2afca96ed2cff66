use crate::{FieldType, Record};

/// Declares one column of a model schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl ColumnDef {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: false,
        }
    }

    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: true,
        }
    }
}

/// A static schema descriptor for one model kind.
///
/// Concrete kinds are configuration values, not subclasses: a descriptor
/// lists the table, the primary-key column, and every other column once,
/// and [`Record`]s are stamped out from it.
#[derive(Debug, Clone, Copy)]
pub struct ModelSchema {
    pub model: &'static str,
    pub table: &'static str,
    pub primary_key: &'static str,
    pub columns: &'static [ColumnDef],
}

impl ModelSchema {
    /// Builds an empty record with this schema's fields declared.
    pub fn new_record(&self) -> Record {
        let mut record = Record::new(self.model, self.table, self.primary_key);
        for column in self.columns {
            record.add_field(column.name, column.ty, column.required);
        }
        record
    }
}
