pub mod dictionary;
pub use dictionary::{Dictionary, DictionaryCode};

pub mod driver;
pub use driver::{Driver, ExecResponse, SqlValue};

mod error;
pub use error::Error;

mod field;
pub use field::Field;

mod record;
pub use record::Record;

mod schema;
pub use schema::{ColumnDef, ModelSchema};

mod ty;
pub use ty::FieldType;

mod value;
pub use value::Value;

/// A Result type alias that uses taskdb's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
