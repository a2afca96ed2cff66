mod db;
pub use db::Db;

pub mod model;
pub use model::{Task, TaskStatus, User};

pub use taskdb_core::{
    async_trait, ColumnDef, Dictionary, DictionaryCode, Driver, Error, ExecResponse, Field,
    FieldType, ModelSchema, Record, Result, SqlValue, Value,
};

pub use taskdb_sql as sql;

#[cfg(feature = "mysql")]
pub use taskdb_driver_mysql::MySql;
