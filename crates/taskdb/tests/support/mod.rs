use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use taskdb::{async_trait, Driver, ExecResponse, Record, Result, SqlValue, Value};

/// A scripted driver: replays queued responses and records every statement
/// it is asked to execute.
#[derive(Debug, Clone, Default)]
pub struct StubDriver {
    responses: Arc<Mutex<VecDeque<Result<ExecResponse>>>>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl StubDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self, response: ExecResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn queue_error(&self, message: &str) {
        let err = anyhow::anyhow!("{message}").into();
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Driver for StubDriver {
    async fn execute(&self, sql: &str) -> Result<ExecResponse> {
        self.executed.lock().unwrap().push(sql.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ExecResponse::default()))
    }
}

/// Renders a stored value as the wire scalar a server would return for it.
pub fn wire(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(v) => SqlValue::Int(i64::from(*v)),
        Value::I32(v) => SqlValue::Int(i64::from(*v)),
        Value::U32(v) => SqlValue::UInt(u64::from(*v)),
        Value::U64(v) => SqlValue::UInt(*v),
        Value::F64(v) => SqlValue::Double(*v),
        Value::String(v) => SqlValue::Text(v.clone()),
        Value::Date(v) => SqlValue::Date(*v),
        Value::DateTime(v) => SqlValue::DateTime(*v),
    }
}

/// Builds a one-row result set echoing every populated field of the record.
pub fn row_for(record: &Record) -> ExecResponse {
    let mut columns = Vec::new();
    let mut cells = Vec::new();

    for field in record.fields_with_values() {
        columns.push(field.column().to_string());
        cells.push(wire(field.value()));
    }

    ExecResponse::rows(columns, vec![cells])
}
