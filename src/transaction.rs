use crate::error::FieldError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const TYPE_FIELD: &str = "type";
pub const AMOUNT_FIELD: &str = "amount";
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// A single transaction entry, kept as a field mapping.
///
/// Records are never validated on construction: a record may lack `type` or
/// carry a non-text one, and only fails once a filter reads that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction {
    fields: Map<String, Value>,
}

impl Transaction {
    pub fn new(kind: &str, amount: f64, timestamp: &str) -> Self {
        Self::default()
            .with_field(TYPE_FIELD, kind)
            .with_field(AMOUNT_FIELD, amount)
            .with_field(TIMESTAMP_FIELD, timestamp)
    }

    pub fn new_deposit(amount: f64, timestamp: &str) -> Self {
        Self::new("deposit", amount, timestamp)
    }

    pub fn new_withdrawal(amount: f64, timestamp: &str) -> Self {
        Self::new("withdrawal", amount, timestamp)
    }

    pub fn new_transfer(amount: f64, timestamp: &str) -> Self {
        Self::new("transfer", amount, timestamp)
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn without_field(mut self, key: &str) -> Self {
        self.fields.shift_remove(key);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The transaction category, as stored.
    pub fn kind(&self) -> Result<&str, FieldError> {
        match self.fields.get(TYPE_FIELD) {
            None => Err(FieldError::Missing { field: TYPE_FIELD }),
            Some(Value::String(kind)) => Ok(kind),
            Some(other) => Err(FieldError::NotText {
                field: TYPE_FIELD,
                found: json_kind(other),
            }),
        }
    }

    pub fn amount(&self) -> Option<f64> {
        self.fields.get(AMOUNT_FIELD).and_then(Value::as_f64)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.fields.get(TIMESTAMP_FIELD).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for Transaction {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_fields(fields)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The demo account history: two deposits around a withdrawal and a transfer.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new_deposit(1000.0, "2023-01-01T10:00:00"),
        Transaction::new_withdrawal(200.0, "2023-01-02T14:30:00"),
        Transaction::new_transfer(300.0, "2023-01-03T09:15:00"),
        Transaction::new_deposit(500.0, "2023-01-04T16:45:00"),
    ]
}
