//! Conversion entry points for untyped external data.
//!
//! Values arriving as JSON may be anything, so the string check happens at
//! runtime here and a non-string is reported with its actual type.

use crate::case::CaseStyle;
use crate::error::CaseError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Runtime type of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

pub fn value_kind(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Convert a JSON value, rejecting anything that is not a string.
pub fn convert_value(value: &Value, style: CaseStyle) -> Result<String, CaseError> {
    match value {
        Value::String(text) => Ok(style.apply(text)),
        other => Err(CaseError::InvalidInput {
            received: value_kind(other),
        }),
    }
}

/// Parse one line as JSON and convert the resulting value.
pub fn convert_json_line(line: &str, style: CaseStyle) -> Result<String, CaseError> {
    let value: Value = serde_json::from_str(line)?;
    convert_value(&value, style)
}
