//! Caller-supplied input values
//!
//! Type definitions arrive from callers (often deserialized from JSON),
//! so a qty field can hold anything: a number, a numeric-looking string,
//! null. `Value` keeps that shape representable; the registry validator
//! decides what is acceptable.

use crate::Qty;
use serde::{Deserialize, Serialize};

/// Dynamic input value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(Qty),
    Text(String),
    Bool(bool),
    Null,
}

impl Value {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_number(&self) -> Option<&Qty> {
        match self {
            Value::Number(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Human-readable type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
            Value::Bool(_) => "Bool",
            Value::Null => "Null",
        }
    }
}

impl From<Qty> for Value {
    fn from(q: Qty) -> Self {
        Value::Number(q)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Qty::from_f64(f))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Qty::from_i64(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
