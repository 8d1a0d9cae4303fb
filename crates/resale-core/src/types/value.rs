//! Caller-supplied scalar values
//!
//! Form fields arrive either as JSON numbers or as strings (select boxes send
//! strings such as `"2020"`), so numeric fields accept both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A number or a string, as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    /// JSON number
    Number(f64),
    /// String, possibly numeric
    Text(String),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Number(n) => write!(f, "{}", n),
            InputValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

impl From<i32> for InputValue {
    fn from(n: i32) -> Self {
        InputValue::Number(n as f64)
    }
}

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        InputValue::Text(s.to_string())
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        InputValue::Text(s)
    }
}
