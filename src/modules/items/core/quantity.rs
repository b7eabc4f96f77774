use serde::{Deserialize, Serialize};
use serde_json::Number;

/// How many units of an item are wanted.
///
/// Clients send either a JSON number or a JSON string; the value is kept as
/// supplied and echoed back unchanged. Only its truthiness is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(Number),
    Text(String),
}

impl Quantity {
    /// A number is truthy unless it is zero, a string unless it is empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Quantity::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Quantity::Text(s) => !s.is_empty(),
        }
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::Number(Number::from(value))
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_string())
    }
}
