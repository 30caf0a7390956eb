//! Literal values carried by strategy documents

use serde::{Deserialize, Serialize};
use std::fmt;

/// A JSON-compatible value used by `just` and `sampled_from` in documents
///
/// Renders as compact JSON in both `Debug` and `Display`, so strategy reprs
/// read `just(1)` and `just("a")`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Literal(pub serde_json::Value);

impl Literal {
    /// Borrow the underlying JSON value
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<serde_json::Value> for Literal {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_renders_json() {
        assert_eq!(format!("{:?}", Literal::from(1i64)), "1");
        assert_eq!(format!("{:?}", Literal::from("a")), "\"a\"");
        assert_eq!(format!("{:?}", Literal::from(true)), "true");
        assert_eq!(
            format!("{:?}", Literal::from(serde_json::json!([1, null]))),
            "[1,null]"
        );
    }

    #[test]
    fn test_transparent_serde() {
        let literal: Literal = serde_json::from_str("{\"x\": 2}").unwrap();
        assert_eq!(literal.as_json()["x"], 2);
        assert_eq!(serde_json::to_string(&Literal::from(3i64)).unwrap(), "3");
    }
}
