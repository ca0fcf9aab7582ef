//! JSON payload shapes
//!
//! Success bodies are `{"result": ...}`, error bodies are `{"detail": "..."}`.

use num_bigint::BigUint;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// Value produced by a successful computation
#[derive(Debug, Clone, PartialEq)]
pub enum Computed {
    /// Unbounded integer, written as a bare JSON number
    Integer(BigUint),
    /// Floating point; non-finite values serialize as `null`
    Float(f64),
}

impl Serialize for Computed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(n) => {
                let raw = RawValue::from_string(n.to_string()).map_err(S::Error::custom)?;
                raw.serialize(serializer)
            }
            Self::Float(v) => serializer.serialize_f64(*v),
        }
    }
}

impl From<BigUint> for Computed {
    fn from(value: BigUint) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Computed {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[derive(Debug, Serialize)]
pub struct ResultPayload<'a> {
    pub result: &'a Computed,
}

#[derive(Debug, Serialize)]
pub struct DetailPayload {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: Computed) -> String {
        serde_json::to_string(&ResultPayload { result: &value }).unwrap()
    }

    #[test]
    fn test_integer_payload() {
        assert_eq!(render(Computed::Integer(BigUint::from(55u32))), r#"{"result":55}"#);
    }

    #[test]
    fn test_integer_payload_is_unbounded() {
        let big: BigUint = "100000000000000000000000000000000000000001".parse().unwrap();
        assert_eq!(
            render(Computed::Integer(big)),
            r#"{"result":100000000000000000000000000000000000000001}"#
        );
    }

    #[test]
    fn test_float_payload_keeps_decimal_point() {
        assert_eq!(render(Computed::Float(2.0)), r#"{"result":2.0}"#);
        assert_eq!(render(Computed::Float(1.5)), r#"{"result":1.5}"#);
        assert_eq!(render(Computed::Float(-0.25)), r#"{"result":-0.25}"#);
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(render(Computed::from(f64::INFINITY)), r#"{"result":null}"#);
        assert_eq!(render(Computed::from(f64::NAN)), r#"{"result":null}"#);
    }

    #[test]
    fn test_detail_payload() {
        let payload = DetailPayload {
            detail: "Invalid JSON".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"detail":"Invalid JSON"}"#
        );
    }
}
