//! `GET /mean` with a JSON array body

use serde_json::{Number, Value};

use crate::compute::{self, Term};
use crate::http::Computed;
use crate::validation::ValidationError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Validate a fully-read body and average its elements.
///
/// Checks run in order: non-empty body, JSON syntax, array shape, non-empty
/// array, numeric elements. A leading UTF-8 byte order mark is skipped.
pub fn handle(body: &[u8]) -> Result<Computed, ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }

    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    let parsed: Value = serde_json::from_slice(body).map_err(|_| ValidationError::InvalidJson)?;
    let Value::Array(items) = parsed else {
        return Err(ValidationError::NotAnArray);
    };
    if items.is_empty() {
        return Err(ValidationError::EmptyArray);
    }

    // Only JSON numbers count; booleans, strings and null do not
    let values = items
        .iter()
        .map(|item| match item {
            Value::Number(n) => to_term(n),
            _ => None,
        })
        .collect::<Option<Vec<Term>>>()
        .ok_or(ValidationError::NonNumericElement)?;

    compute::mean(&values)
        .map(Computed::from)
        .ok_or(ValidationError::EmptyArray)
}

/// Integer literals stay exact; anything with a fraction or exponent is a float
fn to_term(n: &Number) -> Option<Term> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
        .map(Term::Integer)
        .or_else(|| n.as_f64().map(Term::Float))
}
