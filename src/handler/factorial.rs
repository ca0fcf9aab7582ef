//! `GET /factorial?n=<int>`

use crate::validation::{first_query_value, non_negative_index, parse_integer, ValidationError};

/// Extract `n` from the query string.
///
/// Checks run in order: presence, integer syntax, sign.
pub fn parse_index(query: Option<&str>) -> Result<u64, ValidationError> {
    let raw = first_query_value(query, "n").ok_or(ValidationError::MissingParameter)?;
    let n = parse_integer(&raw).ok_or(ValidationError::NotAnInteger)?;
    non_negative_index(&n)
}
