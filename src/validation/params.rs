//! Input parsing for the integer-taking endpoints
//!
//! Parsing is split from range checking so each endpoint can report the
//! first failing check in its own order.

use num_bigint::{BigInt, Sign};
use url::form_urlencoded;

use super::ValidationError;

/// First non-empty value of `name` in a urlencoded query string.
///
/// Pairs with an empty value (`n=` or a bare `n`) are ignored.
pub fn first_query_value(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}

/// Parse a signed decimal integer.
///
/// Accepts surrounding ASCII whitespace, one optional `+`/`-` sign and ASCII
/// digits, with single underscores allowed between digits.
pub fn parse_integer(input: &str) -> Option<BigInt> {
    let trimmed = input.trim_ascii();
    let (negative, digits) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__")
    {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
        return None;
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    let magnitude = BigInt::parse_bytes(cleaned.as_bytes(), 10)?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the digits captured from a `/fibonacci/<n>` path: an optional
/// leading `-` followed by one or more ASCII digits, nothing else.
pub fn parse_path_integer(segment: &str) -> Option<BigInt> {
    let digits = segment.strip_prefix('-').unwrap_or(segment);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(segment.as_bytes(), 10)
}

/// Range check shared by factorial and fibonacci
pub fn non_negative_index(value: &BigInt) -> Result<u64, ValidationError> {
    if value.sign() == Sign::Minus {
        return Err(ValidationError::Negative);
    }
    u64::try_from(value).map_err(|_| ValidationError::TooLarge)
}
