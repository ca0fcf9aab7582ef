//! `GET /fibonacci/<int>`

use crate::validation::{non_negative_index, parse_path_integer, ValidationError};

/// `suffix` is the path remainder after `/fibonacci`; only `/<int>` is valid.
pub fn parse_index(suffix: &str) -> Result<u64, ValidationError> {
    let n = suffix
        .strip_prefix('/')
        .and_then(parse_path_integer)
        .ok_or(ValidationError::InvalidPathParameter)?;
    non_negative_index(&n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute;

    fn ok(suffix: &str) -> String {
        compute::fibonacci(parse_index(suffix).unwrap()).to_string()
    }

    #[test]
    fn test_success() {
        assert_eq!(ok("/0"), "0");
        assert_eq!(ok("/1"), "1");
        assert_eq!(ok("/2"), "1");
        assert_eq!(ok("/10"), "55");
        assert_eq!(ok("/010"), "55");
        assert_eq!(ok("/-0"), "0");
        assert_eq!(ok("/93"), "12200160415121876738");
        assert_eq!(ok("/94"), "19740274219868223167");
    }

    #[test]
    fn test_invalid_format() {
        for suffix in ["", "/", "x", "/abc", "/1.5", "/+1", "/1/2", "/10/", "/ 1", "/-", "/1_0"] {
            assert_eq!(
                parse_index(suffix),
                Err(ValidationError::InvalidPathParameter),
                "{suffix:?}"
            );
        }
    }

    #[test]
    fn test_negative() {
        assert_eq!(parse_index("/-1"), Err(ValidationError::Negative));
        assert_eq!(parse_index("/-55"), Err(ValidationError::Negative));
    }

    #[test]
    fn test_too_large() {
        assert_eq!(
            parse_index("/99999999999999999999"),
            Err(ValidationError::TooLarge)
        );
    }
}
