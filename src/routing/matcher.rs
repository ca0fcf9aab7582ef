//! Route matching module
//!
//! Classifies a request by method and decoded path. Rules are checked in a
//! fixed order and the first match wins.

use hyper::Method;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

const FACTORIAL_PATH: &str = "/factorial";
const MEAN_PATH: &str = "/mean";
const FIBONACCI_PREFIX: &str = "/fibonacci";

/// Where a request is dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    Factorial,
    Mean,
    /// Everything after `/fibonacci`, including the leading `/` if present
    Fibonacci { suffix: Cow<'a, str> },
    NotFound,
}

impl Route<'_> {
    /// Short label used in logs
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Factorial => "factorial",
            Self::Mean => "mean",
            Self::Fibonacci { .. } => "fibonacci",
            Self::NotFound => "not_found",
        }
    }
}

/// Find the route for a method and raw (still percent-encoded) path
pub fn match_route<'a>(method: &Method, raw_path: &'a str) -> Route<'a> {
    if method != Method::GET {
        return Route::NotFound;
    }

    let path = percent_decode_str(raw_path).decode_utf8_lossy();

    if path == FACTORIAL_PATH {
        return Route::Factorial;
    }
    if path == MEAN_PATH {
        return Route::Mean;
    }
    if path.starts_with(FIBONACCI_PREFIX) {
        let suffix = match path {
            Cow::Borrowed(p) => Cow::Borrowed(&p[FIBONACCI_PREFIX.len()..]),
            Cow::Owned(p) => Cow::Owned(p[FIBONACCI_PREFIX.len()..].to_string()),
        };
        return Route::Fibonacci { suffix };
    }

    Route::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fib(suffix: &str) -> Route<'_> {
        Route::Fibonacci {
            suffix: Cow::Borrowed(suffix),
        }
    }

    #[test]
    fn test_match_exact_paths() {
        assert_eq!(match_route(&Method::GET, "/factorial"), Route::Factorial);
        assert_eq!(match_route(&Method::GET, "/mean"), Route::Mean);
        assert_eq!(match_route(&Method::GET, "/factorial/"), Route::NotFound);
        assert_eq!(match_route(&Method::GET, "/mean/extra"), Route::NotFound);
        assert_eq!(match_route(&Method::GET, "/Mean"), Route::NotFound);
    }

    #[test]
    fn test_match_fibonacci_prefix() {
        assert_eq!(match_route(&Method::GET, "/fibonacci/10"), fib("/10"));
        assert_eq!(match_route(&Method::GET, "/fibonacci/-3"), fib("/-3"));
        assert_eq!(match_route(&Method::GET, "/fibonacci"), fib(""));
        assert_eq!(match_route(&Method::GET, "/fibonaccix"), fib("x"));
        assert_eq!(match_route(&Method::GET, "/fibonacci/1/2"), fib("/1/2"));
    }

    #[test]
    fn test_match_decodes_path() {
        assert_eq!(match_route(&Method::GET, "/%66actorial"), Route::Factorial);
        assert_eq!(match_route(&Method::GET, "/fibonacci/%31%30"), fib("/10"));
    }

    #[test]
    fn test_non_get_is_not_found() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::HEAD, Method::OPTIONS] {
            assert_eq!(match_route(&method, "/factorial"), Route::NotFound);
            assert_eq!(match_route(&method, "/mean"), Route::NotFound);
            assert_eq!(match_route(&method, "/fibonacci/1"), Route::NotFound);
        }
    }

    #[test]
    fn test_unknown_paths() {
        for path in ["/", "/unknown", "/fib/10", "/factorials"] {
            assert_eq!(match_route(&Method::GET, path), Route::NotFound, "{path}");
        }
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Factorial.name(), "factorial");
        assert_eq!(fib("/1").name(), "fibonacci");
        assert_eq!(Route::NotFound.name(), "not_found");
    }
}
