//! Routing module
//!
//! Maps `(method, path)` onto one of the service endpoints.

mod matcher;

pub use matcher::{match_route, Route};
