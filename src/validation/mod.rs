//! Request input validation
//!
//! A validation outcome is a `Result<T, ValidationError>`; the error side
//! carries both the client-facing message and the status code.

mod error;
mod params;

pub use error::ValidationError;
pub use params::{first_query_value, non_negative_index, parse_integer, parse_path_integer};
