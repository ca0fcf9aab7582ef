//! HTTP protocol layer module
//!
//! Response writing and JSON payload shapes, decoupled from endpoint logic.

pub mod payload;
pub mod response;

// Re-export commonly used types
pub use payload::Computed;
pub use response::{
    build_404_response, build_413_response, build_500_response, build_detail_response,
    build_result_response,
};
