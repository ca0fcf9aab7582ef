//! Request handler module
//!
//! Responsible for request routing dispatch and the endpoint logic:
//! factorial, fibonacci and mean.

mod body;
mod factorial;
mod fibonacci;
mod mean;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
