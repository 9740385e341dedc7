//! Application layer

pub mod handler;
pub mod queries;

pub use handler::ServiceHandler;
pub use queries::*;
