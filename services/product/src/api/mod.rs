//! API layer - gRPC service implementations

mod conversions;
mod service;

pub use conversions::*;
pub use service::ProductServiceImpl;
