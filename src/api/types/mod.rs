//! Shared API types - envelope, errors, and extractors

pub mod envelope;
pub mod error;
pub mod json;

pub use envelope::{ApiResponse, ResponseStatus};
pub use error::ApiError;
pub use json::Json;
