//! API layer - request DTOs, validation, error taxonomy, and the endpoint

pub mod dto;
pub mod endpoint;
pub mod errors;
pub mod rules;

pub use dto::*;
pub use endpoint::*;
pub use errors::*;
