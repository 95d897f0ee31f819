//! Generation domain module - the orchestration boundary around the external
//! code-generation pipeline

pub mod errors;
pub mod orchestrator;
pub mod traits;
pub mod types;

pub use errors::*;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
