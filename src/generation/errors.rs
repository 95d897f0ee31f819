//! Error types for the generation domain

use thiserror::Error;

/// Errors surfaced by the generation pipeline.
///
/// The pipeline is an external collaborator; its failures are passed through
/// with whatever detail it provides rather than re-diagnosed here.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation pipeline error: {0}")]
    Pipeline(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
