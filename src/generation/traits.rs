//! Port interfaces for the generation domain

use crate::generation::{GeneratedModels, GenerationError, SourceFile};
use async_trait::async_trait;

/// The external generation pipeline: turns a namespace and the client's
/// existing source files into generated model source files.
///
/// Injected as a capability so the orchestration and gating logic can be
/// exercised with a deterministic stub.
#[async_trait]
pub trait ModelGenerator: Send + Sync {
    async fn generate(
        &self,
        namespace: &str,
        files: &[SourceFile],
    ) -> Result<GeneratedModels, GenerationError>;
}
