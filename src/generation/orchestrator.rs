//! Generation orchestration - the boundary between the API and the pipeline

use crate::generation::{GeneratedModels, GenerationError, ModelGenerator, SourceFile};
use std::sync::Arc;

/// Invokes the external generation pipeline and packages its result.
///
/// Holds no state between calls; the result is a new value independent of the
/// request that produced it.
pub struct GenerationOrchestrator {
    generator: Arc<dyn ModelGenerator>,
}

impl GenerationOrchestrator {
    pub fn new(generator: Arc<dyn ModelGenerator>) -> Self {
        Self { generator }
    }

    /// Run the pipeline with the exact namespace and file list supplied.
    /// Any pipeline failure fails the request as a whole.
    pub async fn generate(
        &self,
        namespace: &str,
        files: &[SourceFile],
    ) -> Result<GeneratedModels, GenerationError> {
        tracing::debug!(
            namespace,
            file_count = files.len(),
            "invoking generation pipeline"
        );

        let models = self.generator.generate(namespace, files).await?;

        tracing::debug!(generated = models.files.len(), "generation pipeline done");
        Ok(models)
    }
}
