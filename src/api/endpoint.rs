//! The models API endpoint - composes gate, version check, and orchestration

use crate::access::{AccessGate, AdmitDecision, Credential};
use crate::api::{
    ApiError, GetModelsRequest, ServerVersionResponse, ValidateClientVersionRequest,
};
use crate::generation::{GeneratedModels, GenerationOrchestrator, ModelGenerator};
use crate::version::{ApiVersion, CompatibilityOutcome};
use semver::Version;
use std::sync::Arc;

/// Transport-agnostic models API.
///
/// Every operation follows the same skeleton: access gate first, then
/// structural validation of the payload, then version compatibility, then the
/// operation itself. Requests are handled independently; the only state held
/// across calls is read-only.
pub struct ModelsApi {
    gate: AccessGate,
    version: ApiVersion,
    orchestrator: GenerationOrchestrator,
}

impl ModelsApi {
    pub fn new(gate: AccessGate, version: ApiVersion, generator: Arc<dyn ModelGenerator>) -> Self {
        Self {
            gate,
            version,
            orchestrator: GenerationOrchestrator::new(generator),
        }
    }

    /// Build an API from server configuration, using the bundled
    /// shared-secret verifier and this crate's own version.
    pub fn from_options(
        options: &crate::config::ServerOptions,
        generator: Arc<dyn ModelGenerator>,
    ) -> Self {
        Self::new(options.gate(), options.api_version(), generator)
    }

    /// Report the running server's API version. Gated like everything else,
    /// even though it carries no request body.
    pub fn server_version(
        &self,
        credential: Option<&Credential>,
    ) -> Result<ServerVersionResponse, ApiError> {
        self.admit(credential)?;

        Ok(ServerVersionResponse {
            version: self.version.version().clone(),
        })
    }

    /// Check client compatibility only; the generator is never touched.
    pub fn validate_client_version(
        &self,
        credential: Option<&Credential>,
        request: Option<&ValidateClientVersionRequest>,
    ) -> Result<(), ApiError> {
        self.admit(credential)?;

        let request = request.ok_or(crate::api::ValidationError::MissingPayload)?;
        request.validate()?;

        self.check_version(
            request.client_version.as_ref(),
            request.min_server_version_supporting_client.as_ref(),
        )
    }

    /// Full pipeline: gate, validate, version check, generate.
    pub async fn get_models(
        &self,
        credential: Option<&Credential>,
        request: Option<&GetModelsRequest>,
    ) -> Result<GeneratedModels, ApiError> {
        self.admit(credential)?;

        let request = request.ok_or(crate::api::ValidationError::MissingPayload)?;
        request.validate()?;

        self.check_version(
            request.client_version.as_ref(),
            request.min_server_version_supporting_client.as_ref(),
        )?;

        let models = self
            .orchestrator
            .generate(&request.namespace, &request.files)
            .await?;

        Ok(models)
    }

    fn admit(&self, credential: Option<&Credential>) -> Result<(), ApiError> {
        match self.gate.admit(credential) {
            AdmitDecision::Admitted => Ok(()),
            AdmitDecision::Refused => Err(ApiError::AccessRefused),
        }
    }

    fn check_version(
        &self,
        client: Option<&Version>,
        min_server: Option<&Version>,
    ) -> Result<(), ApiError> {
        match self.version.check_compatibility(client, min_server) {
            CompatibilityOutcome::Compatible => Ok(()),
            CompatibilityOutcome::Incompatible { detail } => {
                tracing::debug!(%detail, "rejecting incompatible client");
                Err(ApiError::VersionIncompatible(detail))
            }
        }
    }
}
