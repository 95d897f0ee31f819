//! Modelsmith - version-gated API core for remote model generation
//!
//! A client tool asks a running server to generate strongly-typed source
//! model files for its content schema. Before any generation happens the
//! server decides whether the request may proceed at all:
//!
//! 1. [`access::AccessGate`] - is this server an API endpoint, and does the
//!    caller present a valid per-request credential?
//! 2. request validation - is the payload structurally sound?
//! 3. [`version::ApiVersion`] - are client and server versions mutually
//!    compatible (two-sided rule, not equality)?
//!
//! Only then does [`generation::GenerationOrchestrator`] invoke the injected
//! generation pipeline. [`api::ModelsApi`] composes the whole thing behind a
//! transport-agnostic surface; HTTP routing and credential stores stay
//! outside this crate.
//!
//! ```
//! use modelsmith::access::{AccessGate, SharedSecretVerifier};
//! use modelsmith::api::ModelsApi;
//! use modelsmith::generation::{
//!     GeneratedModels, GenerationError, ModelGenerator, SourceFile,
//! };
//! use modelsmith::version::{ApiVersion, ClientAcceptance};
//! use std::sync::Arc;
//!
//! struct EchoGenerator;
//!
//! #[async_trait::async_trait]
//! impl ModelGenerator for EchoGenerator {
//!     async fn generate(
//!         &self,
//!         namespace: &str,
//!         files: &[SourceFile],
//!     ) -> Result<GeneratedModels, GenerationError> {
//!         Ok(GeneratedModels {
//!             namespace: namespace.to_string(),
//!             files: files.to_vec(),
//!         })
//!     }
//! }
//!
//! let api = ModelsApi::new(
//!     AccessGate::new(true, Arc::new(SharedSecretVerifier::new("api", "s3cret"))),
//!     ApiVersion::current(ClientAcceptance::SameMajor),
//!     Arc::new(EchoGenerator),
//! );
//! ```

#![deny(unsafe_code)]

pub mod access;
pub mod api;
pub mod config;
pub mod generation;
pub mod version;

pub use access::{AccessGate, Credential, CredentialVerifier};
pub use api::{ApiError, ModelsApi, StatusClass};
pub use config::ServerOptions;
pub use generation::{GeneratedModels, ModelGenerator, SourceFile};
pub use version::{ApiVersion, ClientAcceptance, CompatibilityOutcome};
