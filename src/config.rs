//! Server configuration for the models API

use crate::access::{AccessGate, SharedSecretVerifier};
use crate::version::{ApiVersion, ClientAcceptance};
use serde::Deserialize;
use std::sync::Arc;

/// Options controlling whether and how this server answers models API calls.
///
/// `api_server` defaults to off: a host that never opted in refuses every
/// call before reading anything else.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerOptions {
    /// Whether this server is willing to act as a models API endpoint.
    pub api_server: bool,
    /// Which client versions this server accepts.
    pub accepted_clients: ClientAcceptance,
    /// User id for the bundled shared-secret verifier.
    pub api_user: String,
    /// Shared secret for the bundled verifier. Empty means "no credential
    /// ever matches".
    pub api_secret: String,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            api_server: false,
            accepted_clients: ClientAcceptance::default(),
            api_user: String::new(),
            api_secret: String::new(),
        }
    }
}

impl ServerOptions {
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Access gate wired to the bundled shared-secret verifier.
    pub fn gate(&self) -> AccessGate {
        AccessGate::new(
            self.api_server,
            Arc::new(SharedSecretVerifier::new(
                self.api_user.clone(),
                self.api_secret.clone(),
            )),
        )
    }

    /// The running server's API version under the configured acceptance rule.
    pub fn api_version(&self) -> ApiVersion {
        ApiVersion::current(self.accepted_clients.clone())
    }
}
