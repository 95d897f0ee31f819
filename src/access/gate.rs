//! The access gate - first-line decision on whether a request is considered

use crate::access::Credential;
use std::sync::Arc;

/// Verifies a per-request credential against whatever store the host uses.
///
/// Injected so the gate owns *when* verification happens (always, for every
/// operation) without knowing *how* credentials are checked.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credential: &Credential) -> bool;
}

/// Verifier backed by a single configured shared secret.
pub struct SharedSecretVerifier {
    expected: Credential,
}

impl SharedSecretVerifier {
    pub fn new(user: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            expected: Credential::new(user, secret),
        }
    }
}

impl CredentialVerifier for SharedSecretVerifier {
    fn verify(&self, credential: &Credential) -> bool {
        // A server with no secret configured matches nothing.
        if self.expected.secret().is_empty() {
            return false;
        }
        credential.user() == self.expected.user()
            && credential.secret() == self.expected.secret()
    }
}

/// Terminal per-request decision. No retries at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmitDecision {
    Admitted,
    Refused,
}

/// Decides whether the server is willing to respond to an API call at all.
///
/// The API-enabled flag is evaluated before the credential is even looked at:
/// a server that opted out does no verification work for anybody.
pub struct AccessGate {
    api_enabled: bool,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AccessGate {
    pub fn new(api_enabled: bool, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            api_enabled,
            verifier,
        }
    }

    pub fn admit(&self, credential: Option<&Credential>) -> AdmitDecision {
        if !self.api_enabled {
            tracing::debug!("refusing request: server is not an API server");
            return AdmitDecision::Refused;
        }

        match credential {
            Some(credential) if self.verifier.verify(credential) => AdmitDecision::Admitted,
            _ => {
                tracing::debug!("refusing request: credential missing or invalid");
                AdmitDecision::Refused
            }
        }
    }
}
