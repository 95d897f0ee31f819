//! Per-request credentials for the remote models API
//!
//! The API is called by an unattended remote tool, not a logged-in user, so
//! authentication is a basic-style shared secret per request rather than the
//! host's session/cookie mechanism.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A basic-style credential: a user identifier plus a shared secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    user: String,
    secret: String,
}

impl Credential {
    pub fn new(user: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            secret: secret.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Parses an HTTP `Authorization: Basic` header value.
    ///
    /// Returns `None` for anything that is not well-formed `Basic
    /// base64(user:secret)`; the caller treats that the same as a missing
    /// credential.
    pub fn from_basic_header(header: &str) -> Option<Self> {
        let encoded = header.strip_prefix("Basic ")?.trim();
        let decoded = BASE64.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (user, secret) = decoded.split_once(':')?;
        Some(Self::new(user, secret))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("user", &self.user)
            .field("secret", &"<redacted>")
            .finish()
    }
}
