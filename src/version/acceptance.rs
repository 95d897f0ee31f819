//! Client acceptance rules - which client versions the server will talk to

use semver::Version;
use serde::{Deserialize, Serialize};

/// Rule deciding whether a client's declared version is acceptable to the server.
///
/// The rule is injected (configuration-driven) rather than hard-coded so the
/// acceptable window can be widened without touching the compatibility logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAcceptance {
    /// Client major version must equal the server major version.
    SameMajor,
    /// Client version must fall within an inclusive range.
    Range { min: Version, max: Version },
}

impl ClientAcceptance {
    /// Returns true when `client` is acceptable to a server running `server`.
    pub fn accepts(&self, server: &Version, client: &Version) -> bool {
        match self {
            ClientAcceptance::SameMajor => client.major == server.major,
            ClientAcceptance::Range { min, max } => min <= client && client <= max,
        }
    }
}

impl Default for ClientAcceptance {
    fn default() -> Self {
        ClientAcceptance::SameMajor
    }
}
