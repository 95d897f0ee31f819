//! Server API version and the two-sided compatibility check

use crate::version::ClientAcceptance;
use once_cell::sync::Lazy;
use semver::Version;
use serde::Serialize;

// Cargo guarantees CARGO_PKG_VERSION is valid semver.
static CURRENT_VERSION: Lazy<Version> =
    Lazy::new(|| Version::parse(env!("CARGO_PKG_VERSION")).expect("package version is semver"));

/// Outcome of a compatibility check.
///
/// Incompatibility is a normal outcome, not an error; the detail message names
/// both the client version and the running server version.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityOutcome {
    Compatible,
    Incompatible { detail: String },
}

impl CompatibilityOutcome {
    pub fn is_compatible(&self) -> bool {
        matches!(self, CompatibilityOutcome::Compatible)
    }
}

/// The running server's API version, fixed for the process lifetime, together
/// with the injected rule for which client versions it accepts.
#[derive(Debug, Clone)]
pub struct ApiVersion {
    version: Version,
    acceptance: ClientAcceptance,
}

impl ApiVersion {
    pub fn new(version: Version, acceptance: ClientAcceptance) -> Self {
        Self {
            version,
            acceptance,
        }
    }

    /// The version this crate was built as, with the given acceptance rule.
    pub fn current(acceptance: ClientAcceptance) -> Self {
        Self::new(CURRENT_VERSION.clone(), acceptance)
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Two-sided compatibility rule:
    ///
    /// 1. the client's declared version must be acceptable to the server
    ///    (a missing client version never passes), and
    /// 2. if the client declares a minimum server version it requires, the
    ///    running server version must be at least that.
    pub fn check_compatibility(
        &self,
        client_version: Option<&Version>,
        min_server_version: Option<&Version>,
    ) -> CompatibilityOutcome {
        let Some(client) = client_version else {
            return self.conflict("<null>");
        };

        if !self.acceptance.accepts(&self.version, client) {
            return self.conflict(&client.to_string());
        }

        if let Some(min) = min_server_version {
            if self.version < *min {
                return CompatibilityOutcome::Incompatible {
                    detail: format!(
                        "API version conflict: client version ({client}) requires server \
                         version {min} or later but server version is {}.",
                        self.version
                    ),
                };
            }
        }

        CompatibilityOutcome::Compatible
    }

    fn conflict(&self, client: &str) -> CompatibilityOutcome {
        CompatibilityOutcome::Incompatible {
            detail: format!(
                "API version conflict: client version ({client}) is not compatible with \
                 server version ({}).",
                self.version
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn server(s: &str) -> ApiVersion {
        ApiVersion::new(v(s), ClientAcceptance::SameMajor)
    }

    #[test]
    fn test_self_compatibility() {
        for s in ["1.0.0", "9.1.0", "0.1.0-alpha.1"] {
            let api = server(s);
            assert!(
                api.check_compatibility(Some(&v(s)), None).is_compatible(),
                "{s} should be compatible with itself"
            );
        }
    }

    #[test]
    fn test_major_mismatch_is_incompatible() {
        let api = server("9.1.0");
        let outcome = api.check_compatibility(Some(&v("8.9.0")), None);
        match outcome {
            CompatibilityOutcome::Incompatible { detail } => {
                assert!(detail.contains("8.9.0"));
                assert!(detail.contains("9.1.0"));
            }
            CompatibilityOutcome::Compatible => panic!("expected incompatible"),
        }
    }

    #[test]
    fn test_missing_client_version_never_passes() {
        for s in ["1.0.0", "9.1.0"] {
            let api = server(s);
            let outcome = api.check_compatibility(None, None);
            assert!(!outcome.is_compatible());
            match outcome {
                CompatibilityOutcome::Incompatible { detail } => {
                    assert!(detail.contains("<null>"));
                }
                CompatibilityOutcome::Compatible => unreachable!(),
            }
        }

        // A declared minimum the server satisfies does not rescue a missing
        // client version.
        let api = server("9.1.0");
        assert!(
            !api.check_compatibility(None, Some(&v("9.0.0")))
                .is_compatible()
        );
    }

    #[test]
    fn test_min_server_version_bound() {
        let api = server("9.1.0");

        // minRequired > server fails even when majors match.
        let outcome = api.check_compatibility(Some(&v("9.1.0")), Some(&v("9.5.0")));
        assert!(!outcome.is_compatible());

        // minRequired <= server leaves the check unaffected.
        assert!(
            api.check_compatibility(Some(&v("9.0.5")), Some(&v("9.1.0")))
                .is_compatible()
        );
        assert!(
            api.check_compatibility(Some(&v("9.0.5")), Some(&v("9.0.0")))
                .is_compatible()
        );
    }

    #[test]
    fn test_prerelease_server_is_older_than_release() {
        let api = ApiVersion::new(v("9.1.0-rc.1"), ClientAcceptance::SameMajor);
        // 9.1.0-rc.1 < 9.1.0, so a client requiring 9.1.0 is out of luck.
        assert!(
            !api.check_compatibility(Some(&v("9.0.0")), Some(&v("9.1.0")))
                .is_compatible()
        );
        assert!(
            api.check_compatibility(Some(&v("9.0.0")), Some(&v("9.1.0-rc.1")))
                .is_compatible()
        );
    }

    #[test]
    fn test_configured_range_overrides_same_major() {
        let api = ApiVersion::new(
            v("9.1.0"),
            ClientAcceptance::Range {
                min: v("8.0.0"),
                max: v("9.1.0"),
            },
        );
        assert!(
            api.check_compatibility(Some(&v("8.9.0")), None)
                .is_compatible()
        );
        assert!(
            !api.check_compatibility(Some(&v("7.9.0")), None)
                .is_compatible()
        );
    }

    #[test]
    fn test_current_matches_package_version() {
        let api = ApiVersion::current(ClientAcceptance::default());
        assert_eq!(api.version().to_string(), env!("CARGO_PKG_VERSION"));
    }
}
