//! Configuration for directory connections.

use crate::Result;
use zexport_core::credentials::DirectoryCredentials;
use zexport_core::Error;

/// Configuration for connecting to the directory service.
///
/// The session starts in plaintext and upgrades with StartTLS. Certificate
/// verification is off unless explicitly enabled, matching the relaxed trust
/// model of the target deployments.
#[derive(Debug)]
pub struct DirectoryConfig {
    credentials: DirectoryCredentials,
    tls_verify: bool,
}

impl DirectoryConfig {
    /// Creates a configuration from resolved credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if host and port do not form a valid endpoint URL.
    pub fn new(credentials: DirectoryCredentials) -> Result<Self> {
        let config = Self {
            credentials,
            tls_verify: false,
        };
        let endpoint = config.url();
        url::Url::parse(&endpoint)
            .map_err(|err| Error::Config(format!("invalid directory endpoint {endpoint}: {err}")))?;
        Ok(config)
    }

    /// Returns the plaintext LDAP endpoint URL the session starts from.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "ldap://{}:{}",
            self.credentials.host(),
            self.credentials.port()
        )
    }

    /// Returns the admin credentials.
    #[must_use]
    pub const fn credentials(&self) -> &DirectoryCredentials {
        &self.credentials
    }

    /// Returns whether TLS certificate verification is enabled.
    #[must_use]
    pub const fn tls_verify(&self) -> bool {
        self.tls_verify
    }

    /// Enables or disables TLS certificate verification.
    #[must_use]
    pub const fn with_tls_verification(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }
}
