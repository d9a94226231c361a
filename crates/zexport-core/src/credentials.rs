//! Directory credential resolution.
//!
//! Credentials come from one of two sources: the Zimbra localconfig document
//! when it is readable, or the command-line fallback values otherwise. A
//! readable localconfig is authoritative and the fallback values are ignored
//! entirely in that branch.

use crate::localconfig::Localconfig;
use crate::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use std::path::Path;
use tracing::{info, warn};

/// Localconfig key naming the LDAP host.
pub const KEY_LDAP_HOST: &str = "ldap_host";
/// Localconfig key naming the LDAP port.
pub const KEY_LDAP_PORT: &str = "ldap_port";
/// Localconfig key naming the admin bind DN.
pub const KEY_LDAP_BIND_DN: &str = "zimbra_ldap_userdn";
/// Localconfig key naming the admin bind password.
pub const KEY_LDAP_PASSWORD: &str = "zimbra_ldap_password";

/// Resolved administrative credentials for the directory service.
///
/// Constructed once per run and immutable thereafter.
#[derive(Debug)]
pub struct DirectoryCredentials {
    host: String,
    port: String,
    bind_dn: String,
    bind_password: SecretString,
}

impl DirectoryCredentials {
    /// Creates a credential set from its four parts.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        port: impl Into<String>,
        bind_dn: impl Into<String>,
        bind_password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            bind_dn: bind_dn.into(),
            bind_password: bind_password.into().into(),
        }
    }

    /// Directory host name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Directory port.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// LDAP bind DN.
    #[must_use]
    pub fn bind_dn(&self) -> &str {
        &self.bind_dn
    }

    /// LDAP bind password.
    #[must_use]
    pub fn bind_password(&self) -> &str {
        self.bind_password.expose_secret()
    }
}

/// Command-line fallback values used when localconfig is unavailable.
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    /// Directory host name.
    pub host: String,
    /// Directory port.
    pub port: String,
    /// Admin bind DN.
    pub bind_dn: String,
    /// Admin bind password.
    pub password: String,
}

/// Resolves credentials, preferring localconfig over the fallback values.
///
/// An absent or unreadable localconfig file selects the fallback branch. A
/// localconfig that parses but lacks one of the four recognized keys yields an
/// empty string for that field; only host and password emptiness is validated
/// afterwards.
///
/// # Errors
///
/// Returns [`Error::LocalconfigParse`] for a present but malformed localconfig
/// and [`Error::Config`] when the resolved host or password is empty.
pub fn resolve(
    localconfig_path: &Path,
    fallback: &CredentialOverrides,
) -> Result<DirectoryCredentials> {
    let resolved = match std::fs::read_to_string(localconfig_path) {
        Ok(xml) => {
            let config = Localconfig::parse(&xml)?;
            info!(
                path = %localconfig_path.display(),
                "localconfig loaded, ignoring directory credentials from the command line"
            );
            DirectoryCredentials::new(
                config.get(KEY_LDAP_HOST).unwrap_or_default(),
                config.get(KEY_LDAP_PORT).unwrap_or_default(),
                config.get(KEY_LDAP_BIND_DN).unwrap_or_default(),
                config.get(KEY_LDAP_PASSWORD).unwrap_or_default(),
            )
        }
        Err(err) => {
            warn!(
                path = %localconfig_path.display(),
                error = %err,
                "localconfig not readable, using directory credentials from the command line"
            );
            DirectoryCredentials::new(
                fallback.host.clone(),
                fallback.port.clone(),
                fallback.bind_dn.clone(),
                fallback.password.clone(),
            )
        }
    };

    if resolved.host().is_empty() {
        return Err(Error::Config(
            "directory host is empty; set --ldap-host or provide a readable localconfig.xml"
                .to_string(),
        ));
    }
    if resolved.bind_password().is_empty() {
        return Err(Error::Config(
            "bind password is empty; set --ldap-password or provide a readable localconfig.xml"
                .to_string(),
        ));
    }

    Ok(resolved)
}
