//! Directory client implementation.

use crate::{
    config::DirectoryConfig,
    entry::DirectoryEntry,
    query::{SearchQuery, SearchScope},
    Result,
};
use async_trait::async_trait;
use ldap3::{LdapConnAsync, LdapConnSettings, Scope, SearchEntry};
use native_tls::TlsConnector;
use std::sync::Arc;
use tracing::debug;
use zexport_core::Error;

impl From<SearchScope> for Scope {
    fn from(scope: SearchScope) -> Self {
        match scope {
            SearchScope::Base => Scope::Base,
            SearchScope::OneLevel => Scope::OneLevel,
            SearchScope::Subtree => Scope::Subtree,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub(crate) trait LdapSession: Send {
    async fn simple_bind(&mut self, dn: &str, password: &str) -> Result<()>;
    async fn search(
        &mut self,
        base: &str,
        scope: SearchScope,
        filter: &str,
        attributes: &[String],
    ) -> Result<Vec<DirectoryEntry>>;
    async fn unbind(&mut self) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub(crate) trait LdapConnector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn LdapSession>>;
}

/// Directory client with a pluggable LDAP backend.
pub struct DirectoryClient {
    config: Arc<DirectoryConfig>,
    connector: Box<dyn LdapConnector>,
}

impl DirectoryClient {
    /// Creates a client that uses the real LDAP connector.
    #[must_use]
    pub fn new(config: DirectoryConfig) -> Self {
        let config = Arc::new(config);
        let connector: Box<dyn LdapConnector> = Box::new(RealLdapConnector::new(config.clone()));
        Self { config, connector }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_connector(config: DirectoryConfig, connector: Box<dyn LdapConnector>) -> Self {
        Self {
            config: Arc::new(config),
            connector,
        }
    }

    /// Connects, upgrades the transport and binds with the configured
    /// credentials.
    ///
    /// No timeout is applied at any stage; an unresponsive server blocks the
    /// run.
    ///
    /// # Errors
    ///
    /// Fails if the connection, the StartTLS upgrade or the bind fails. All
    /// of these are fatal for the run; there is no retry.
    pub async fn open_session(&self) -> Result<DirectorySession> {
        let mut session = self.connector.connect().await?;
        session
            .simple_bind(
                self.config.credentials().bind_dn(),
                self.config.credentials().bind_password(),
            )
            .await?;
        debug!(url = %self.config.url(), "directory session established");
        Ok(DirectorySession { inner: session })
    }
}

/// A bound directory session.
///
/// Both export searches run over the same session; it is closed once at the
/// end of the run.
pub struct DirectorySession {
    inner: Box<dyn LdapSession>,
}

impl std::fmt::Debug for DirectorySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectorySession").finish_non_exhaustive()
    }
}

impl DirectorySession {
    /// Executes a search and returns the matching entries.
    ///
    /// # Errors
    ///
    /// Returns a directory error if the search is rejected by the server.
    pub async fn search(&mut self, query: &SearchQuery) -> Result<Vec<DirectoryEntry>> {
        self.inner
            .search(&query.base, query.scope, &query.filter, &query.attributes)
            .await
    }

    /// Unbinds and closes the session.
    ///
    /// # Errors
    ///
    /// Returns a directory error if the unbind fails.
    pub async fn close(mut self) -> Result<()> {
        self.inner.unbind().await
    }
}

/// Real LDAP connector backed by `ldap3`.
struct RealLdapConnector {
    config: Arc<DirectoryConfig>,
}

impl RealLdapConnector {
    fn new(config: Arc<DirectoryConfig>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl LdapConnector for RealLdapConnector {
    async fn connect(&self) -> Result<Box<dyn LdapSession>> {
        let settings = build_ldap_settings(&self.config)?;
        let (conn, ldap) = LdapConnAsync::with_settings(settings, &self.config.url())
            .await
            .map_err(|err| Error::directory("connect", err.to_string()))?;
        ldap3::drive!(conn);
        Ok(Box::new(RealLdapSession { inner: ldap }))
    }
}

struct RealLdapSession {
    inner: ldap3::Ldap,
}

#[async_trait]
impl LdapSession for RealLdapSession {
    async fn simple_bind(&mut self, dn: &str, password: &str) -> Result<()> {
        self.inner
            .simple_bind(dn, password)
            .await
            .map_err(|err| Error::directory("bind", err.to_string()))?
            .success()
            .map_err(|err| Error::directory("bind", err.to_string()))?;
        Ok(())
    }

    async fn search(
        &mut self,
        base: &str,
        scope: SearchScope,
        filter: &str,
        attributes: &[String],
    ) -> Result<Vec<DirectoryEntry>> {
        let result = self
            .inner
            .search(base, scope.into(), filter, attributes.to_vec())
            .await
            .map_err(|err| Error::directory("search", err.to_string()))?;
        let (entries, _) = result
            .success()
            .map_err(|err| Error::directory("search", err.to_string()))?;
        Ok(entries
            .into_iter()
            .map(SearchEntry::construct)
            .map(|entry| DirectoryEntry {
                dn: entry.dn,
                attributes: entry.attrs,
            })
            .collect())
    }

    async fn unbind(&mut self) -> Result<()> {
        self.inner
            .unbind()
            .await
            .map_err(|err| Error::directory("unbind", err.to_string()))
    }
}

fn build_ldap_settings(config: &DirectoryConfig) -> Result<LdapConnSettings> {
    let mut settings = LdapConnSettings::new().set_starttls(true);

    if !config.tls_verify() {
        let connector = TlsConnector::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|err| {
                Error::Config(format!("failed to construct TLS connector: {err}"))
            })?;
        settings = settings.set_connector(connector).set_no_tls_verify(true);
    }

    Ok(settings)
}
