//! The export pipeline.

use crate::cli::Cli;
use crate::serialize;
use std::io::Write;
use tracing::info;
use zexport_core::credentials::{self, CredentialOverrides};
use zexport_core::Result;
use zexport_directory::{
    AccountEntry, AttributeSpec, DirectoryClient, DirectoryConfig, ListEntry, SearchQuery,
};

/// Runs the full export: resolve credentials, bind, search, serialize.
///
/// Lines are written to `out` as results arrive; output already written stays
/// in place if a later stage fails.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let fallback = CredentialOverrides {
        host: cli.ldap_host.clone(),
        port: cli.ldap_port.clone(),
        bind_dn: cli.ldap_user.clone(),
        password: cli.ldap_password.clone(),
    };
    let credentials = credentials::resolve(&cli.localconfig, &fallback)?;
    let spec = AttributeSpec::parse(&cli.attrs);

    let config = DirectoryConfig::new(credentials)?.with_tls_verification(cli.tls_verify);
    let client = DirectoryClient::new(config);
    let mut session = client.open_session().await?;

    let accounts = session
        .search(&SearchQuery::accounts(&cli.domain, &spec))
        .await?;
    info!(count = accounts.len(), "account search complete");
    for entry in &accounts {
        serialize::write_account(out, &AccountEntry::from_entry(entry), &spec)?;
    }

    let lists = session
        .search(&SearchQuery::distribution_lists(&cli.domain))
        .await?;
    info!(count = lists.len(), "distribution list search complete");
    for entry in &lists {
        serialize::write_list(out, &ListEntry::from_entry(entry))?;
    }

    session.close().await?;
    Ok(())
}
