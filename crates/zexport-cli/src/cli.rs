//! Command line definition for the zexport binary.

use clap::Parser;
use std::path::PathBuf;

/// Account attributes exported by default.
///
/// The list mirrors the attribute set a Zimbra-to-Zimbra migration carries
/// over: identity, status, forwarding, out-of-office, composer preferences,
/// sieve script, signatures and the password hash.
pub const DEFAULT_ACCOUNT_ATTRS: &str = "displayName,\
zimbraAccountstatus,\
givenName,\
sn,\
zimbraIsAdminAccount,\
zimbraPrefMailForwardingAddress,\
zimbraPrefOutOfOfficeCacheDuration,\
zimbraPrefOutOfOfficeDirectAddress,\
zimbraPrefOutOfOfficeFromDate,\
zimbraPrefOutOfOfficeReply,\
zimbraPrefOutOfOfficeReplyEnabled,\
zimbraPrefOutOfOfficeUntilDate,\
zimbraPrefHtmlEditorDefaultFontColor,\
zimbraPrefHtmlEditorDefaultFontFamily,\
zimbraPrefHtmlEditorDefaultFontSize,\
zimbraPrefMessageViewHtmlPreferred,\
zimbraMailSieveScript,\
zimbraPrefComposeFormat,\
zimbraPrefGroupMailBy,\
zimbraSignatureName,\
zimbraSignatureId,\
zimbraPrefMailSignatureHTML,\
zimbraPrefMailSignature,\
zimbraPrefForwardReplySignatureId,\
zimbraPrefDefaultSignatureId,\
userPassword";

/// Default path of the Zimbra localconfig document.
pub const DEFAULT_LOCALCONFIG_PATH: &str = "/opt/zimbra/conf/localconfig.xml";

/// Export Zimbra accounts and distribution lists as zmprov commands.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "zexport",
    version,
    about = "Export Zimbra LDAP accounts and distribution lists as zmprov commands"
)]
pub struct Cli {
    /// Comma-separated list of account attributes to export
    #[arg(long, default_value = DEFAULT_ACCOUNT_ATTRS)]
    pub attrs: String,

    /// Domain to export; `*` exports all domains
    #[arg(long, default_value = "*")]
    pub domain: String,

    /// Zimbra LDAP host to connect to
    #[arg(long, default_value = "")]
    pub ldap_host: String,

    /// LDAP port
    #[arg(long, default_value = "389")]
    pub ldap_port: String,

    /// Admin bind DN
    #[arg(long, default_value = "uid=zimbra,cn=admins,cn=zimbra")]
    pub ldap_user: String,

    /// Admin bind password
    #[arg(long, default_value = "")]
    pub ldap_password: String,

    /// Path to the Zimbra localconfig.xml file
    #[arg(long, default_value = DEFAULT_LOCALCONFIG_PATH)]
    pub localconfig: PathBuf,

    /// Verify the directory server certificate during the TLS upgrade
    #[arg(long)]
    pub tls_verify: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = Cli::try_parse_from(["zexport"]).unwrap();
        assert_eq!(cli.domain, "*");
        assert_eq!(cli.ldap_host, "");
        assert_eq!(cli.ldap_port, "389");
        assert_eq!(cli.ldap_user, "uid=zimbra,cn=admins,cn=zimbra");
        assert_eq!(cli.ldap_password, "");
        assert_eq!(cli.localconfig, PathBuf::from(DEFAULT_LOCALCONFIG_PATH));
        assert!(!cli.tls_verify);
        assert!(cli.attrs.starts_with("displayName,"));
        assert!(cli.attrs.ends_with(",userPassword"));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "zexport",
            "--domain",
            "example.com",
            "--ldap-host",
            "ldap.example.com",
            "--ldap-password",
            "secret",
            "--tls-verify",
        ])
        .unwrap();
        assert_eq!(cli.domain, "example.com");
        assert_eq!(cli.ldap_host, "ldap.example.com");
        assert_eq!(cli.ldap_password, "secret");
        assert!(cli.tls_verify);
    }
}
