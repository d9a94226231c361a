//! Search query construction for the account and distribution list exports.

/// Attribute holding the primary mail address.
pub const MAIL_ATTR: &str = "mail";
/// Attribute holding distribution list forwarding addresses.
pub const FORWARDING_ADDRESS_ATTR: &str = "zimbraMailForwardingAddress";

/// Ordered list of account attributes requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    names: Vec<String>,
}

impl AttributeSpec {
    /// Parses a comma-delimited attribute list.
    ///
    /// Order is preserved, duplicates are kept and names are not trimmed.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self {
            names: list.split(',').map(str::to_string).collect(),
        }
    }

    /// Returns the attribute names in caller order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns an iterator over the attribute names.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

/// Search scope for directory queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Base object only.
    Base,
    /// One level below the base.
    OneLevel,
    /// Entire subtree.
    Subtree,
}

/// A fully-specified directory search.
///
/// Queries run unbounded (no size or time limit) and never dereference
/// aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search base DN; the empty string means the directory root.
    pub base: String,
    /// Search scope.
    pub scope: SearchScope,
    /// LDAP filter string.
    pub filter: String,
    /// Attributes to request.
    pub attributes: Vec<String>,
}

impl SearchQuery {
    /// Builds the account export query for a domain.
    ///
    /// `domain` may be `*` to match every domain. The value is embedded in
    /// the filter verbatim, without escaping filter metacharacters. The
    /// `mail` attribute is always requested, followed by the caller's
    /// attribute list in order (a duplicate `mail` is harmless).
    #[must_use]
    pub fn accounts(domain: &str, spec: &AttributeSpec) -> Self {
        let mut attributes = vec![MAIL_ATTR.to_string()];
        attributes.extend(spec.names().iter().cloned());
        Self {
            base: String::new(),
            scope: SearchScope::Subtree,
            filter: format!(
                "(&(objectClass=zimbraAccount)(mail=*@{domain})(!(|(zimbraIsSystemAccount=TRUE)(objectClass=zimbraCalendarResource))))"
            ),
            attributes,
        }
    }

    /// Builds the distribution list export query for a domain.
    ///
    /// The requested attribute set is fixed; the caller's attribute list does
    /// not apply to lists.
    #[must_use]
    pub fn distribution_lists(domain: &str) -> Self {
        Self {
            base: String::new(),
            scope: SearchScope::Subtree,
            filter: format!("(&(objectClass=zimbraDistributionList)(mail=*@{domain}))"),
            attributes: vec![MAIL_ATTR.to_string(), FORWARDING_ADDRESS_ATTR.to_string()],
        }
    }
}
