//! Directory entry types produced by searches.

use crate::query::{FORWARDING_ADDRESS_ATTR, MAIL_ATTR};
use std::collections::HashMap;

/// Raw directory entry as returned by a search.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    /// Distinguished name of the entry.
    pub dn: String,
    /// Attribute map; value order within an attribute is preserved from the
    /// server.
    pub attributes: HashMap<String, Vec<String>>,
}

impl DirectoryEntry {
    /// Returns the first value of the attribute if present.
    #[must_use]
    pub fn first(&self, attribute: &str) -> Option<&str> {
        self.attributes
            .get(attribute)
            .and_then(|values| values.first().map(String::as_str))
    }

    /// Returns all values for the attribute.
    #[must_use]
    pub fn values(&self, attribute: &str) -> Option<&[String]> {
        self.attributes
            .get(attribute)
            .map(|values| values.as_slice())
    }
}

/// Account entry prepared for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEntry {
    /// Primary mail address, the record key in the output.
    pub mail: String,
    /// First value of every attribute that has a non-empty value.
    pub values: HashMap<String, String>,
}

impl AccountEntry {
    /// Builds an account record from a raw entry.
    ///
    /// Only the first value of each attribute is kept, and attributes whose
    /// value is empty are dropped so the serializer omits them.
    #[must_use]
    pub fn from_entry(entry: &DirectoryEntry) -> Self {
        let mail = entry.first(MAIL_ATTR).unwrap_or_default().to_string();
        let values = entry
            .attributes
            .iter()
            .filter_map(|(name, values)| {
                values
                    .first()
                    .filter(|value| !value.is_empty())
                    .map(|value| (name.clone(), value.clone()))
            })
            .collect();
        Self { mail, values }
    }

    /// Returns the retained value for an attribute.
    #[must_use]
    pub fn value(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }
}

/// Distribution list entry prepared for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Primary mail address of the list.
    pub mail: String,
    /// Forwarding addresses in the order returned by the directory.
    pub members: Vec<String>,
}

impl ListEntry {
    /// Builds a distribution list record from a raw entry.
    #[must_use]
    pub fn from_entry(entry: &DirectoryEntry) -> Self {
        Self {
            mail: entry.first(MAIL_ATTR).unwrap_or_default().to_string(),
            members: entry
                .values(FORWARDING_ADDRESS_ATTR)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        }
    }
}
