//! LDAP directory client for the zexport tool.
//!
//! This crate provides the connection configuration, query construction and
//! entry types used to export accounts and distribution lists from a Zimbra
//! LDAP directory.

#![deny(missing_docs)]

mod client;
mod config;
mod entry;
mod query;

pub use client::{DirectoryClient, DirectorySession};
pub use config::DirectoryConfig;
pub use entry::{AccountEntry, DirectoryEntry, ListEntry};
pub use query::{AttributeSpec, SearchQuery, SearchScope, FORWARDING_ADDRESS_ATTR, MAIL_ATTR};

/// Convenient result alias that reuses the core error type.
pub type Result<T> = zexport_core::Result<T>;
