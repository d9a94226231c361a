//! Zimbra localconfig parsing.
//!
//! A `localconfig.xml` document is a flat, ordered list of named keys:
//!
//! ```xml
//! <localconfig>
//!   <key name="ldap_host">
//!     <value>ldap.example.com</value>
//!   </key>
//! </localconfig>
//! ```
//!
//! Only the shape above is interpreted; unrecognized elements are skipped.

use crate::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// A single `<key>` element from a localconfig document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalconfigKey {
    name: String,
    value: String,
}

impl LocalconfigKey {
    /// Key name (the `name` attribute).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key value (the `<value>` child, or a `value` attribute).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Parsed view of a Zimbra localconfig document.
///
/// Keys keep document order; [`Localconfig::get`] returns the first key with a
/// matching name.
#[derive(Debug, Clone, Default)]
pub struct Localconfig {
    keys: Vec<LocalconfigKey>,
}

impl Localconfig {
    /// Parses a localconfig document from its XML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LocalconfigParse`] if the document is not well-formed
    /// XML.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut keys = Vec::new();
        let mut current_name: Option<String> = None;
        let mut current_value = String::new();
        let mut in_value = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"key" => {
                        current_name = Some(key_name_attr(&e)?);
                        current_value = key_value_attr(&e)?.unwrap_or_default();
                    }
                    b"value" if current_name.is_some() => {
                        in_value = true;
                        current_value.clear();
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"key" {
                        keys.push(LocalconfigKey {
                            name: key_name_attr(&e)?,
                            value: key_value_attr(&e)?.unwrap_or_default(),
                        });
                    }
                }
                Ok(Event::Text(e)) => {
                    if in_value {
                        let text = e
                            .unescape()
                            .map_err(|err| Error::LocalconfigParse(err.to_string()))?;
                        current_value.push_str(&text);
                    }
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"value" => in_value = false,
                    b"key" => {
                        if let Some(name) = current_name.take() {
                            keys.push(LocalconfigKey {
                                name,
                                value: std::mem::take(&mut current_value),
                            });
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(err) => return Err(Error::LocalconfigParse(err.to_string())),
                Ok(_) => {}
            }
        }

        Ok(Self { keys })
    }

    /// Returns the value of the first key with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.keys
            .iter()
            .find(|key| key.name == name)
            .map(LocalconfigKey::value)
    }

    /// Returns all keys in document order.
    #[must_use]
    pub fn keys(&self) -> &[LocalconfigKey] {
        &self.keys
    }
}

fn key_name_attr(e: &quick_xml::events::BytesStart<'_>) -> Result<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"name" {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::LocalconfigParse(err.to_string()))?;
            return Ok(value.to_string());
        }
    }
    Ok(String::new())
}

fn key_value_attr(e: &quick_xml::events::BytesStart<'_>) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"value" {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::LocalconfigParse(err.to_string()))?;
            return Ok(Some(value.to_string()));
        }
    }
    Ok(None)
}
