//! Provisioning command serialization.
//!
//! The emitted text is the wire contract with the downstream provisioning
//! tool and is reproduced byte for byte: the `''` placeholder token, single
//! spaces between tokens and a trailing space after every attribute pair.

use std::io::Write;
use zexport_directory::{AccountEntry, AttributeSpec, ListEntry};

/// Escapes an attribute value for embedding in a single-quoted token.
///
/// Every literal newline becomes the two-character sequence `\n` and every
/// single quote becomes `\'`. No other characters are altered.
#[must_use]
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\'' => escaped.push_str("\\'"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Writes one `createAccount` line for the entry.
///
/// Attributes are emitted in `spec` order; attributes without a retained
/// value are omitted entirely rather than emitted as empty pairs.
pub fn write_account<W: Write>(
    out: &mut W,
    entry: &AccountEntry,
    spec: &AttributeSpec,
) -> std::io::Result<()> {
    write!(out, "createAccount {} '' ", entry.mail)?;
    for name in spec.iter() {
        if let Some(value) = entry.value(name) {
            write!(out, "{} '{}' ", name, escape_value(value))?;
        }
    }
    writeln!(out)
}

/// Writes the `createDistributionList` line and one member line per member.
///
/// Members are written in the order carried by the entry, without
/// deduplication.
pub fn write_list<W: Write>(out: &mut W, entry: &ListEntry) -> std::io::Result<()> {
    writeln!(out, "createDistributionList {}", entry.mail)?;
    for member in &entry.members {
        writeln!(out, "addDistributionListMember {} {}", entry.mail, member)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn account(mail: &str, values: &[(&str, &str)]) -> AccountEntry {
        AccountEntry {
            mail: mail.to_string(),
            values: values
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn render_account(entry: &AccountEntry, spec: &AttributeSpec) -> String {
        let mut out = Vec::new();
        write_account(&mut out, entry, spec).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn render_list(entry: &ListEntry) -> String {
        let mut out = Vec::new();
        write_list(&mut out, entry).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn escape_replaces_newlines_and_quotes_only() {
        assert_eq!(escape_value("O'Brien"), "O\\'Brien");
        assert_eq!(escape_value("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_value("a'b\nc'd"), "a\\'b\\nc\\'d");
        assert_eq!(escape_value("plain \"text\" $HOME `cmd`"), "plain \"text\" $HOME `cmd`");
    }

    #[test]
    fn account_line_with_quoted_value_and_omitted_empty() {
        // sn is absent from the entry (its directory value was empty), so the
        // pair is omitted entirely.
        let entry = account("alice@example.com", &[("displayName", "O'Brien")]);
        let spec = AttributeSpec::parse("displayName,sn");
        assert_eq!(
            render_account(&entry, &spec),
            "createAccount alice@example.com '' displayName 'O\\'Brien' \n"
        );
    }

    #[test]
    fn account_line_without_attributes_keeps_placeholder() {
        let entry = account("bob@example.com", &[]);
        let spec = AttributeSpec::parse("displayName,sn");
        assert_eq!(render_account(&entry, &spec), "createAccount bob@example.com '' \n");
    }

    #[test]
    fn account_attributes_follow_spec_order() {
        let entry = account(
            "carol@example.com",
            &[("sn", "Jones"), ("displayName", "Carol"), ("givenName", "C")],
        );
        let spec = AttributeSpec::parse("givenName,displayName,sn");
        assert_eq!(
            render_account(&entry, &spec),
            "createAccount carol@example.com '' givenName 'C' displayName 'Carol' sn 'Jones' \n"
        );
    }

    #[test]
    fn account_value_with_embedded_newline() {
        let entry = account(
            "dave@example.com",
            &[("zimbraPrefMailSignature", "Regards,\nDave")],
        );
        let spec = AttributeSpec::parse("zimbraPrefMailSignature");
        assert_eq!(
            render_account(&entry, &spec),
            "createAccount dave@example.com '' zimbraPrefMailSignature 'Regards,\\nDave' \n"
        );
    }

    #[test]
    fn attribute_absent_from_spec_is_not_emitted() {
        let entry = account(
            "erin@example.com",
            &[("displayName", "Erin"), ("sn", "Smith")],
        );
        let spec = AttributeSpec::parse("displayName");
        assert_eq!(
            render_account(&entry, &spec),
            "createAccount erin@example.com '' displayName 'Erin' \n"
        );
    }

    #[test]
    fn list_lines_follow_member_order() {
        let entry = ListEntry {
            mail: "team@example.com".to_string(),
            members: vec!["a@example.com".to_string(), "b@example.com".to_string()],
        };
        assert_eq!(
            render_list(&entry),
            "createDistributionList team@example.com\n\
             addDistributionListMember team@example.com a@example.com\n\
             addDistributionListMember team@example.com b@example.com\n"
        );
    }

    #[test]
    fn empty_list_emits_only_the_create_line() {
        let entry = ListEntry {
            mail: "empty@example.com".to_string(),
            members: Vec::new(),
        };
        assert_eq!(render_list(&entry), "createDistributionList empty@example.com\n");
    }

    #[test]
    fn member_count_matches_line_count() {
        let members: Vec<String> = (0..5).map(|i| format!("user{i}@example.com")).collect();
        let entry = ListEntry {
            mail: "big@example.com".to_string(),
            members: members.clone(),
        };
        let rendered = render_list(&entry);
        let member_lines = rendered
            .lines()
            .filter(|line| line.starts_with("addDistributionListMember "))
            .count();
        assert_eq!(member_lines, members.len());
    }
}
