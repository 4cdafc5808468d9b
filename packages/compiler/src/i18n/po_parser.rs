//! PO Parser Module
//!
//! Reads gettext `.po` sources into a `Catalog` with rspolib.
//! The header entry becomes `Catalog::headers`; obsolete entries are dropped.
//! Plural entries always carry `nplurals` forms, padded with empty strings.

use crate::i18n::catalog::{Catalog, MessageEntry, MessageId};
use crate::i18n::plural_forms::{PluralRule, PLURAL_FORMS_HEADER};
use crate::parse_util::{ParseError, ParseLocation};

/// Parses `.po` source text read from `url`.
pub fn parse_po(content: &str, url: &str) -> Result<Catalog, ParseError> {
    let options = rspolib::FileOptions::from(content.as_bytes().to_vec());
    let pofile = rspolib::pofile(options)
        .map_err(|err| ParseError::new(ParseLocation::file(url), err.to_string()))?;

    let mut catalog = Catalog::default();
    catalog.headers.extend(pofile.metadata);
    // Unknown or malformed rules leave forms as written; conversion then
    // fails on the header itself.
    let nplurals = catalog
        .header(PLURAL_FORMS_HEADER)
        .and_then(|value| PluralRule::parse(value).ok())
        .and_then(|rule| rule.count.parse::<usize>().ok());

    for entry in pofile.entries.into_iter().filter(|e| !e.obsolete) {
        let line = entry.linenum;
        let id = match entry.msgid_plural {
            Some(plural) => MessageId::Plural {
                singular: entry.msgid,
                plural,
            },
            None => MessageId::Singular(entry.msgid),
        };

        let strings = match &id {
            MessageId::Singular(_) => vec![entry.msgstr.unwrap_or_default()],
            MessageId::Plural { singular, .. } => {
                plural_forms(entry.msgstr_plural, nplurals).map_err(|forms| {
                    ParseError::new(
                        ParseLocation::new(url, line, 1),
                        format!(
                            "{:?} has {} plural forms, catalog allows {}",
                            singular,
                            forms,
                            nplurals.unwrap_or_default()
                        ),
                    )
                })?
            }
        };

        catalog.entries.push(MessageEntry {
            id,
            context: entry.msgctxt,
            strings,
            flags: entry.flags,
            line,
        });
    }

    Ok(catalog)
}

/// Pads `forms` to `nplurals`. Returns the form count when it exceeds it.
fn plural_forms(mut forms: Vec<String>, nplurals: Option<usize>) -> Result<Vec<String>, usize> {
    if let Some(count) = nplurals {
        if forms.len() > count {
            return Err(forms.len());
        }
        forms.resize(count, String::new());
    }
    Ok(forms)
}
