//! Catalog Transformer
//!
//! Turns the entries of a parsed catalog into the flat message map served to
//! the client. Every translation is checked against its canonical source;
//! translations that fail the check, or are empty, degrade to `""`.

use crate::diagnostics::LogContext;
use crate::i18n::cache::ConversionCache;
use crate::i18n::catalog::{Catalog, MessageEntry};
use crate::i18n::includes::resolve_includes;
use crate::i18n::plural_forms::{PluralFormsError, PluralRule};
use crate::i18n::validator::{validate_message, ValidationOptions};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Reserved output key holding `nplurals`
pub const PLURALIZATION_COUNT_KEY: &str = "__pluralization_count__";
/// Reserved output key holding the plural selector expression
pub const PLURALIZATION_EXPR_KEY: &str = "__pluralization_expr__";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no original string cached for message {msgid:?} (line {line})")]
    MissingOriginal { msgid: String, line: usize },
    #[error(transparent)]
    PluralForms(#[from] PluralFormsError),
}

/// Output value of one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageValue {
    Single(String),
    Plural(Vec<String>),
}

impl From<&str> for MessageValue {
    fn from(value: &str) -> Self {
        MessageValue::Single(value.to_string())
    }
}

/// Output map keyed by message id, in catalog order.
pub type Messages = IndexMap<String, MessageValue>;

/// Counters accumulated over one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Message strings examined, one per plural form.
    pub total: usize,
    /// Strings that passed validation and were non-empty.
    pub translated: usize,
}

impl RunStats {
    /// Whole percentage of translated strings, 0 for an empty catalog.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.translated * 100 / self.total
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub messages: Messages,
    pub stats: RunStats,
    /// Distinct message keys, reserved keys excluded.
    pub unique: usize,
}

impl ConversionResult {
    pub fn summary(&self, target: impl Into<String>) -> ConversionSummary {
        ConversionSummary {
            target: target.into(),
            stats: self.stats,
            unique: self.unique,
        }
    }
}

/// The informational line reported once a conversion finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub target: String,
    pub stats: RunStats,
    pub unique: usize,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} ({} unique) translated ({}%)",
            self.target,
            self.stats.translated,
            self.stats.total,
            self.unique,
            self.stats.percent()
        )
    }
}

pub struct CatalogTransformer<'a> {
    cache: &'a ConversionCache,
    ctx: &'a LogContext,
}

impl<'a> CatalogTransformer<'a> {
    pub fn new(cache: &'a ConversionCache, ctx: &'a LogContext) -> Self {
        CatalogTransformer { cache, ctx }
    }

    /// Converts a single message string.
    pub fn convert_string(
        &self,
        msgid: &str,
        line: usize,
        string: &str,
        options: ValidationOptions,
        stats: &mut RunStats,
    ) -> Result<String, ConvertError> {
        stats.total += 1;
        let original = self
            .cache
            .source_for(msgid)
            .ok_or_else(|| ConvertError::MissingOriginal {
                msgid: msgid.to_string(),
                line,
            })?;

        let report = validate_message(string, original, msgid, options, self.ctx);
        if report.is_valid() && !string.is_empty() {
            stats.translated += 1;
            Ok(resolve_includes(string, msgid, &self.cache.includes, self.ctx))
        } else {
            Ok(String::new())
        }
    }

    /// Converts one entry into its output key and value. Plural forms after
    /// the first are not required to keep the source variables.
    pub fn convert_entry(
        &self,
        entry: &MessageEntry,
        stats: &mut RunStats,
    ) -> Result<(String, MessageValue), ConvertError> {
        let msgid = entry.id.key();
        if entry.is_fuzzy() {
            tracing::debug!(source = %self.ctx.source, msgid, "Converting fuzzy entry");
        }

        if !entry.is_pluralizable() {
            let string = entry.strings.first().map(String::as_str).unwrap_or("");
            let value =
                self.convert_string(msgid, entry.line, string, ValidationOptions::default(), stats)?;
            return Ok((msgid.to_string(), MessageValue::Single(value)));
        }

        let forms = entry
            .strings
            .iter()
            .enumerate()
            .map(|(index, string)| {
                let options = ValidationOptions {
                    skip_missing_variables: index > 0,
                };
                self.convert_string(msgid, entry.line, string, options, stats)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((msgid.to_string(), MessageValue::Plural(forms)))
    }

    /// Converts every entry. Entries sharing a key keep the last value.
    pub fn convert_entries(&self, entries: &[MessageEntry]) -> Result<ConversionResult, ConvertError> {
        let mut stats = RunStats::default();
        let mut messages = Messages::with_capacity(entries.len());
        for entry in entries {
            let (key, value) = self.convert_entry(entry, &mut stats)?;
            messages.insert(key, value);
        }
        let unique = messages.len();
        Ok(ConversionResult {
            messages,
            stats,
            unique,
        })
    }

    /// Converts a whole catalog and appends the pluralization keys.
    pub fn convert_catalog(&self, catalog: &Catalog) -> Result<ConversionResult, ConvertError> {
        let mut result = self.convert_entries(&catalog.entries)?;
        let rule = PluralRule::from_catalog(catalog)?;
        result.messages.insert(
            PLURALIZATION_COUNT_KEY.to_string(),
            MessageValue::Single(rule.count),
        );
        result.messages.insert(
            PLURALIZATION_EXPR_KEY.to_string(),
            MessageValue::Single(rule.expression),
        );
        Ok(result)
    }
}
