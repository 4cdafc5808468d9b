//! Plural Rule Extractor
//!
//! Reads `nplurals` and the `plural` selector expression from the
//! catalog's `Plural-Forms` header.

use crate::i18n::catalog::Catalog;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const PLURAL_FORMS_HEADER: &str = "Plural-Forms";

/// Matches the whole `Plural-Forms` value
static PLURAL_FORMS_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^nplurals=([0-9]+); plural=(.*)$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PluralFormsError {
    #[error("catalog has no Plural-Forms header")]
    Missing,
    #[error("malformed Plural-Forms header: {0:?}")]
    Malformed(String),
}

/// Pluralization rule of a catalog. Both parts are kept as text; the
/// expression is evaluated by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRule {
    pub count: String,
    pub expression: String,
}

impl PluralRule {
    pub fn parse(value: &str) -> Result<Self, PluralFormsError> {
        let caps = PLURAL_FORMS_REGEXP
            .captures(value)
            .ok_or_else(|| PluralFormsError::Malformed(value.to_string()))?;
        Ok(PluralRule {
            count: caps[1].to_string(),
            expression: caps[2].to_string(),
        })
    }

    pub fn from_catalog(catalog: &Catalog) -> Result<Self, PluralFormsError> {
        let value = catalog
            .header(PLURAL_FORMS_HEADER)
            .ok_or(PluralFormsError::Missing)?;
        PluralRule::parse(value)
    }
}
