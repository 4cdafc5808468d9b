//! Conversion Cache
//!
//! Loads the state persisted by the extraction step: the include cache and
//! the canonical source string of every message.
//!
//! The blob is a JSON pair:
//! `[ {"${token}": "expansion", ...}, {"msgid": [<origin>, "source"], ...} ]`

use crate::i18n::includes::IncludeCache;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cannot read cache {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed cache: {0}")]
    Format(#[from] serde_json::Error),
}

/// Canonical source of one message. Decoded from `[origin, source, ...]`;
/// elements after the source are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<serde_json::Value>")]
pub struct OriginalString {
    /// Where the extractor found the message; not used here.
    pub origin: serde_json::Value,
    pub source: String,
}

impl TryFrom<Vec<serde_json::Value>> for OriginalString {
    type Error = String;

    fn try_from(record: Vec<serde_json::Value>) -> Result<Self, Self::Error> {
        let mut fields = record.into_iter();
        match (fields.next(), fields.next()) {
            (Some(origin), Some(serde_json::Value::String(source))) => {
                Ok(OriginalString { origin, source })
            }
            (Some(_), Some(other)) => Err(format!("source string expected, found {}", other)),
            _ => Err("original string record needs an origin and a source".to_string()),
        }
    }
}

/// Message id to its canonical source string.
pub type OriginalStrings = HashMap<String, OriginalString>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConversionCache {
    pub includes: IncludeCache,
    pub originals: OriginalStrings,
}

impl ConversionCache {
    pub fn new(includes: IncludeCache, originals: OriginalStrings) -> Self {
        ConversionCache {
            includes,
            originals,
        }
    }

    pub fn from_json(content: &str) -> Result<Self, CacheError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, CacheError> {
        let content = fs::read_to_string(path).map_err(|source| CacheError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cache = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            includes = cache.includes.len(),
            originals = cache.originals.len(),
            "Loaded conversion cache"
        );
        Ok(cache)
    }

    /// Canonical source string for `msgid`.
    pub fn source_for(&self, msgid: &str) -> Option<&str> {
        self.originals.get(msgid).map(|o| o.source.as_str())
    }
}
