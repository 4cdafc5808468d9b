//! JSON Bundle
//!
//! Serializes converted messages as `{ "<locale>": { ...messages } }`.

use crate::i18n::transformer::Messages;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::Write;

/// Messages of a single locale, keyed by that locale when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleBundle {
    pub locale: String,
    pub messages: Messages,
}

impl LocaleBundle {
    pub fn new(locale: impl Into<String>, messages: Messages) -> Self {
        LocaleBundle {
            locale: locale.into(),
            messages,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer(writer, self)
    }
}

impl Serialize for LocaleBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.locale, &self.messages)?;
        map.end()
    }
}
