//! Catalog Module
//!
//! In-memory form of a gettext catalog for a single locale.

use indexmap::IndexMap;

/// Identifier of a catalog message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageId {
    Singular(String),
    Plural { singular: String, plural: String },
}

impl MessageId {
    /// The key used for lookups and output; the singular id for plurals.
    pub fn key(&self) -> &str {
        match self {
            MessageId::Singular(id) => id,
            MessageId::Plural { singular, .. } => singular,
        }
    }
}

/// One translatable message. The header pseudo-entry never appears here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub id: MessageId,
    pub context: Option<String>,
    /// One string for singular messages, one per plural form otherwise.
    pub strings: Vec<String>,
    /// `#,` flags such as `fuzzy`.
    pub flags: Vec<String>,
    /// Line of the entry's `msgid` in the source file.
    pub line: usize,
}

impl MessageEntry {
    pub fn singular(id: impl Into<String>, string: impl Into<String>) -> Self {
        MessageEntry {
            id: MessageId::Singular(id.into()),
            context: None,
            strings: vec![string.into()],
            flags: Vec::new(),
            line: 0,
        }
    }

    pub fn plural(
        singular: impl Into<String>,
        plural: impl Into<String>,
        strings: Vec<String>,
    ) -> Self {
        MessageEntry {
            id: MessageId::Plural {
                singular: singular.into(),
                plural: plural.into(),
            },
            context: None,
            strings,
            flags: Vec::new(),
            line: 0,
        }
    }

    pub fn is_pluralizable(&self) -> bool {
        matches!(self.id, MessageId::Plural { .. })
    }

    pub fn is_fuzzy(&self) -> bool {
        self.flags.iter().any(|f| f == "fuzzy")
    }
}

/// A parsed catalog: decoded header fields plus the message entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub headers: IndexMap<String, String>,
    pub entries: Vec<MessageEntry>,
}

impl Catalog {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }
}
