//! Placeholder Module
//!
//! Recognizes the two placeholder syntaxes embedded in message strings:
//! - references `${name.path}`, expanded from the include cache
//! - variables `{{name()}}`, interpolated by the client at runtime

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `${...}` reference tokens
static REFERENCE_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{[A-Za-z0-9_\-.]*\}").unwrap());

/// Matches `{{...}}` variable tokens
static VARIABLE_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{[A-Za-z0-9_\-()]*\}\}").unwrap());

/// Matches either syntax, references first
static PLACEHOLDER_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<reference>\$\{[A-Za-z0-9_\-.]*\})|(?P<variable>\{\{[A-Za-z0-9_\-()]*\}\})")
        .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `${...}`
    Reference,
    /// `{{...}}`
    Variable,
}

impl PlaceholderKind {
    pub fn name(&self) -> &'static str {
        match self {
            PlaceholderKind::Reference => "reference",
            PlaceholderKind::Variable => "variable",
        }
    }
}

/// A placeholder token found in a message string.
///
/// `text` is the literal token including its delimiters; tokens are
/// compared literally, never by their inner name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub text: String,
}

/// All reference tokens in `text`, in order of appearance, duplicates kept.
pub fn find_references(text: &str) -> Vec<&str> {
    REFERENCE_REGEXP.find_iter(text).map(|m| m.as_str()).collect()
}

/// All variable tokens in `text`, in order of appearance, duplicates kept.
pub fn find_variables(text: &str) -> Vec<&str> {
    VARIABLE_REGEXP.find_iter(text).map(|m| m.as_str()).collect()
}

/// Rewrites every reference token in `text` in a single pass.
///
/// `replace` receives the literal token; text it returns is not rescanned.
pub fn replace_references<F>(text: &str, mut replace: F) -> String
where
    F: FnMut(&str) -> String,
{
    REFERENCE_REGEXP
        .replace_all(text, |caps: &regex::Captures| replace(&caps[0]))
        .into_owned()
}

/// All tokens of both kinds, non-overlapping, in order of appearance.
pub fn find_placeholders(text: &str) -> Vec<Placeholder> {
    PLACEHOLDER_REGEXP
        .captures_iter(text)
        .filter_map(|caps| {
            if let Some(m) = caps.name("reference") {
                Some(Placeholder {
                    kind: PlaceholderKind::Reference,
                    text: m.as_str().to_string(),
                })
            } else {
                caps.name("variable").map(|m| Placeholder {
                    kind: PlaceholderKind::Variable,
                    text: m.as_str().to_string(),
                })
            }
        })
        .collect()
}
