//! Parse Utilities
//!
//! Source locations and the error type shared by the catalog readers.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocation {
    pub url: String,
    /// 1-based line number, 0 when the reader gives none
    pub line: usize,
    /// 1-based column number, 0 when the reader gives none
    pub col: usize,
}

impl ParseLocation {
    pub fn new(url: impl Into<String>, line: usize, col: usize) -> Self {
        ParseLocation {
            url: url.into(),
            line,
            col,
        }
    }

    /// A location naming only the file.
    pub fn file(url: impl Into<String>) -> Self {
        ParseLocation::new(url, 0, 0)
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.url)
        } else {
            write!(f, "{}@{}:{}", self.url, self.line, self.col)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg}: {location}")]
pub struct ParseError {
    pub location: ParseLocation,
    pub msg: String,
}

impl ParseError {
    pub fn new(location: ParseLocation, msg: impl Into<String>) -> Self {
        ParseError {
            location,
            msg: msg.into(),
        }
    }
}
