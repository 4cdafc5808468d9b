#![deny(clippy::all)]

/**
 * i19 Compiler
 *
 * Validates translated gettext catalogs and compiles them into JSON
 * message bundles for the client
 */

pub mod diagnostics;
pub mod i18n;
pub mod parse_util;
mod version;

// Re-exports
pub use diagnostics::LogContext;
pub use parse_util::{ParseError, ParseLocation};
pub use version::VERSION;
