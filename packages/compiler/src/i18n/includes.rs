//! Include Resolver
//!
//! Expands `${...}` reference tokens with the precomputed text stored in
//! the include cache.

use crate::diagnostics::LogContext;
use crate::i18n::placeholder::replace_references;
use std::collections::HashMap;

/// Maps a reference token literal (delimiters included) to its expansion.
pub type IncludeCache = HashMap<String, String>;

/// Replaces every known reference token in `message` with its cached text.
///
/// Unknown tokens are left in place and reported as a warning tagged with
/// `msgid`. Expansions are inserted literally and never scanned again.
pub fn resolve_includes(
    message: &str,
    msgid: &str,
    cache: &IncludeCache,
    ctx: &LogContext,
) -> String {
    replace_references(message, |token| match cache.get(token) {
        Some(expansion) => expansion.clone(),
        None => {
            tracing::warn!(source = %ctx.source, msgid, token, "Invalid include identifier");
            token.to_string()
        }
    })
}
