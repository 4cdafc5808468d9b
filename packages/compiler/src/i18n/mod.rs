//! I18n Module
//!
//! Compiles gettext catalogs into client-side JSON message bundles

pub mod cache;
pub mod catalog;
pub mod includes;
pub mod json_bundle;
pub mod placeholder;
pub mod plural_forms;
pub mod po_parser;
pub mod transformer;
pub mod validator;

// Re-export commonly used items
pub use cache::{CacheError, ConversionCache, OriginalString, OriginalStrings};
pub use catalog::{Catalog, MessageEntry, MessageId};
pub use includes::{resolve_includes, IncludeCache};
pub use json_bundle::LocaleBundle;
pub use placeholder::{
    find_placeholders, find_references, find_variables, Placeholder, PlaceholderKind,
};
pub use plural_forms::{PluralFormsError, PluralRule};
pub use po_parser::parse_po;
pub use transformer::{
    CatalogTransformer, ConversionResult, ConversionSummary, ConvertError, MessageValue, Messages,
    RunStats, PLURALIZATION_COUNT_KEY, PLURALIZATION_EXPR_KEY,
};
pub use validator::{validate_message, Discrepancy, ValidationOptions, ValidationReport};
