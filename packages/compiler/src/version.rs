//! Version Information

/// Crate version, as recorded by cargo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
