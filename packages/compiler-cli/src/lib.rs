#![deny(clippy::all)]

/**
 * i19 Compiler CLI
 *
 * Command line tools built on the i19 compiler
 */
// Re-export compiler for convenience
pub use i19_compiler as compiler;

// CLI-specific modules
pub mod compile_json;
pub mod logging;

pub use compile_json::{compile_json, main_i19json, I19JsonOptions};

