//! Compile JSON
//!
//! Compiles a translated gettext catalog into the JSON bundle loaded by the
//! client.

use anyhow::{Context, Result};
use i19_compiler::i18n::{
    parse_po, CatalogTransformer, ConversionCache, ConversionSummary, LocaleBundle,
};
use i19_compiler::LogContext;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Options for JSON compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I19JsonOptions {
    /// Translated `.po` catalog.
    pub source: PathBuf,
    /// Locale the output is keyed by.
    pub locale: String,
    /// Cache written by the extraction step.
    pub cache: PathBuf,
    /// JSON file to write.
    pub output: PathBuf,
}

/// Runs a full conversion and writes the output file.
///
/// Nothing is written unless the whole catalog converts.
pub fn compile_json(options: &I19JsonOptions) -> Result<ConversionSummary> {
    let source_name = options.source.display().to_string();
    let ctx = LogContext::new(source_name.clone());

    let content = fs::read_to_string(&options.source)
        .with_context(|| format!("cannot read catalog {}", source_name))?;
    let catalog = parse_po(&content, &source_name)?;
    tracing::debug!(entries = catalog.entries.len(), "Parsed catalog");

    let cache = ConversionCache::load(&options.cache)?;

    let result = CatalogTransformer::new(&cache, &ctx).convert_catalog(&catalog)?;
    let summary = result.summary(options.output.display().to_string());

    let bundle = LocaleBundle::new(options.locale.clone(), result.messages);
    write_bundle(&bundle, &options.output)?;

    tracing::info!("{}", summary);
    Ok(summary)
}

fn write_bundle(bundle: &LocaleBundle, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create output {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    bundle
        .write_json(&mut writer)
        .with_context(|| format!("cannot write output {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

/// Main entry point for the i19json command. Returns the process exit code.
pub fn main_i19json(options: &I19JsonOptions) -> i32 {
    let span = tracing::info_span!("i19json", source = %options.source.display());
    let _guard = span.enter();

    match compile_json(options) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    }
}
