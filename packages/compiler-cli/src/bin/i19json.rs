/**
 * i19 Compiler CLI - i19json
 *
 * Compile a translated gettext catalog into a JSON message bundle
 */
use clap::{Arg, Command};
use i19_compiler_cli::{compiler, logging, main_i19json, I19JsonOptions};
use std::path::PathBuf;
use std::process;

fn main() {
    let matches = Command::new("i19json")
        .version(compiler::VERSION)
        .about("Compile a gettext PO catalog into a JSON message bundle")
        .arg(
            Arg::new("source")
                .value_name("SOURCE")
                .required(true)
                .help("Translated PO file"),
        )
        .arg(
            Arg::new("locale")
                .value_name("LOCALE")
                .required(true)
                .help("Locale identifier"),
        )
        .arg(
            Arg::new("cache")
                .value_name("CACHE")
                .required(true)
                .help("Cache file created by the extractor"),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .required(true)
                .help("JSON file to write"),
        )
        .get_matches();

    logging::init_tracing();

    let arg = |name: &str| {
        matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or_default()
    };
    let options = I19JsonOptions {
        source: PathBuf::from(arg("source")),
        locale: arg("locale"),
        cache: PathBuf::from(arg("cache")),
        output: PathBuf::from(arg("output")),
    };

    process::exit(main_i19json(&options));
}
