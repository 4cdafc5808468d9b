//! Diagnostics Tests
//!
//! Captures the structured warnings emitted while validating and expanding
//! messages.

use i19_compiler::i18n::{resolve_includes, validate_message, IncludeCache, ValidationOptions};
use i19_compiler::LogContext;
use serde_json::Value;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a JSON subscriber and returns the emitted warning events.
fn capture_warnings(f: impl FnOnce()) -> Vec<Value> {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap())
        .filter(|event| event["level"] == "WARN")
        .collect()
}

fn field<'a>(event: &'a Value, name: &str) -> &'a str {
    event["fields"][name].as_str().unwrap_or_default()
}

#[test]
fn should_warn_once_per_discrepancy() {
    let ctx = LogContext::new("fr.po");
    let events = capture_warnings(|| {
        let report = validate_message(
            "${b} {{y}}",
            "${a} {{x}}",
            "greeting",
            ValidationOptions::default(),
            &ctx,
        );
        assert_eq!(report.discrepancies.len(), 4);
    });

    assert_eq!(events.len(), 4);
    assert!(events.iter().all(|e| field(e, "msgid") == "greeting"));
    assert!(events.iter().all(|e| field(e, "source") == "fr.po"));
    let mut tokens: Vec<_> = events.iter().map(|e| field(e, "token")).collect();
    tokens.sort_unstable();
    assert_eq!(tokens, vec!["${a}", "${b}", "{{x}}", "{{y}}"]);
}

#[test]
fn should_stay_silent_for_consistent_translation() {
    let ctx = LogContext::new("fr.po");
    let events = capture_warnings(|| {
        validate_message(
            "Bonjour ${name}",
            "Hello ${name}",
            "hello",
            ValidationOptions::default(),
            &ctx,
        );
    });
    assert!(events.is_empty());
}

#[test]
fn should_warn_on_unknown_include() {
    let ctx = LogContext::new("fr.po");
    let mut cache = IncludeCache::new();
    cache.insert("${known}".into(), "K".into());

    let events = capture_warnings(|| {
        let out = resolve_includes("${known} ${x}", "note", &cache, &ctx);
        assert_eq!(out, "K ${x}");
    });

    assert_eq!(events.len(), 1);
    assert_eq!(field(&events[0], "msgid"), "note");
    assert_eq!(field(&events[0], "token"), "${x}");
}
