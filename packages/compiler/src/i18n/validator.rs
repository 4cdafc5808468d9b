//! Consistency Validator
//!
//! Checks that a translation keeps exactly the placeholders of its source
//! string: nothing missing, nothing introduced.

use crate::diagnostics::LogContext;
use crate::i18n::placeholder::{find_references, find_variables, PlaceholderKind};
use std::fmt;

/// A single placeholder mismatch between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    MissingReference(String),
    MissingVariable(String),
    IntroducedReference(String),
    IntroducedVariable(String),
}

impl Discrepancy {
    pub fn kind(&self) -> PlaceholderKind {
        match self {
            Discrepancy::MissingReference(_) | Discrepancy::IntroducedReference(_) => {
                PlaceholderKind::Reference
            }
            Discrepancy::MissingVariable(_) | Discrepancy::IntroducedVariable(_) => {
                PlaceholderKind::Variable
            }
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Discrepancy::MissingReference(t)
            | Discrepancy::MissingVariable(t)
            | Discrepancy::IntroducedReference(t)
            | Discrepancy::IntroducedVariable(t) => t,
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::MissingReference(t) => write!(f, "Translation misses reference {}", t),
            Discrepancy::MissingVariable(t) => write!(f, "Translation misses variable {}", t),
            Discrepancy::IntroducedReference(t) => {
                write!(f, "Translation introduces reference {}", t)
            }
            Discrepancy::IntroducedVariable(t) => {
                write!(f, "Translation introduces variable {}", t)
            }
        }
    }
}

/// Outcome of validating one translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub discrepancies: Vec<Discrepancy>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

/// Options for `validate_message`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Do not require source variables to appear in the translation.
    /// Set for plural forms after the first one.
    pub skip_missing_variables: bool,
}

/// Compares the placeholders of `translation` against `original`.
///
/// Every check runs and every discrepancy is logged, even after the first
/// failure.
pub fn validate_message(
    translation: &str,
    original: &str,
    msgid: &str,
    options: ValidationOptions,
    ctx: &LogContext,
) -> ValidationReport {
    let original_refs = find_references(original);
    let original_vars = find_variables(original);
    let translated_refs = find_references(translation);
    let translated_vars = find_variables(translation);

    let mut report = ValidationReport::default();

    collect_missing(&original_refs, &translated_refs, &mut report, |t| {
        Discrepancy::MissingReference(t.to_string())
    });
    if !options.skip_missing_variables {
        collect_missing(&original_vars, &translated_vars, &mut report, |t| {
            Discrepancy::MissingVariable(t.to_string())
        });
    }
    collect_missing(&translated_refs, &original_refs, &mut report, |t| {
        Discrepancy::IntroducedReference(t.to_string())
    });
    collect_missing(&translated_vars, &original_vars, &mut report, |t| {
        Discrepancy::IntroducedVariable(t.to_string())
    });

    for discrepancy in &report.discrepancies {
        tracing::warn!(
            source = %ctx.source,
            msgid,
            token = discrepancy.token(),
            kind = discrepancy.kind().name(),
            "{}",
            discrepancy
        );
    }

    report
}

/// Records every token of `expected` absent from `actual`. Duplicates in
/// `expected` are reported once per occurrence.
fn collect_missing<F>(expected: &[&str], actual: &[&str], report: &mut ValidationReport, make: F)
where
    F: Fn(&str) -> Discrepancy,
{
    for token in expected {
        if !actual.contains(token) {
            report.discrepancies.push(make(*token));
        }
    }
}
