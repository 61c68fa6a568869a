//! End-to-end entry point: raw text in, validated and deduplicated vendor
//! records out.

use std::panic::{self, AssertUnwindSafe};

use vendorbook_core::{AppConfig, VendorRecord};

use crate::dedupe::{flag_duplicates, POSSIBLE_DUPLICATE};
use crate::error::ParseError;
use crate::lines::normalize_lines;
use crate::segment::segment_lines;

const INTERNAL_FAULT_MESSAGE: &str = "unexpected fault while reading vendor text";

/// Tunables for a parse run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Unclassified lines must be strictly longer than this to start a record.
    pub min_name_chars: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { min_name_chars: 3 }
    }
}

impl ParserOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            min_name_chars: config.min_name_chars,
        }
    }
}

/// Counts describing a parsed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub with_warnings: usize,
    pub duplicates: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn from_records(records: &[VendorRecord]) -> Self {
        Self {
            total: records.len(),
            with_warnings: records.iter().filter(|r| !r.warnings.is_empty()).count(),
            duplicates: records
                .iter()
                .filter(|r| r.warnings.iter().any(|w| w == POSSIBLE_DUPLICATE))
                .count(),
        }
    }
}

/// Parses pasted vendor text with default options.
///
/// # Errors
///
/// See [`parse_vendors_with`].
pub fn parse_vendors(text: &str) -> Result<Vec<VendorRecord>, ParseError> {
    parse_vendors_with(text, ParserOptions::default())
}

/// Parses pasted vendor text into records in the order their names appear.
///
/// Input that contains text but no vendor yields `Ok(vec![])`.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] when `text` is empty or whitespace, and
/// [`ParseError::Internal`] if a detector faults; no partial batch is
/// returned in that case.
pub fn parse_vendors_with(
    text: &str,
    options: ParserOptions,
) -> Result<Vec<VendorRecord>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let records = guarded(|| run_pipeline(text, options))?;

    let summary = BatchSummary::from_records(&records);
    tracing::info!(
        total = summary.total,
        with_warnings = summary.with_warnings,
        duplicates = summary.duplicates,
        "parsed vendor batch"
    );

    Ok(records)
}

/// Runs `f`, turning a panic into [`ParseError::Internal`] with a fixed
/// message. The panic detail is only logged.
fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, ParseError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_default();
        tracing::warn!(detail = %detail, "vendor parse aborted by internal fault");
        ParseError::Internal(INTERNAL_FAULT_MESSAGE.to_string())
    })
}

fn run_pipeline(text: &str, options: ParserOptions) -> Vec<VendorRecord> {
    let lines = normalize_lines(text);
    let mut records = segment_lines(lines, options.min_name_chars);
    flag_duplicates(&mut records);
    records
}
