//! Command handlers for parsing, checking and editing vendor batches.
//!
//! Handlers read text from a file or stdin, call into `vendorbook_parser`,
//! and write results to stdout. Logs go to stderr.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use vendorbook_core::{AppConfig, ImportBatch, VendorCategory, VendorField, VendorRecord};
use vendorbook_parser::{apply_edit, parse_vendors_with, BatchSummary, ParseError, ParserOptions};

/// Read the whole input from `path`, or from stdin when `path` is `None`.
fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Runs the parser and maps its errors to the messages shown to operators.
pub(crate) fn parse_text(text: &str, options: ParserOptions) -> anyhow::Result<Vec<VendorRecord>> {
    match parse_vendors_with(text, options) {
        Ok(records) => Ok(records),
        Err(ParseError::EmptyInput) => {
            anyhow::bail!("nothing found: the input contained no vendor text")
        }
        Err(ParseError::Internal(_)) => {
            anyhow::bail!("could not parse the vendor text; check the input format and try again")
        }
    }
}

fn render_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

/// Builds the batch handed to the import endpoint.
pub(crate) fn build_batch(
    config: &AppConfig,
    category: Option<VendorCategory>,
    vendors: Vec<VendorRecord>,
) -> ImportBatch {
    ImportBatch::new(category.or(config.default_category), Utc::now(), vendors)
}

/// One line per vendor, then a summary line.
pub(crate) fn check_report(records: &[VendorRecord]) -> String {
    let mut lines: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            if record.warnings.is_empty() {
                format!("{}. {}: ok", idx + 1, record.name)
            } else {
                format!("{}. {}: {}", idx + 1, record.name, record.warnings.join("; "))
            }
        })
        .collect();

    let summary = BatchSummary::from_records(records);
    lines.push(format!(
        "{} vendors, {} with warnings, {} possible duplicates",
        summary.total, summary.with_warnings, summary.duplicates
    ));
    lines.join("\n")
}

/// Parse listing text and print the import batch.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is empty, or the parser
/// faults.
pub(crate) fn run_parse(
    config: &AppConfig,
    input: Option<&Path>,
    category: Option<VendorCategory>,
    compact: bool,
) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let vendors = parse_text(&text, ParserOptions::from_app_config(config))?;

    if vendors.is_empty() {
        tracing::warn!("input contained text but no vendor names");
    }

    let batch = build_batch(config, category, vendors);
    println!("{}", render_json(&batch, config.pretty_json && !compact)?);
    Ok(())
}

/// Parse listing text and print each vendor's warnings.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is empty, or the parser
/// faults.
pub(crate) fn run_check(config: &AppConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let vendors = parse_text(&text, ParserOptions::from_app_config(config))?;
    println!("{}", check_report(&vendors));
    Ok(())
}

/// Apply a single-field edit to one vendor of an existing batch and print the
/// updated batch. Only the edited vendor is re-validated.
///
/// # Errors
///
/// Returns an error if the batch cannot be read or decoded, `index` is out of
/// range, or the edit would blank the vendor's name.
pub(crate) fn run_edit(
    config: &AppConfig,
    input: Option<&Path>,
    index: usize,
    field: VendorField,
    value: Option<String>,
    compact: bool,
) -> anyhow::Result<()> {
    let raw = read_input(input)?;
    let mut batch: ImportBatch =
        serde_json::from_str(&raw).context("input is not a vendor batch")?;
    edit_batch(&mut batch, index, field, value)?;
    println!("{}", render_json(&batch, config.pretty_json && !compact)?);
    Ok(())
}

pub(crate) fn edit_batch(
    batch: &mut ImportBatch,
    index: usize,
    field: VendorField,
    value: Option<String>,
) -> anyhow::Result<()> {
    let total = batch.len();
    let record = batch
        .vendors
        .get_mut(index)
        .ok_or_else(|| anyhow::anyhow!("vendor index {index} out of range ({total} vendors)"))?;

    apply_edit(record, field, value)
        .with_context(|| format!("cannot edit {field} of vendor {index}"))?;
    tracing::debug!(index, %field, "edited vendor");
    Ok(())
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
