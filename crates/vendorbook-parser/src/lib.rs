//! Turns pasted, free-form vendor listings into structured
//! [`vendorbook_core::VendorRecord`]s.
//!
//! The pipeline runs strictly forward: [`lines`] normalizes raw text,
//! [`classify`] runs the field detectors on each line, [`segment`] folds
//! lines into records and validates each one as it is finished, and
//! [`dedupe`] flags repeated names across the batch.

pub mod classify;
pub mod dedupe;
pub mod error;
pub mod lines;
pub mod pipeline;
pub mod segment;
pub mod validate;

pub use classify::{classify_line, Classification, LabeledField};
pub use dedupe::{flag_duplicates, POSSIBLE_DUPLICATE};
pub use error::ParseError;
pub use lines::normalize_lines;
pub use pipeline::{parse_vendors, parse_vendors_with, BatchSummary, ParserOptions};
pub use segment::{segment_lines, LineOutcome, Segmenter};
pub use validate::{
    apply_edit, compute_warnings, validate, MISSING_EMAIL, MISSING_LOCATION, MISSING_PHONE,
    MISSING_WEBSITE,
};
