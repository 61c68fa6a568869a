//! Record segmentation: folds classified lines into vendor records.
//!
//! A single accumulator collects facts until an unclassified, name-like line
//! arrives; if the accumulator already has a name, it is finalized (validated
//! and emitted) and a new record starts with that line as its name.

use vendorbook_core::{VendorField, VendorRecord};

use crate::classify::{classify_line, detect_email, detect_phone, Classification};
use crate::validate::validate;

/// What the segmenter did with one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Stored into a field of the current record.
    Stored(VendorField),
    /// Became the name of the current record.
    Named,
    /// Finalized the current record and started a new one.
    Boundary,
    /// Matched nothing usable, or every matching field was already taken.
    Dropped,
}

/// Single-pass state machine over normalized lines.
#[derive(Debug)]
pub struct Segmenter {
    min_name_chars: usize,
    current: VendorRecord,
    finished: Vec<VendorRecord>,
}

impl Segmenter {
    /// `min_name_chars` is exclusive: a name candidate must have more
    /// characters than this.
    #[must_use]
    pub fn new(min_name_chars: usize) -> Self {
        Self {
            min_name_chars,
            current: VendorRecord::default(),
            finished: Vec::new(),
        }
    }

    /// Classifies `line` and applies it to the current record.
    pub fn push_line(&mut self, line: &str) -> LineOutcome {
        let classification = classify_line(line);
        let outcome = self.apply(&classification);
        if outcome == LineOutcome::Dropped {
            tracing::trace!(line, "dropped line");
        }
        outcome
    }

    fn apply(&mut self, c: &Classification<'_>) -> LineOutcome {
        let record = &mut self.current;

        // A taken or empty label falls through to the other detectors.
        if let Some(labeled) = &c.labeled {
            let field = labeled.field.field();
            if !labeled.value.is_empty() && record.set_once(field, labeled.value) {
                return LineOutcome::Stored(field);
            }
        }

        if let Some(address) = &c.address {
            if !record.is_set(VendorField::Address) {
                record.set_once(VendorField::Address, c.line);
                if let Some(city) = address.city {
                    record.set_once(VendorField::City, city);
                }
                if let Some(state) = address.state {
                    record.set_once(VendorField::State, state);
                }
                return LineOutcome::Stored(VendorField::Address);
            }
        }

        if c.has_contact() && !record.is_set(VendorField::Contact) {
            // Captures are taken from the collapsed line so they match `contact`.
            let contact = collapse_whitespace(c.line);
            if let Some(email) = detect_email(&contact) {
                record.set_once(VendorField::Email, email);
            }
            if let Some(phone) = detect_phone(&contact) {
                record.set_once(VendorField::Phone, phone);
            }
            record.set_once(VendorField::Contact, contact);
            return LineOutcome::Stored(VendorField::Contact);
        }

        if let Some(website) = &c.website {
            if record.set_once(VendorField::Website, website.as_str()) {
                return LineOutcome::Stored(VendorField::Website);
            }
        }

        if !c.is_unclassified() || c.line.chars().count() <= self.min_name_chars {
            return LineOutcome::Dropped;
        }

        if !record.has_name() {
            record.name = c.line.trim().to_string();
            return LineOutcome::Named;
        }

        let next = VendorRecord::named(c.line.trim());
        self.finalize(next);
        LineOutcome::Boundary
    }

    /// Validates the current record, appends it, and installs `next`.
    fn finalize(&mut self, next: VendorRecord) {
        let mut done = std::mem::replace(&mut self.current, next);
        validate(&mut done);
        tracing::debug!(
            name = %done.name,
            warnings = done.warnings.len(),
            "finalized vendor record"
        );
        self.finished.push(done);
    }

    /// Flushes the accumulator and returns every finalized record in input
    /// order. A trailing accumulator without a name is discarded.
    #[must_use]
    pub fn finish(mut self) -> Vec<VendorRecord> {
        if self.current.has_name() {
            self.finalize(VendorRecord::default());
        }
        self.finished
    }
}

/// Segments a sequence of normalized lines into validated records.
#[must_use]
pub fn segment_lines<'a, I>(lines: I, min_name_chars: usize) -> Vec<VendorRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut segmenter = Segmenter::new(min_name_chars);
    for line in lines {
        segmenter.push_line(line);
    }
    segmenter.finish()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "segment_test.rs"]
mod tests;
