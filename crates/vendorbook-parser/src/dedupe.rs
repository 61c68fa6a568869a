//! Duplicate flagging across a parsed batch.

use std::collections::HashSet;

use vendorbook_core::VendorRecord;

pub const POSSIBLE_DUPLICATE: &str = "Possible duplicate";

/// Appends [`POSSIBLE_DUPLICATE`] to every record whose normalized name was
/// already seen earlier in `records`. First occurrences are left alone.
///
/// Returns the number of records flagged.
pub fn flag_duplicates(records: &mut [VendorRecord]) -> usize {
    let mut seen = HashSet::new();
    let mut flagged = 0;

    for record in records {
        if !seen.insert(record.normalized_key()) {
            tracing::debug!(name = %record.name, "possible duplicate vendor");
            record.warnings.push(POSSIBLE_DUPLICATE.to_string());
            flagged += 1;
        }
    }

    flagged
}
