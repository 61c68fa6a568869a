//! Advisory warnings for finished vendor records.

use vendorbook_core::{CoreError, VendorField, VendorRecord};

pub const MISSING_EMAIL: &str = "Missing email address";
pub const MISSING_PHONE: &str = "Missing phone number";
pub const MISSING_LOCATION: &str = "Missing location information";
pub const MISSING_WEBSITE: &str = "No website provided";

/// Computes the warnings for `record` from its current fields.
#[must_use]
pub fn compute_warnings(record: &VendorRecord) -> Vec<String> {
    let contact = record.contact.as_deref().unwrap_or("");
    let mut warnings = Vec::new();

    if record.email.is_none() && !contact.contains('@') {
        warnings.push(MISSING_EMAIL.to_string());
    }
    if record.phone.is_none() && !has_digit_run(contact, 3) {
        warnings.push(MISSING_PHONE.to_string());
    }
    if record.city.is_none() && record.address.is_none() {
        warnings.push(MISSING_LOCATION.to_string());
    }
    if record.website.is_none() {
        warnings.push(MISSING_WEBSITE.to_string());
    }

    warnings
}

/// Replaces `record.warnings` with a freshly computed list. No other field is
/// touched, so this can be re-run any number of times.
pub fn validate(record: &mut VendorRecord) {
    record.warnings = compute_warnings(record);
}

/// Applies a single-field edit and re-validates that record only.
///
/// # Errors
///
/// Returns [`CoreError::EmptyName`] when the edit would blank the name; the
/// record is left unchanged in that case.
pub fn apply_edit(
    record: &mut VendorRecord,
    field: VendorField,
    value: Option<String>,
) -> Result<(), CoreError> {
    record.set_field(field, value)?;
    validate(record);
    Ok(())
}

fn has_digit_run(s: &str, len: usize) -> bool {
    s.as_bytes()
        .windows(len)
        .any(|w| w.iter().all(u8::is_ascii_digit))
}
