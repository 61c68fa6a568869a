//! Field detectors for a single normalized line.
//!
//! Each detector runs independently and the result records every match; the
//! segmenter decides which one wins. Patterns are compiled once and shared.

use std::sync::LazyLock;

use regex::Regex;
use vendorbook_core::VendorField;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\(\d{3}\)|\b\d{3})\s*[-.]?\s*\d{3}\s*[-.]?\s*\d{4}\b")
        .expect("valid phone regex")
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});
static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:https?://)?(?:www\.)?((?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+(?:com|net|org|biz|info|co|us|io|events|wedding))\b",
    )
    .expect("valid website regex")
});
static STREET_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2,}\s+[A-Za-z]").expect("valid street number regex"));
static STREET_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:street|st|avenue|ave|road|rd|drive|dr|lane|ln|boulevard|blvd|court|ct|way|place|pl)\b",
    )
    .expect("valid street suffix regex")
});
static CITY_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|,)\s*([A-Za-z][A-Za-z .'-]*?)\s*,\s*([A-Z]{2})\s+\d{5}(?:-\d{4})?\b")
        .expect("valid city/state regex")
});

/// Label patterns in match order. The first hit wins for a given line.
static LABEL_PATTERNS: LazyLock<Vec<(LabeledField, Regex)>> = LazyLock::new(|| {
    [
        (LabeledField::Specialties, r"specializes?\s+in"),
        (LabeledField::Packages, r"packages?"),
        (LabeledField::ServiceArea, r"service\s+area"),
        (LabeledField::SocialMedia, r"social\s+media"),
        (LabeledField::Hours, r"hours?"),
        (LabeledField::Certifications, r"certifications?|licensed"),
        (LabeledField::Capacity, r"capacity"),
        (LabeledField::Amenities, r"amenities"),
        (LabeledField::Equipment, r"equipment"),
        (LabeledField::Menu, r"menu\s+options?"),
    ]
    .into_iter()
    .map(|(field, label)| {
        let re = Regex::new(&format!(r"(?i)^(?:{label})\s*:\s*(.*)$")).expect("valid label regex");
        (field, re)
    })
    .collect()
});

/// Category-specific free-text fields introduced by a `Label:` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabeledField {
    Specialties,
    Packages,
    ServiceArea,
    SocialMedia,
    Hours,
    Certifications,
    Capacity,
    Amenities,
    Equipment,
    Menu,
}

impl LabeledField {
    /// The record field this label writes to.
    #[must_use]
    pub fn field(self) -> VendorField {
        match self {
            LabeledField::Specialties => VendorField::Specialties,
            LabeledField::Packages => VendorField::Packages,
            LabeledField::ServiceArea => VendorField::ServiceArea,
            LabeledField::SocialMedia => VendorField::SocialMedia,
            LabeledField::Hours => VendorField::Hours,
            LabeledField::Certifications => VendorField::Certifications,
            LabeledField::Capacity => VendorField::Capacity,
            LabeledField::Amenities => VendorField::Amenities,
            LabeledField::Equipment => VendorField::Equipment,
            LabeledField::Menu => VendorField::Menu,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledMatch<'a> {
    pub field: LabeledField,
    /// Trimmed remainder after the colon. May be empty.
    pub value: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressMatch<'a> {
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
}

/// Everything the detectors found in one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub line: &'a str,
    pub labeled: Option<LabeledMatch<'a>>,
    pub address: Option<AddressMatch<'a>>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    /// Bare, lower-cased domain.
    pub website: Option<String>,
}

impl Classification<'_> {
    /// `true` when no detector matched.
    #[must_use]
    pub fn is_unclassified(&self) -> bool {
        self.labeled.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.website.is_none()
    }

    #[must_use]
    pub fn has_contact(&self) -> bool {
        self.phone.is_some() || self.email.is_some()
    }
}

/// Runs every detector over `line`.
#[must_use]
pub fn classify_line(line: &str) -> Classification<'_> {
    Classification {
        line,
        labeled: detect_label(line),
        address: detect_address(line),
        phone: detect_phone(line),
        email: detect_email(line),
        website: detect_website(line),
    }
}

#[must_use]
pub fn detect_label(line: &str) -> Option<LabeledMatch<'_>> {
    LABEL_PATTERNS.iter().find_map(|(field, re)| {
        let caps = re.captures(line)?;
        let value = caps.get(1).map_or("", |m| m.as_str().trim());
        Some(LabeledMatch {
            field: *field,
            value,
        })
    })
}

#[must_use]
pub fn detect_phone(line: &str) -> Option<&str> {
    PHONE_RE.find(line).map(|m| m.as_str())
}

#[must_use]
pub fn detect_email(line: &str) -> Option<&str> {
    EMAIL_RE.find(line).map(|m| m.as_str())
}

/// Returns the bare domain, without scheme or `www.`.
///
/// Lines containing `@` never match, so an email's domain is not read as a
/// website.
#[must_use]
pub fn detect_website(line: &str) -> Option<String> {
    if line.contains('@') {
        return None;
    }
    WEBSITE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Matches a leading street number or a street-suffix keyword, then pulls a
/// `City, ST ZIP` tail out of the line when one is present.
///
/// Email addresses and web addresses are ignored for the suffix test so that
/// `info@acme-way.com` does not read as an address.
#[must_use]
pub fn detect_address(line: &str) -> Option<AddressMatch<'_>> {
    let has_street_number = STREET_NUMBER_RE.is_match(line);
    let has_suffix = || {
        line.split_whitespace()
            .filter(|token| !token.contains('@') && !WEBSITE_RE.is_match(token))
            .any(|token| STREET_SUFFIX_RE.is_match(token))
    };

    if !has_street_number && !has_suffix() {
        return None;
    }

    let Some(caps) = CITY_STATE_RE.captures(line) else {
        return Some(AddressMatch::default());
    };
    Some(AddressMatch {
        city: caps.get(1).map(|m| m.as_str().trim()),
        state: caps.get(2).map(|m| m.as_str()),
    })
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
