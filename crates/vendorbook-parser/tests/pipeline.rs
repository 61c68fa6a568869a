//! End-to-end tests for `parse_vendors` over realistic pasted listings.

use vendorbook_core::{VendorField, VendorRecord};
use vendorbook_parser::{
    apply_edit, parse_vendors, ParseError, MISSING_EMAIL, MISSING_LOCATION, MISSING_PHONE,
    MISSING_WEBSITE, POSSIBLE_DUPLICATE,
};

const SUNSET_GARDENS: &str = "\
Sunset Gardens Venue
456 Oak Avenue, Huntsville, AL 35801
(256) 555-9876 • info@sunsetgardens.com
www.sunsetgardens.com
Specializes in: Outdoor ceremonies
Capacity: 200 guests
Service Area: North Alabama
";

const TWO_VENDORS: &str = "\
# Photographers pulled from the March sheet
1. Lens And Light Studio
789 Magnolia Drive, Madison, AL 35758
256-555-1212
Packages: Elopement, Full Day
Social Media: @lensandlight

2. Bloom Florals
info@bloomflorals.net
https://www.bloomflorals.net
Hours: Tue-Sat 10-6
";

fn warning_set(record: &VendorRecord) -> Vec<&str> {
    let mut warnings: Vec<&str> = record.warnings.iter().map(String::as_str).collect();
    warnings.sort_unstable();
    warnings
}

#[test]
fn single_vendor_is_complete() {
    let records = parse_vendors(SUNSET_GARDENS).unwrap();
    assert_eq!(records.len(), 1);

    let r = &records[0];
    assert_eq!(r.name, "Sunset Gardens Venue");
    assert_eq!(r.address.as_deref(), Some("456 Oak Avenue, Huntsville, AL 35801"));
    assert_eq!(r.city.as_deref(), Some("Huntsville"));
    assert_eq!(r.state.as_deref(), Some("AL"));
    assert_eq!(
        r.contact.as_deref(),
        Some("(256) 555-9876 • info@sunsetgardens.com")
    );
    assert_eq!(r.email.as_deref(), Some("info@sunsetgardens.com"));
    assert_eq!(r.phone.as_deref(), Some("(256) 555-9876"));
    assert_eq!(r.website.as_deref(), Some("sunsetgardens.com"));
    assert_eq!(r.specialties.as_deref(), Some("Outdoor ceremonies"));
    assert_eq!(r.capacity.as_deref(), Some("200 guests"));
    assert_eq!(r.service_area.as_deref(), Some("North Alabama"));
    assert!(r.warnings.is_empty(), "unexpected warnings: {:?}", r.warnings);
}

#[test]
fn standalone_name_gets_every_warning() {
    let records = parse_vendors("Just A Standalone Name Entry").unwrap();
    assert_eq!(records.len(), 1);

    let mut expected = vec![MISSING_EMAIL, MISSING_PHONE, MISSING_LOCATION, MISSING_WEBSITE];
    expected.sort_unstable();
    assert_eq!(warning_set(&records[0]), expected);
}

#[test]
fn two_blocks_segment_in_order_without_leaks() {
    let records = parse_vendors(TWO_VENDORS).unwrap();
    assert_eq!(records.len(), 2);

    let lens = &records[0];
    assert_eq!(lens.name, "Lens And Light Studio");
    assert_eq!(lens.city.as_deref(), Some("Madison"));
    assert_eq!(lens.phone.as_deref(), Some("256-555-1212"));
    assert_eq!(lens.packages.as_deref(), Some("Elopement, Full Day"));
    assert_eq!(lens.social_media.as_deref(), Some("@lensandlight"));
    assert!(lens.email.is_none());
    assert!(lens.website.is_none());
    assert!(lens.hours.is_none());

    let bloom = &records[1];
    assert_eq!(bloom.name, "Bloom Florals");
    assert_eq!(bloom.email.as_deref(), Some("info@bloomflorals.net"));
    assert_eq!(bloom.website.as_deref(), Some("bloomflorals.net"));
    assert_eq!(bloom.hours.as_deref(), Some("Tue-Sat 10-6"));
    assert!(bloom.address.is_none());
    assert!(bloom.phone.is_none());
    assert!(bloom.packages.is_none());
}

#[test]
fn only_later_duplicate_is_flagged() {
    let text = "A B C Studio\nwww.abc.com\nBloom Florals\nabc   STUDIO\n";
    let records = parse_vendors(text).unwrap();
    assert_eq!(records.len(), 3);

    let flagged: Vec<bool> = records
        .iter()
        .map(|r| r.warnings.iter().any(|w| w == POSSIBLE_DUPLICATE))
        .collect();
    assert_eq!(flagged, vec![false, false, true]);
}

#[test]
fn comment_and_bare_ordinal_are_noise() {
    let with_noise = parse_vendors("Acme Venue\n#comment\n3.\nwww.acme.com\n").unwrap();
    let without_noise = parse_vendors("Acme Venue\nwww.acme.com\n").unwrap();
    assert_eq!(with_noise.len(), 1);
    assert_eq!(with_noise, without_noise);
}

#[test]
fn label_beats_street_like_text() {
    let text = "Lens And Light\nSpecializes in: 123 Main St wedding photography\n";
    let records = parse_vendors(text).unwrap();
    assert_eq!(
        records[0].specialties.as_deref(),
        Some("123 Main St wedding photography")
    );
    assert!(records[0].address.is_none());
}

#[test]
fn parsing_is_deterministic() {
    let first = parse_vendors(TWO_VENDORS).unwrap();
    let second = parse_vendors(TWO_VENDORS).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_input_differs_from_empty_batch() {
    assert_eq!(parse_vendors("   \n"), Err(ParseError::EmptyInput));
    assert_eq!(parse_vendors("# template header only\n"), Ok(vec![]));
}

#[test]
fn edit_revalidates_one_record_only() {
    let mut records = parse_vendors("Acme Venue\nBloom Florals\n").unwrap();
    let untouched = records[1].clone();

    apply_edit(
        &mut records[0],
        VendorField::Email,
        Some("hello@acme.com".to_string()),
    )
    .unwrap();

    assert!(!records[0].warnings.iter().any(|w| w == MISSING_EMAIL));
    assert_eq!(records[1], untouched);
}

#[test]
fn records_serialize_for_import() {
    let records = parse_vendors(SUNSET_GARDENS).unwrap();
    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(json[0]["serviceArea"], "North Alabama");
    assert_eq!(json[0]["website"], "sunsetgardens.com");
    assert!(json[0].get("menu").is_none());
}
