//! The vendor record produced by the import engine and consumed by the
//! directory import endpoint.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A single vendor recovered from pasted listing text.
///
/// Every optional field is write-once while the record is being assembled:
/// [`VendorRecord::set_once`] refuses to overwrite a populated field. Later
/// edits go through [`VendorRecord::set_field`], which does overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter postal code, e.g. `"AL"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// The whole contact line with whitespace collapsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Bare domain without scheme or `www.`, e.g. `"sunsetgardens.com"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
    /// Advisory warnings. Owned by the validator; never set by hand.
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Addressable fields of a [`VendorRecord`], keyed by their JSON names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorField {
    Name,
    Address,
    City,
    State,
    Contact,
    Email,
    Phone,
    Website,
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

impl VendorField {
    pub const ALL: [VendorField; 18] = [
        VendorField::Name,
        VendorField::Address,
        VendorField::City,
        VendorField::State,
        VendorField::Contact,
        VendorField::Email,
        VendorField::Phone,
        VendorField::Website,
        VendorField::Specialties,
        VendorField::Packages,
        VendorField::ServiceArea,
        VendorField::SocialMedia,
        VendorField::Hours,
        VendorField::Certifications,
        VendorField::Capacity,
        VendorField::Amenities,
        VendorField::Equipment,
        VendorField::Menu,
    ];

    /// The camelCase key used in serialized records.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            VendorField::Name => "name",
            VendorField::Address => "address",
            VendorField::City => "city",
            VendorField::State => "state",
            VendorField::Contact => "contact",
            VendorField::Email => "email",
            VendorField::Phone => "phone",
            VendorField::Website => "website",
            VendorField::Specialties => "specialties",
            VendorField::Packages => "packages",
            VendorField::ServiceArea => "serviceArea",
            VendorField::SocialMedia => "socialMedia",
            VendorField::Hours => "hours",
            VendorField::Certifications => "certifications",
            VendorField::Capacity => "capacity",
            VendorField::Amenities => "amenities",
            VendorField::Equipment => "equipment",
            VendorField::Menu => "menu",
        }
    }
}

impl std::fmt::Display for VendorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for VendorField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VendorField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

impl VendorRecord {
    /// Creates a record with only its name set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns `true` once a non-empty name has been assigned.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Reads a field. An empty name reads as `None`.
    #[must_use]
    pub fn get(&self, field: VendorField) -> Option<&str> {
        if field == VendorField::Name {
            return self.has_name().then_some(self.name.as_str());
        }
        self.optional_slot(field).and_then(|slot| slot.as_deref())
    }

    #[must_use]
    pub fn is_set(&self, field: VendorField) -> bool {
        self.get(field).is_some()
    }

    /// Stores `value` only if `field` is still unset.
    ///
    /// Returns `true` when the value was written.
    pub fn set_once(&mut self, field: VendorField, value: impl Into<String>) -> bool {
        if self.is_set(field) {
            return false;
        }
        let value = value.into();
        match self.optional_slot_mut(field) {
            Some(slot) => *slot = Some(value),
            None => self.name = value,
        }
        true
    }

    /// Overwrites (or clears, with `None`) a single field.
    ///
    /// Values are trimmed and blank values clear the field. Warnings are left
    /// untouched; callers re-run validation afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyName`] when asked to clear or blank the name.
    pub fn set_field(&mut self, field: VendorField, value: Option<String>) -> Result<(), CoreError> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        match self.optional_slot_mut(field) {
            Some(slot) => *slot = value,
            None => self.name = value.ok_or(CoreError::EmptyName)?,
        }
        Ok(())
    }

    /// Name lower-cased with all whitespace removed, used for duplicate
    /// detection only.
    #[must_use]
    pub fn normalized_key(&self) -> String {
        self.name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }

    fn optional_slot(&self, field: VendorField) -> Option<&Option<String>> {
        let slot = match field {
            VendorField::Name => return None,
            VendorField::Address => &self.address,
            VendorField::City => &self.city,
            VendorField::State => &self.state,
            VendorField::Contact => &self.contact,
            VendorField::Email => &self.email,
            VendorField::Phone => &self.phone,
            VendorField::Website => &self.website,
            VendorField::Specialties => &self.specialties,
            VendorField::Packages => &self.packages,
            VendorField::ServiceArea => &self.service_area,
            VendorField::SocialMedia => &self.social_media,
            VendorField::Hours => &self.hours,
            VendorField::Certifications => &self.certifications,
            VendorField::Capacity => &self.capacity,
            VendorField::Amenities => &self.amenities,
            VendorField::Equipment => &self.equipment,
            VendorField::Menu => &self.menu,
        };
        Some(slot)
    }

    fn optional_slot_mut(&mut self, field: VendorField) -> Option<&mut Option<String>> {
        let slot = match field {
            VendorField::Name => return None,
            VendorField::Address => &mut self.address,
            VendorField::City => &mut self.city,
            VendorField::State => &mut self.state,
            VendorField::Contact => &mut self.contact,
            VendorField::Email => &mut self.email,
            VendorField::Phone => &mut self.phone,
            VendorField::Website => &mut self.website,
            VendorField::Specialties => &mut self.specialties,
            VendorField::Packages => &mut self.packages,
            VendorField::ServiceArea => &mut self.service_area,
            VendorField::SocialMedia => &mut self.social_media,
            VendorField::Hours => &mut self.hours,
            VendorField::Certifications => &mut self.certifications,
            VendorField::Capacity => &mut self.capacity,
            VendorField::Amenities => &mut self.amenities,
            VendorField::Equipment => &mut self.equipment,
            VendorField::Menu => &mut self.menu,
        };
        Some(slot)
    }
}
