use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoreError, VendorRecord};

/// Vendor type tag attached to an import batch. The parser itself is
/// category-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VendorCategory {
    Venue,
    Photographer,
    Videographer,
    Caterer,
    Florist,
    Dj,
    Band,
    Planner,
    Baker,
    HairMakeup,
    Officiant,
    Rentals,
    Transportation,
    Other,
}

impl VendorCategory {
    pub const ALL: [VendorCategory; 14] = [
        VendorCategory::Venue,
        VendorCategory::Photographer,
        VendorCategory::Videographer,
        VendorCategory::Caterer,
        VendorCategory::Florist,
        VendorCategory::Dj,
        VendorCategory::Band,
        VendorCategory::Planner,
        VendorCategory::Baker,
        VendorCategory::HairMakeup,
        VendorCategory::Officiant,
        VendorCategory::Rentals,
        VendorCategory::Transportation,
        VendorCategory::Other,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            VendorCategory::Venue => "venue",
            VendorCategory::Photographer => "photographer",
            VendorCategory::Videographer => "videographer",
            VendorCategory::Caterer => "caterer",
            VendorCategory::Florist => "florist",
            VendorCategory::Dj => "dj",
            VendorCategory::Band => "band",
            VendorCategory::Planner => "planner",
            VendorCategory::Baker => "baker",
            VendorCategory::HairMakeup => "hair-makeup",
            VendorCategory::Officiant => "officiant",
            VendorCategory::Rentals => "rentals",
            VendorCategory::Transportation => "transportation",
            VendorCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for VendorCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        VendorCategory::ALL
            .into_iter()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// The payload handed to the directory import endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBatch {
    pub category: Option<VendorCategory>,
    pub generated_at: DateTime<Utc>,
    pub vendors: Vec<VendorRecord>,
}

impl ImportBatch {
    #[must_use]
    pub fn new(
        category: Option<VendorCategory>,
        generated_at: DateTime<Utc>,
        vendors: Vec<VendorRecord>,
    ) -> Self {
        Self {
            category,
            generated_at,
            vendors,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}
