//! Partner (supplier / manufacturer) types.

use crate::ids::PartnerId;
use serde::{Deserialize, Serialize};

/// Accent color used when a partner lookup misses.
pub const DEFAULT_ACCENT_COLOR: &str = "#f97316";

/// Partner classification used by the partner directory tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartnerType {
    Manufacturer,
    Recycler,
    Packaging,
    Hoses,
    /// Local manufacturer / distributor in the home market.
    #[serde(alias = "local-albania")]
    LocalDistributor,
}

impl PartnerType {
    /// All partner types in tab order.
    pub const ALL: [PartnerType; 5] = [
        PartnerType::Manufacturer,
        PartnerType::Recycler,
        PartnerType::Packaging,
        PartnerType::Hoses,
        PartnerType::LocalDistributor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerType::Manufacturer => "manufacturer",
            PartnerType::Recycler => "recycler",
            PartnerType::Packaging => "packaging",
            PartnerType::Hoses => "hoses",
            PartnerType::LocalDistributor => "local-distributor",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manufacturer" => Some(PartnerType::Manufacturer),
            "recycler" => Some(PartnerType::Recycler),
            "packaging" => Some(PartnerType::Packaging),
            "hoses" => Some(PartnerType::Hoses),
            "local-distributor" | "local-albania" => Some(PartnerType::LocalDistributor),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartnerType::Manufacturer => "Manufacturers",
            PartnerType::Recycler => "Recycling & Foils",
            PartnerType::Packaging => "Packaging",
            PartnerType::Hoses => "Hoses",
            PartnerType::LocalDistributor => "Local Distributors",
        }
    }
}

/// A supplier or manufacturer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Partner {
    /// Unique partner identifier.
    pub id: PartnerId,
    /// Display name.
    pub name: String,
    /// Country of origin.
    pub country: String,
    /// One-line specialty.
    pub specialty: String,
    /// Short marketing tagline.
    #[serde(default)]
    pub tagline: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Website URL (empty when the partner has none).
    #[serde(default)]
    pub website: String,
    /// Directory classification.
    pub partner_type: PartnerType,
    /// Standards the partner certifies against.
    #[serde(default)]
    pub key_standards: Vec<String>,
    /// Whether the partner is shown in featured slots.
    #[serde(default)]
    pub featured: bool,
    /// Display priority (lower = more prominent).
    pub featured_priority: u32,
    /// Accent color for cards.
    pub color: String,
}

impl Partner {
    /// Check if the partner has a website to link to.
    pub fn has_website(&self) -> bool {
        !self.website.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_type_accepts_legacy_alias() {
        let t: PartnerType = serde_json::from_str("\"local-albania\"").unwrap();
        assert_eq!(t, PartnerType::LocalDistributor);

        let t: PartnerType = serde_json::from_str("\"local-distributor\"").unwrap();
        assert_eq!(t, PartnerType::LocalDistributor);
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"local-distributor\"");
    }

    #[test]
    fn test_partner_type_names() {
        for t in PartnerType::ALL {
            assert_eq!(PartnerType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(PartnerType::Recycler.display_name(), "Recycling & Foils");
        assert_eq!(PartnerType::from_str("all"), None);
    }

    #[test]
    fn test_partner_defaults_for_optional_fields() {
        let json = r##"{
            "id": "albplast",
            "name": "Albplast",
            "country": "Albania",
            "specialty": "Irrigation",
            "partner_type": "local-distributor",
            "featured_priority": 12,
            "color": "#64748b"
        }"##;
        let partner: Partner = serde_json::from_str(json).unwrap();
        assert!(!partner.featured);
        assert!(partner.key_standards.is_empty());
        assert!(!partner.has_website());
    }
}
