//! Product types.

use crate::ids::{PartnerId, ProductId};
use crate::search::DiameterWindow;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Product category (closed set used by the category pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Municipal infrastructure, sewage and drainage.
    Civil,
    /// Irrigation and agricultural water management.
    Agri,
    /// Heavy-duty conduits, hoses and raw material.
    Industrial,
}

impl ProductCategory {
    /// All categories in display order.
    pub const ALL: [ProductCategory; 3] = [
        ProductCategory::Civil,
        ProductCategory::Agri,
        ProductCategory::Industrial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Civil => "civil",
            ProductCategory::Agri => "agri",
            ProductCategory::Industrial => "industrial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "civil" => Some(ProductCategory::Civil),
            "agri" => Some(ProductCategory::Agri),
            "industrial" => Some(ProductCategory::Industrial),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Civil => "Civil Engineering",
            ProductCategory::Agri => "Agriculture",
            ProductCategory::Industrial => "Industrial",
        }
    }
}

/// Inclusive outer-diameter range in millimetres.
///
/// `[0, 0]` marks a product with no physical diameter (granulate, film).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiameterRange {
    pub min: u32,
    pub max: u32,
}

impl DiameterRange {
    /// The "not applicable" sentinel.
    pub const NOT_APPLICABLE: DiameterRange = DiameterRange { min: 0, max: 0 };

    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Check if this is the `[0, 0]` sentinel.
    pub fn is_not_applicable(&self) -> bool {
        *self == Self::NOT_APPLICABLE
    }

    /// Check the `min <= max` invariant (the sentinel trivially satisfies it).
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Check whether this range intersects the window (bounds inclusive).
    ///
    /// The sentinel always overlaps: a diameter filter says nothing about a
    /// product that has no diameter.
    pub fn overlaps(&self, window: &DiameterWindow) -> bool {
        if self.is_not_applicable() {
            return true;
        }
        !(self.max < window.min || self.min > window.max)
    }

    /// Format for spec cards, e.g. "300–2000 mm".
    pub fn display(&self) -> String {
        if self.is_not_applicable() {
            "N/A".to_string()
        } else {
            format!("{}–{} mm", self.min, self.max)
        }
    }
}

/// Ordered spec-name → spec-value pairs.
///
/// Keys differ per product, so this stays an open mapping. Serialized as a
/// JSON object; fixture order is kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecSheet(Vec<(String, String)>);

impl SpecSheet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a spec, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SpecSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpecSheet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecSheetVisitor;

        impl<'de> Visitor<'de> for SpecSheetVisitor {
            type Value = SpecSheet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of spec names to spec values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SpecSheet, A::Error> {
                let mut sheet = SpecSheet::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    sheet.insert(key, value);
                }
                Ok(sheet)
            }
        }

        deserializer.deserialize_map(SpecSheetVisitor)
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier (the product slug).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Owning partner.
    pub partner_id: PartnerId,
    /// Partner display name, denormalised for search and sorting.
    pub partner_name: String,
    /// Catalog category.
    pub category: ProductCategory,
    /// Material code (e.g. "HDPE", "PVC", "PP").
    pub material: String,
    /// Application label (e.g. "Sewage", "Water").
    pub application: String,
    /// Outer diameter range.
    pub diameter: DiameterRange,
    /// Free-text description.
    pub description: String,
    /// Standard codes (e.g. "EN 13476").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub standards: Vec<String>,
    /// Pressure or stiffness class (e.g. "PN6–PN25", "SN8").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_class: Option<String>,
    /// Free-form technical specs.
    #[serde(default)]
    pub specs: SpecSheet,
}

impl Product {
    /// Look up a single spec value.
    pub fn spec(&self, key: &str) -> Option<&str> {
        self.specs.get(key)
    }

    /// Check if the product has a physical diameter.
    pub fn has_diameter(&self) -> bool {
        !self.diameter.is_not_applicable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_always_overlaps() {
        let granulate = DiameterRange::NOT_APPLICABLE;
        assert!(granulate.overlaps(&DiameterWindow::new(1900, 2000)));
        assert!(granulate.overlaps(&DiameterWindow::new(2001, 2500)));
    }

    #[test]
    fn test_overlap_bounds_inclusive() {
        let spiral = DiameterRange::new(300, 2000);
        assert!(spiral.overlaps(&DiameterWindow::new(2000, 2000)));
        assert!(spiral.overlaps(&DiameterWindow::new(0, 300)));
        assert!(!spiral.overlaps(&DiameterWindow::new(2001, 2500)));
        assert!(!spiral.overlaps(&DiameterWindow::new(0, 299)));
    }

    #[test]
    fn test_diameter_display() {
        assert_eq!(DiameterRange::new(20, 630).display(), "20–630 mm");
        assert_eq!(DiameterRange::NOT_APPLICABLE.display(), "N/A");
    }

    #[test]
    fn test_category_round_trip_names() {
        for category in ProductCategory::ALL {
            assert_eq!(ProductCategory::from_str(category.as_str()), Some(category));
        }
        assert_eq!(ProductCategory::from_str("CIVIL"), Some(ProductCategory::Civil));
        assert_eq!(ProductCategory::from_str("marine"), None);
    }

    #[test]
    fn test_spec_sheet_keeps_fixture_order() {
        let json = r#"{"wallType": "Spiral", "length": "6 m", "joints": "Seal"}"#;
        let sheet: SpecSheet = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = sheet.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["wallType", "length", "joints"]);
        assert_eq!(sheet.get("length"), Some("6 m"));

        let out = serde_json::to_string(&sheet).unwrap();
        assert_eq!(out, r#"{"wallType":"Spiral","length":"6 m","joints":"Seal"}"#);
    }

    #[test]
    fn test_spec_sheet_insert_replaces_in_place() {
        let mut sheet = SpecSheet::new();
        sheet.insert("a", "1");
        sheet.insert("b", "2");
        sheet.insert("a", "3");
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.iter().next(), Some(("a", "3")));
    }
}
