//! Validated, indexed catalog.

use std::collections::{HashMap, HashSet};

use crate::catalog::{CatalogFixture, Partner, Product, DEFAULT_ACCENT_COLOR};
use crate::error::CatalogError;
use crate::ids::{PartnerId, ProductId};

/// Immutable product and partner catalog with id lookups.
///
/// Built once from a [`CatalogFixture`]; construction enforces unique ids,
/// resolvable partner references and valid diameter ranges, so read sites
/// never need to re-check them.
#[derive(Debug, Clone)]
pub struct Catalog {
    partners: Vec<Partner>,
    products: Vec<Product>,
    partner_index: HashMap<PartnerId, usize>,
    product_index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build the catalog from the bundled fixture.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_fixture(CatalogFixture::bundled()?)
    }

    /// Validate and index a fixture, failing on the first integrity error.
    pub fn from_fixture(fixture: CatalogFixture) -> Result<Self, CatalogError> {
        if let Some(err) = Self::validate(&fixture).into_iter().next() {
            return Err(err);
        }

        let partner_index = fixture
            .partners
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        let product_index = fixture
            .products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        tracing::debug!(
            partners = fixture.partners.len(),
            products = fixture.products.len(),
            "catalog loaded"
        );

        Ok(Self {
            partners: fixture.partners,
            products: fixture.products,
            partner_index,
            product_index,
        })
    }

    /// Report every integrity problem in a fixture.
    ///
    /// An empty result means [`Catalog::from_fixture`] will succeed.
    pub fn validate(fixture: &CatalogFixture) -> Vec<CatalogError> {
        let mut errors = Vec::new();

        let mut partners: HashMap<&PartnerId, &Partner> = HashMap::new();
        for partner in &fixture.partners {
            if partners.insert(&partner.id, partner).is_some() {
                errors.push(CatalogError::DuplicatePartnerId(partner.id.to_string()));
            }
        }

        let mut seen_products: HashSet<&ProductId> = HashSet::new();
        for product in &fixture.products {
            if !seen_products.insert(&product.id) {
                errors.push(CatalogError::DuplicateProductId(product.id.to_string()));
            }

            match partners.get(&product.partner_id) {
                None => errors.push(CatalogError::UnknownPartner {
                    product_id: product.id.to_string(),
                    partner_id: product.partner_id.to_string(),
                }),
                Some(partner) if partner.name != product.partner_name => {
                    errors.push(CatalogError::PartnerNameMismatch {
                        product_id: product.id.to_string(),
                        partner_id: partner.id.to_string(),
                        expected: partner.name.clone(),
                        found: product.partner_name.clone(),
                    })
                }
                Some(_) => {}
            }

            if !product.diameter.is_valid() {
                errors.push(CatalogError::InvalidDiameterRange {
                    product_id: product.id.to_string(),
                    min: product.diameter.min,
                    max: product.diameter.max,
                });
            }
        }

        for err in &errors {
            tracing::warn!(error = %err, "fixture integrity violation");
        }

        errors
    }

    /// All products in fixture order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All partners in fixture order.
    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.product_index.get(id).map(|&i| &self.products[i])
    }

    /// Look up a partner by id.
    pub fn partner(&self, id: &PartnerId) -> Option<&Partner> {
        self.partner_index.get(id).map(|&i| &self.partners[i])
    }

    /// Resolve a product's partner.
    pub fn partner_for(&self, product: &Product) -> Option<&Partner> {
        self.partner(&product.partner_id)
    }

    /// Accent color for a product card, falling back to the default accent.
    pub fn accent_color_for(&self, product: &Product) -> &str {
        self.partner_for(product)
            .map(|p| p.color.as_str())
            .unwrap_or(DEFAULT_ACCENT_COLOR)
    }

    /// Products supplied by a partner, in fixture order.
    pub fn products_for_partner(&self, id: &PartnerId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.partner_id == id)
            .collect()
    }

    /// Featured partners, most prominent first.
    pub fn featured_partners(&self) -> Vec<&Partner> {
        let mut featured: Vec<&Partner> = self.partners.iter().filter(|p| p.featured).collect();
        featured.sort_by_key(|p| p.featured_priority);
        featured
    }

    /// Distinct material codes in fixture order.
    pub fn materials(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.material.as_str()))
    }

    /// Distinct application labels in fixture order.
    pub fn applications(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.application.as_str()))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DiameterRange, PartnerType, ProductCategory, SpecSheet};

    fn partner(id: &str, name: &str) -> Partner {
        Partner {
            id: PartnerId::new(id),
            name: name.to_string(),
            country: "Albania".to_string(),
            specialty: String::new(),
            tagline: String::new(),
            description: String::new(),
            website: String::new(),
            partner_type: PartnerType::Manufacturer,
            key_standards: Vec::new(),
            featured: false,
            featured_priority: 1,
            color: "#123456".to_string(),
        }
    }

    fn product(id: &str, partner_id: &str, partner_name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            partner_id: PartnerId::new(partner_id),
            partner_name: partner_name.to_string(),
            category: ProductCategory::Civil,
            material: "HDPE".to_string(),
            application: "Water".to_string(),
            diameter: DiameterRange::new(20, 110),
            description: String::new(),
            standards: Vec::new(),
            pressure_class: None,
            specs: SpecSheet::new(),
        }
    }

    #[test]
    fn test_bundled_catalog_is_valid() {
        let fixture = CatalogFixture::bundled().unwrap();
        assert!(Catalog::validate(&fixture).is_empty());

        let catalog = Catalog::from_fixture(fixture).unwrap();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.partners().len(), 12);
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::bundled().unwrap();
        let product = catalog.product(&ProductId::new("fitt-force")).unwrap();
        assert_eq!(product.name, "FITT Force");

        let partner = catalog.partner_for(product).unwrap();
        assert_eq!(partner.name, "FITT");
        assert_eq!(catalog.accent_color_for(product), "#22d3ee");

        assert!(catalog.product(&ProductId::new("missing")).is_none());
        assert!(catalog.partner(&PartnerId::new("missing")).is_none());
    }

    #[test]
    fn test_accent_color_falls_back_on_missing_partner() {
        let catalog = Catalog::bundled().unwrap();
        let orphan = product("orphan", "gone", "Gone");
        assert!(catalog.partner_for(&orphan).is_none());
        assert_eq!(catalog.accent_color_for(&orphan), DEFAULT_ACCENT_COLOR);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let fixture = CatalogFixture {
            partners: vec![partner("a", "A"), partner("a", "A2")],
            products: vec![product("p", "a", "A"), product("p", "a", "A")],
        };
        let errors = Catalog::validate(&fixture);
        assert!(errors
            .iter()
            .any(|e| matches!(e, CatalogError::DuplicatePartnerId(id) if id == "a")));
        assert!(errors
            .iter()
            .any(|e| matches!(e, CatalogError::DuplicateProductId(id) if id == "p")));
        assert!(Catalog::from_fixture(fixture).is_err());
    }

    #[test]
    fn test_dangling_partner_reference_rejected() {
        let fixture = CatalogFixture {
            partners: vec![partner("a", "A")],
            products: vec![product("p", "b", "B")],
        };
        let err = Catalog::from_fixture(fixture).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownPartner { .. }));
    }

    #[test]
    fn test_partner_name_drift_rejected() {
        let fixture = CatalogFixture {
            partners: vec![partner("a", "Alpha")],
            products: vec![product("p", "a", "Alfa")],
        };
        let errors = Catalog::validate(&fixture);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], CatalogError::PartnerNameMismatch { .. }));
    }

    #[test]
    fn test_inverted_diameter_rejected() {
        let mut bad = product("p", "a", "A");
        bad.diameter = DiameterRange::new(500, 100);
        let fixture = CatalogFixture {
            partners: vec![partner("a", "A")],
            products: vec![bad],
        };
        let err = Catalog::from_fixture(fixture).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidDiameterRange { min: 500, max: 100, .. }
        ));
    }

    #[test]
    fn test_validate_reports_all_problems() {
        let mut bad = product("p2", "a", "A");
        bad.diameter = DiameterRange::new(9, 1);
        let fixture = CatalogFixture {
            partners: vec![partner("a", "A")],
            products: vec![product("p1", "zzz", "Z"), bad],
        };
        assert_eq!(Catalog::validate(&fixture).len(), 2);
    }

    #[test]
    fn test_featured_partners_by_priority() {
        let catalog = Catalog::bundled().unwrap();
        let featured: Vec<&str> = catalog
            .featured_partners()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(
            featured,
            vec!["konti-hidroplast", "ferplast-ks", "teqja", "fitt", "plastika-ks"]
        );
    }

    #[test]
    fn test_products_for_partner() {
        let catalog = Catalog::bundled().unwrap();
        let fitt = catalog.products_for_partner(&PartnerId::new("fitt"));
        let names: Vec<&str> = fitt.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["FITT Force", "FITT Mint", "FITT Mimosa"]);

        assert!(catalog
            .products_for_partner(&PartnerId::new("assos-viokon"))
            .is_empty());
    }

    #[test]
    fn test_distinct_facet_values() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.materials(), vec!["PP", "HDPE", "PVC", "LDPE", "Rubber"]);
        assert_eq!(
            catalog.applications(),
            vec!["Sewage", "Water", "Drainage", "Recycling", "Agriculture", "Industrial"]
        );
    }
}
