//! Integrity checks for the bundled fixture and for hand-edited fixtures.

use sukaj_catalog::prelude::*;

fn fixture(json: &str) -> CatalogFixture {
    CatalogFixture::from_json_str(json).expect("fixture json")
}

const PARTNERS: &str = r##"[
    {"id": "konti", "name": "Konti Hidroplast", "country": "North Macedonia",
     "specialty": "Pipes", "partner_type": "manufacturer",
     "featured_priority": 1, "color": "#0ea5e9"},
    {"id": "fitt", "name": "FITT", "country": "Italy",
     "specialty": "Hoses", "partner_type": "hoses",
     "featured_priority": 2, "color": "#22c55e"}
]"##;

fn product(id: &str, partner_id: &str, partner_name: &str, min: u32, max: u32) -> String {
    format!(
        r#"{{"id": "{id}", "name": "Pipe {id}", "partner_id": "{partner_id}",
            "partner_name": "{partner_name}", "category": "civil", "material": "HDPE",
            "application": "Water", "diameter": {{"min": {min}, "max": {max}}},
            "description": ""}}"#
    )
}

fn build(products: &[String]) -> CatalogFixture {
    fixture(&format!(
        r#"{{"partners": {PARTNERS}, "products": [{}]}}"#,
        products.join(",")
    ))
}

#[test]
fn bundled_fixture_is_consistent() {
    let bundled = CatalogFixture::bundled().expect("bundled fixture");
    assert!(Catalog::validate(&bundled).is_empty());

    let catalog = Catalog::from_fixture(bundled).expect("catalog");
    for product in catalog.products() {
        let partner = catalog.partner_for(product).expect("partner resolves");
        assert_eq!(partner.name, product.partner_name);
        assert!(product.diameter.is_valid(), "{}", product.id);
    }
}

#[test]
fn bundled_fixture_has_unique_ids() {
    let catalog = Catalog::bundled().expect("bundled fixture");
    let mut ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn clean_fixture_builds() {
    let fixture = build(&[
        product("a", "konti", "Konti Hidroplast", 20, 630),
        product("b", "fitt", "FITT", 0, 0),
    ]);
    let catalog = Catalog::from_fixture(fixture).expect("catalog");
    assert_eq!(catalog.len(), 2);
}

#[test]
fn detects_duplicate_product_id() {
    let fixture = build(&[
        product("a", "konti", "Konti Hidroplast", 20, 630),
        product("a", "konti", "Konti Hidroplast", 20, 630),
    ]);
    let errors = Catalog::validate(&fixture);
    assert!(matches!(
        errors.as_slice(),
        [CatalogError::DuplicateProductId(id)] if id == "a"
    ));
}

#[test]
fn detects_dangling_partner_reference() {
    let fixture = build(&[product("a", "ghost", "Ghost", 20, 630)]);
    let errors = Catalog::validate(&fixture);
    assert!(matches!(
        errors.as_slice(),
        [CatalogError::UnknownPartner { partner_id, .. }] if partner_id == "ghost"
    ));

    let err = Catalog::from_fixture(fixture).unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn detects_partner_name_drift() {
    let fixture = build(&[product("a", "fitt", "F.I.T.T.", 12, 50)]);
    let errors = Catalog::validate(&fixture);
    assert!(matches!(
        errors.as_slice(),
        [CatalogError::PartnerNameMismatch { expected, found, .. }]
            if expected == "FITT" && found == "F.I.T.T."
    ));
}

#[test]
fn detects_inverted_diameter_range() {
    let fixture = build(&[product("a", "konti", "Konti Hidroplast", 630, 20)]);
    let errors = Catalog::validate(&fixture);
    assert!(matches!(
        errors.as_slice(),
        [CatalogError::InvalidDiameterRange { min: 630, max: 20, .. }]
    ));
}

#[test]
fn reports_every_violation() {
    let fixture = build(&[
        product("a", "ghost", "Ghost", 20, 630),
        product("a", "fitt", "Fitt", 50, 12),
    ]);
    assert_eq!(Catalog::validate(&fixture).len(), 4);
}

#[test]
fn missing_partner_falls_back_to_default_accent() {
    let catalog = Catalog::bundled().expect("bundled fixture");
    let mut orphan = catalog.products()[0].clone();
    orphan.partner_id = PartnerId::new("retired");

    assert!(catalog.partner_for(&orphan).is_none());
    assert_eq!(catalog.accent_color_for(&orphan), DEFAULT_ACCENT_COLOR);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = CatalogFixture::from_json_str("{\"products\": 3}").unwrap_err();
    assert!(matches!(err, CatalogError::FixtureParse(_)));
}
