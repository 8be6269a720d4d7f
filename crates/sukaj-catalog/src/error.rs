//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading or validating a catalog fixture.
///
/// Queries against a built [`Catalog`](crate::Catalog) never fail; every
/// variant here describes a problem with the fixture data itself.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Fixture file could not be read.
    #[error("Failed to read fixture {path}: {source}")]
    FixtureRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Fixture content is not valid catalog JSON.
    #[error("Failed to parse fixture: {0}")]
    FixtureParse(#[from] serde_json::Error),

    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(String),

    /// Two partners share an identifier.
    #[error("Duplicate partner id: {0}")]
    DuplicatePartnerId(String),

    /// A product points at a partner that does not exist.
    #[error("Product {product_id} references unknown partner {partner_id}")]
    UnknownPartner {
        product_id: String,
        partner_id: String,
    },

    /// A product's denormalised partner name disagrees with the partner record.
    #[error("Product {product_id} names partner \"{found}\" but {partner_id} is \"{expected}\"")]
    PartnerNameMismatch {
        product_id: String,
        partner_id: String,
        expected: String,
        found: String,
    },

    /// A product's diameter range is inverted.
    #[error("Product {product_id} has invalid diameter range [{min}, {max}]")]
    InvalidDiameterRange { product_id: String, min: u32, max: u32 },
}
