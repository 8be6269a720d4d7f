//! Product catalog module.
//!
//! Contains types for products, partners, fixture loading and the indexed catalog.

mod fixture;
mod partner;
mod product;
mod store;

pub use fixture::CatalogFixture;
pub use partner::{Partner, PartnerType, DEFAULT_ACCENT_COLOR};
pub use product::{DiameterRange, Product, ProductCategory, SpecSheet};
pub use store::Catalog;
