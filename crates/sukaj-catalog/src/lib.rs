//! Product and partner catalog engine for the Sukaj pipe-distribution site.
//!
//! This crate holds the catalog as an immutable, validated in-memory index
//! and answers every question the catalog and partner pages ask of it:
//!
//! - **Catalog**: Products, partners, fixture loading and integrity checks
//! - **Search**: Filter state, sorting, facet counts, removable filter chips
//! - **Partners**: Partner-type faceting and featured ordering
//!
//! # Example
//!
//! ```rust,ignore
//! use sukaj_catalog::prelude::*;
//!
//! let catalog = Catalog::bundled()?;
//!
//! let filters = FilterState::new()
//!     .with_material("HDPE")
//!     .with_diameter(DiameterWindow::new(100, 600))
//!     .with_sort(SortOption::DiameterAsc);
//!
//! let results = catalog.search(&filters);
//! println!("{} products", results.total);
//!
//! for chip in filters.active_filters(&catalog) {
//!     println!("[x] {}", chip.label);
//! }
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogFixture, DiameterRange, Partner, PartnerType, Product, ProductCategory,
        SpecSheet, DEFAULT_ACCENT_COLOR,
    };

    // Search
    pub use crate::search::{
        ActiveFilter, ActiveFilterKind, DiameterWindow, Facet, FacetValue, FilterState,
        PartnerTypeFilter, SearchResults, SortOption,
    };
}
