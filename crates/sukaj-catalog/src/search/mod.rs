//! Search module.
//!
//! Contains the filter state, sorting, facets, filter chips and partner-type faceting.

mod chips;
mod filter;
mod partners;
mod query;
mod results;

pub use chips::{ActiveFilter, ActiveFilterKind};
pub use filter::{DiameterWindow, FilterState};
pub use partners::PartnerTypeFilter;
pub use query::{collate, SortOption};
pub use results::{Facet, FacetValue, SearchResults};
