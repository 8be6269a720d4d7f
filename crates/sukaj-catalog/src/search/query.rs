//! Catalog search: filtering, sorting and result assembly.

use std::cmp::Ordering;

use crate::catalog::{Catalog, Product};
use crate::search::filter::ProductPredicate;
use crate::search::{Facet, FilterState, SearchResults};
use serde::{Deserialize, Serialize};

/// Sort options for catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Fixture order.
    #[default]
    #[serde(rename = "relevance")]
    MostRelevant,
    /// Smallest minimum diameter first.
    DiameterAsc,
    /// Largest maximum diameter first.
    DiameterDesc,
    /// Partner name A-Z.
    Partner,
}

impl SortOption {
    /// All sort options in menu order.
    pub const ALL: [SortOption; 4] = [
        SortOption::MostRelevant,
        SortOption::DiameterAsc,
        SortOption::DiameterDesc,
        SortOption::Partner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::MostRelevant => "relevance",
            SortOption::DiameterAsc => "diameter_asc",
            SortOption::DiameterDesc => "diameter_desc",
            SortOption::Partner => "partner",
        }
    }

    /// Parse a sort key; unknown keys fall back to relevance.
    pub fn from_str(s: &str) -> Self {
        match s {
            "diameter_asc" => Self::DiameterAsc,
            "diameter_desc" => Self::DiameterDesc,
            "partner" => Self::Partner,
            _ => Self::MostRelevant,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::MostRelevant => "Most Relevant",
            SortOption::DiameterAsc => "Diameter: Small to Large",
            SortOption::DiameterDesc => "Diameter: Large to Small",
            SortOption::Partner => "Partner: A-Z",
        }
    }

    /// Stable-sort products in place.
    pub fn apply(&self, products: &mut [&Product]) {
        match self {
            SortOption::MostRelevant => {}
            SortOption::DiameterAsc => products.sort_by_key(|p| p.diameter.min),
            SortOption::DiameterDesc => {
                products.sort_by(|a, b| b.diameter.max.cmp(&a.diameter.max))
            }
            SortOption::Partner => {
                products.sort_by(|a, b| collate(&a.partner_name, &b.partner_name))
            }
        }
    }
}

/// Locale-style string comparison for display names.
///
/// Compares case-insensitively with Latin diacritics folded to their base
/// letter ("Kauçuk" sorts with "Kaucuk"), then by the raw strings so the
/// order stays total.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match fold_diacritic(c) {
            Some(base) => key.push_str(base),
            None => key.push(c),
        }
    }
    key
}

fn fold_diacritic(c: char) -> Option<&'static str> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'ç' | 'ć' | 'č' => "c",
        'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
        'ğ' => "g",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'ł' => "l",
        'ñ' | 'ń' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'ř' => "r",
        'ś' | 'š' | 'ş' | 'ș' => "s",
        'ß' => "ss",
        'ť' | 'ţ' | 'ț' => "t",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'ý' | 'ÿ' => "y",
        'ź' | 'ž' | 'ż' => "z",
        _ => return None,
    };
    Some(base)
}

impl Catalog {
    /// Products matching every active constraint, in the filter's sort order.
    ///
    /// Never fails: an impossible combination yields an empty list.
    pub fn filter(&self, filters: &FilterState) -> Vec<&Product> {
        let predicate = ProductPredicate::new(filters);
        let mut matches: Vec<&Product> = self
            .products()
            .iter()
            .filter(|p| predicate.matches(p))
            .collect();
        filters.sort.apply(&mut matches);
        matches
    }

    /// Run a full catalog search: matches, count and facet counts.
    pub fn search(&self, filters: &FilterState) -> SearchResults<&Product> {
        let items = self.filter(filters);

        let materials = Facet::from_values(
            "Material",
            "material",
            self.materials(),
            &filters.materials,
            items.iter().map(|p| p.material.as_str()),
        );
        let applications = Facet::from_values(
            "Application",
            "application",
            self.applications(),
            &filters.applications,
            items.iter().map(|p| p.application.as_str()),
        );

        tracing::debug!(
            matches = items.len(),
            sort = filters.sort.as_str(),
            "catalog search"
        );

        SearchResults::new(items).with_facets(vec![materials, applications])
    }
}
