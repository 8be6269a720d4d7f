//! Search results and facets.

use serde::{Deserialize, Serialize};

/// Search results container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// The matching items, in display order.
    pub items: Vec<T>,
    /// Number of matching items.
    pub total: usize,
    /// Facet counts over the matching items.
    pub facets: Vec<Facet>,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
            facets: Vec::new(),
        }
    }

    /// Create empty results.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set facets.
    pub fn with_facets(mut self, facets: Vec<Facet>) -> Self {
        self.facets = facets;
        self
    }

    /// Look up a facet by its field key.
    pub fn facet(&self, key: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.key == key)
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for SearchResults<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A term facet (e.g. the material chip row).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Material").
    pub name: String,
    /// Field this facet filters on.
    pub key: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create an empty terms facet.
    pub fn terms(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            values: Vec::new(),
        }
    }

    /// Build a facet listing every known value with its count among `hits`.
    ///
    /// Selected values missing from `known` are appended with a zero count so
    /// the selection stays visible.
    pub(crate) fn from_values<'a>(
        name: &str,
        key: &str,
        known: Vec<&str>,
        selected: &[String],
        hits: impl Iterator<Item = &'a str>,
    ) -> Self {
        let mut facet = Facet::terms(name, key);
        for value in known {
            facet.add_value(value, 0, selected.iter().any(|s| s == value));
        }
        for value in selected {
            if !facet.values.iter().any(|v| &v.value == value) {
                facet.add_value(value.clone(), 0, true);
            }
        }
        for hit in hits {
            if let Some(v) = facet.values.iter_mut().find(|v| v.value == hit) {
                v.count += 1;
            }
        }
        facet
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }

    /// Count for a value (zero when absent).
    pub fn count_for(&self, value: &str) -> usize {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.count)
            .unwrap_or(0)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of matching items with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results() {
        let results = SearchResults::new(vec![1, 2, 3]);
        assert_eq!(results.len(), 3);
        assert_eq!(results.total, 3);
        assert!(!results.is_empty());

        let empty: SearchResults<u8> = SearchResults::default();
        assert!(empty.is_empty());
        assert_eq!(empty.total, 0);
    }

    #[test]
    fn test_facet_counts_and_selection() {
        let selected = vec!["PVC".to_string(), "Cable".to_string()];
        let facet = Facet::from_values(
            "Material",
            "material",
            vec!["HDPE", "PVC"],
            &selected,
            ["PVC", "PVC", "HDPE", "Steel"].into_iter(),
        );

        let values: Vec<(&str, usize, bool)> = facet
            .values
            .iter()
            .map(|v| (v.value.as_str(), v.count, v.selected))
            .collect();
        assert_eq!(
            values,
            vec![("HDPE", 1, false), ("PVC", 2, true), ("Cable", 0, true)]
        );
        assert_eq!(facet.count_for("Steel"), 0);
    }
}
