//! Catalog filter state and the product predicate.

use crate::catalog::Product;
use crate::ids::PartnerId;
use crate::search::SortOption;
use serde::{Deserialize, Serialize};

/// Inclusive diameter window selected by the user, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiameterWindow {
    pub min: u32,
    pub max: u32,
}

impl DiameterWindow {
    /// The global default window: no diameter constraint.
    pub const FULL: DiameterWindow = DiameterWindow { min: 0, max: 2000 };

    /// Create a window; bounds given in either order are put in order.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Check if this window is the unconstrained default.
    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    /// Format for chips, e.g. "Ø 100–600 mm".
    pub fn label(&self) -> String {
        format!("Ø {}–{} mm", self.min, self.max)
    }
}

impl Default for DiameterWindow {
    fn default() -> Self {
        Self::FULL
    }
}

/// Transient, UI-held catalog filter.
///
/// Empty facet selections mean "match all". Selections keep the order the
/// user picked them in so chips render in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Free-text search over name, partner name and application.
    pub search: String,
    /// Selected material codes.
    pub materials: Vec<String>,
    /// Selected application labels.
    pub applications: Vec<String>,
    /// Diameter window.
    pub diameter: DiameterWindow,
    /// Category constraint (matched against the category's wire name).
    pub category: Option<String>,
    /// Partner constraint.
    pub partner: Option<PartnerId>,
    /// Result ordering.
    pub sort: SortOption,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            materials: Vec::new(),
            applications: Vec::new(),
            diameter: DiameterWindow::FULL,
            category: None,
            partner: None,
            sort: SortOption::MostRelevant,
        }
    }
}

impl FilterState {
    /// Create an unconstrained filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Select a material.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        add_unique(&mut self.materials, material.into());
        self
    }

    /// Select an application.
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        add_unique(&mut self.applications, application.into());
        self
    }

    /// Set the diameter window.
    pub fn with_diameter(mut self, window: DiameterWindow) -> Self {
        self.diameter = window;
        self
    }

    /// Constrain to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Constrain to a partner.
    pub fn with_partner(mut self, partner: impl Into<PartnerId>) -> Self {
        self.partner = Some(partner.into());
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Select or deselect a material chip.
    pub fn toggle_material(&mut self, material: &str) {
        toggle(&mut self.materials, material);
    }

    /// Select or deselect an application chip.
    pub fn toggle_application(&mut self, application: &str) {
        toggle(&mut self.applications, application);
    }

    /// Check whether no constraint is active (sort is not a constraint).
    pub fn is_default(&self) -> bool {
        self.search.is_empty()
            && self.materials.is_empty()
            && self.applications.is_empty()
            && self.diameter.is_full()
            && self.category.is_none()
            && self.partner.is_none()
    }

    /// Reset every constraint to its default, keeping the sort.
    pub fn clear_all(&mut self) {
        *self = Self {
            sort: self.sort,
            ..Self::default()
        };
    }

    /// Check a single product against every active constraint.
    pub fn matches(&self, product: &Product) -> bool {
        ProductPredicate::new(self).matches(product)
    }
}

fn add_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

/// A filter prepared for scanning many products (search text lowercased once).
pub(crate) struct ProductPredicate<'a> {
    filter: &'a FilterState,
    needle: Option<String>,
}

impl<'a> ProductPredicate<'a> {
    pub(crate) fn new(filter: &'a FilterState) -> Self {
        let needle = if filter.search.is_empty() {
            None
        } else {
            Some(filter.search.to_lowercase())
        };
        Self { filter, needle }
    }

    pub(crate) fn matches(&self, product: &Product) -> bool {
        let f = self.filter;

        if let Some(category) = &f.category {
            if product.category.as_str() != category {
                return false;
            }
        }

        if let Some(partner) = &f.partner {
            if &product.partner_id != partner {
                return false;
            }
        }

        if !f.materials.is_empty() && !f.materials.contains(&product.material) {
            return false;
        }

        if !f.applications.is_empty() && !f.applications.contains(&product.application) {
            return false;
        }

        if !product.diameter.overlaps(&f.diameter) {
            return false;
        }

        if let Some(needle) = &self.needle {
            let hit = product.name.to_lowercase().contains(needle)
                || product.partner_name.to_lowercase().contains(needle)
                || product.application.to_lowercase().contains(needle);
            if !hit {
                return false;
            }
        }

        true
    }
}
