//! Removable "active filter" chips derived from a filter state.

use crate::catalog::{Catalog, ProductCategory};
use crate::ids::PartnerId;
use crate::search::{DiameterWindow, FilterState};
use serde::{Deserialize, Serialize};

/// Which single constraint a chip stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ActiveFilterKind {
    Search(String),
    Material(String),
    Application(String),
    Diameter(DiameterWindow),
    Category(String),
    Partner(PartnerId),
}

/// One active constraint, with a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub kind: ActiveFilterKind,
    pub label: String,
}

impl FilterState {
    /// List every non-default constraint as a removable chip.
    ///
    /// The partner chip shows the partner's name, or its raw id when the
    /// lookup misses.
    pub fn active_filters(&self, catalog: &Catalog) -> Vec<ActiveFilter> {
        let mut chips = Vec::new();

        if !self.search.is_empty() {
            chips.push(ActiveFilter {
                kind: ActiveFilterKind::Search(self.search.clone()),
                label: format!("\"{}\"", self.search),
            });
        }

        for material in distinct(&self.materials) {
            chips.push(ActiveFilter {
                kind: ActiveFilterKind::Material(material.to_string()),
                label: material.to_string(),
            });
        }

        for application in distinct(&self.applications) {
            chips.push(ActiveFilter {
                kind: ActiveFilterKind::Application(application.to_string()),
                label: application.to_string(),
            });
        }

        if !self.diameter.is_full() {
            chips.push(ActiveFilter {
                kind: ActiveFilterKind::Diameter(self.diameter),
                label: self.diameter.label(),
            });
        }

        if let Some(category) = &self.category {
            // Same exact comparison the predicate uses, so the label never
            // names a category the filter does not match.
            let label = ProductCategory::ALL
                .iter()
                .find(|c| c.as_str() == category)
                .map(|c| c.display_name().to_string())
                .unwrap_or_else(|| category.clone());
            chips.push(ActiveFilter {
                kind: ActiveFilterKind::Category(category.clone()),
                label,
            });
        }

        if let Some(partner) = &self.partner {
            let label = catalog
                .partner(partner)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| partner.to_string());
            chips.push(ActiveFilter {
                kind: ActiveFilterKind::Partner(partner.clone()),
                label,
            });
        }

        chips
    }

    /// Remove exactly the constraint a chip stands for.
    ///
    /// Returns `false` when the chip no longer applies (already removed).
    pub fn remove(&mut self, chip: &ActiveFilter) -> bool {
        match &chip.kind {
            ActiveFilterKind::Search(text) => {
                if &self.search != text {
                    return false;
                }
                self.search.clear();
            }
            ActiveFilterKind::Material(value) => return remove_value(&mut self.materials, value),
            ActiveFilterKind::Application(value) => {
                return remove_value(&mut self.applications, value)
            }
            ActiveFilterKind::Diameter(window) => {
                if &self.diameter != window {
                    return false;
                }
                self.diameter = DiameterWindow::FULL;
            }
            ActiveFilterKind::Category(category) => {
                if self.category.as_ref() != Some(category) {
                    return false;
                }
                self.category = None;
            }
            ActiveFilterKind::Partner(partner) => {
                if self.partner.as_ref() != Some(partner) {
                    return false;
                }
                self.partner = None;
            }
        }
        true
    }
}

/// Drop every occurrence of `value`; a deserialized state may repeat one.
fn remove_value(values: &mut Vec<String>, value: &str) -> bool {
    let before = values.len();
    values.retain(|v| v != value);
    values.len() != before
}

/// Values in first-seen order, each once.
fn distinct(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .enumerate()
        .filter(move |&(i, v)| !values[..i].contains(v))
        .map(|(_, v)| v.as_str())
}
