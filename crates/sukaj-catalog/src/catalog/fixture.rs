//! Catalog fixture loading.

use crate::catalog::{Partner, Product};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixture compiled into the crate.
const BUNDLED_FIXTURE: &str = include_str!("../../data/catalog.json");

/// The raw partner and product lists, as authored.
///
/// A fixture is unchecked data; build a [`Catalog`](crate::Catalog) from it
/// to validate and index it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogFixture {
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogFixture {
    /// Parse the fixture bundled with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_FIXTURE)
    }

    /// Parse a fixture from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a fixture file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::FixtureRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Serialize back to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
