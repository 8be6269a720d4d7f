//! Fixture integrity command.

use anyhow::{bail, Result};
use serde::Serialize;
use sukaj_catalog::Catalog;

use crate::context::Context;

#[derive(Serialize)]
struct ValidationReport {
    fixture: String,
    products: usize,
    partners: usize,
    errors: Vec<String>,
}

/// Run the validate command.
///
/// Fails when the fixture has any integrity problem, after listing all of them.
pub fn run(ctx: &Context) -> Result<()> {
    let fixture = ctx.fixture()?;
    let source = ctx
        .fixture_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());

    let errors: Vec<String> = Catalog::validate(&fixture)
        .iter()
        .map(ToString::to_string)
        .collect();

    let logger = ctx.logger("validate").with_component("catalog");
    let builder = if errors.is_empty() {
        logger.info_builder("fixture validated")
    } else {
        logger.warn_builder("fixture has integrity errors")
    };
    builder
        .field("fixture", source.as_str())
        .field("products", fixture.products.len())
        .field("partners", fixture.partners.len())
        .field("errors", errors.len())
        .field("passed", errors.is_empty())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&ValidationReport {
            fixture: source,
            products: fixture.products.len(),
            partners: fixture.partners.len(),
            errors: errors.clone(),
        });
    } else {
        ctx.output.header(&format!("Validating {}", source));
        for err in &errors {
            ctx.output.list_item(err);
        }
    }

    if !errors.is_empty() {
        bail!("Fixture has {} integrity error(s)", errors.len());
    }

    ctx.output.success(&format!(
        "{} products and {} partners are consistent",
        fixture.products.len(),
        fixture.partners.len()
    ));
    Ok(())
}
