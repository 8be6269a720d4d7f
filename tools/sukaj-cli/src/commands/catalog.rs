//! Catalog search command.

use anyhow::Result;
use serde::Serialize;
use sukaj_catalog::prelude::*;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::truncate;

#[derive(Serialize)]
struct CatalogReport<'a> {
    total: usize,
    sort: &'static str,
    filters: Vec<ActiveFilter>,
    products: Vec<&'a Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facets: Option<&'a [Facet]>,
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let filters = build_filter(&args);

    if SortOption::from_str(&args.sort).as_str() != args.sort {
        ctx.output
            .warn(&format!("Unknown sort '{}', using relevance", args.sort));
    }

    let results = catalog.search(&filters);
    let chips = filters.active_filters(&catalog);

    let logger = ctx.logger("catalog").with_component("catalog");
    logger
        .debug_builder("catalog search")
        .field("matches", results.total)
        .field("constraints", chips.len())
        .field("sort", filters.sort.as_str())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&CatalogReport {
            total: results.total,
            sort: filters.sort.as_str(),
            filters: chips,
            products: results.items.clone(),
            facets: args.facets.then_some(results.facets.as_slice()),
        });
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} of {} products · {}",
        results.total,
        catalog.len(),
        filters.sort.display_name()
    ));
    let labels: Vec<String> = chips.into_iter().map(|c| c.label).collect();
    ctx.output.chips(&labels);

    if results.is_empty() {
        ctx.output
            .warn("No products match these filters. Remove a filter or clear them all.");
        return Ok(());
    }

    let widths = [28, 20, 8, 12, 14];
    ctx.output
        .table_row(&["NAME", "PARTNER", "MATERIAL", "APPLICATION", "DIAMETER"], &widths);
    for product in &results.items {
        let name = truncate(&product.name, widths[0]);
        let partner = truncate(&product.partner_name, widths[1]);
        let diameter = product.diameter.display();
        ctx.output.table_row(
            &[
                &name,
                &partner,
                &product.material,
                &product.application,
                &diameter,
            ],
            &widths,
        );
    }

    if args.facets {
        for facet in &results.facets {
            ctx.output.header(&facet.name);
            for value in &facet.values {
                let marker = if value.selected { "*" } else { " " };
                ctx.output
                    .kv(&format!("{}{}", marker, value.value), &value.count.to_string());
            }
        }
    }

    Ok(())
}

/// Translate command-line flags into a filter state.
fn build_filter(args: &CatalogArgs) -> FilterState {
    let mut filters = FilterState::new().with_sort(SortOption::from_str(&args.sort));

    if let Some(search) = &args.search {
        filters = filters.with_search(search.as_str());
    }
    for material in &args.materials {
        filters = filters.with_material(material.as_str());
    }
    for application in &args.applications {
        filters = filters.with_application(application.as_str());
    }
    if args.diameter_min.is_some() || args.diameter_max.is_some() {
        // Bounds are taken as typed; a window past every product matches nothing.
        let min = args.diameter_min.unwrap_or(DiameterWindow::FULL.min);
        let max = args
            .diameter_max
            .unwrap_or_else(|| min.max(DiameterWindow::FULL.max));
        filters = filters.with_diameter(DiameterWindow::new(min, max));
    }
    if let Some(category) = &args.category {
        filters = filters.with_category(category.to_lowercase());
    }
    if let Some(partner) = &args.partner {
        filters = filters.with_partner(partner.as_str());
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CatalogArgs {
        CatalogArgs {
            search: None,
            materials: Vec::new(),
            applications: Vec::new(),
            diameter_min: None,
            diameter_max: None,
            category: None,
            partner: None,
            sort: "relevance".to_string(),
            facets: false,
        }
    }

    #[test]
    fn test_no_flags_is_default_filter() {
        assert!(build_filter(&args()).is_default());
    }

    #[test]
    fn test_flags_map_to_filter() {
        let filters = build_filter(&CatalogArgs {
            search: Some("pipe".into()),
            materials: vec!["HDPE".into(), "PVC".into()],
            category: Some("Civil".into()),
            partner: Some("teqja".into()),
            sort: "diameter_desc".into(),
            ..args()
        });

        assert_eq!(filters.search, "pipe");
        assert_eq!(filters.materials, vec!["HDPE", "PVC"]);
        assert_eq!(filters.category.as_deref(), Some("civil"));
        assert_eq!(filters.partner, Some(PartnerId::new("teqja")));
        assert_eq!(filters.sort, SortOption::DiameterDesc);
    }

    #[test]
    fn test_one_sided_diameter_bound_fills_the_other() {
        let filters = build_filter(&CatalogArgs {
            diameter_min: Some(1500),
            ..args()
        });
        assert_eq!(filters.diameter, DiameterWindow::new(1500, 2000));

        let filters = build_filter(&CatalogArgs {
            diameter_min: Some(2500),
            ..args()
        });
        assert_eq!(filters.diameter, DiameterWindow::new(2500, 2500));
    }

    #[test]
    fn test_out_of_range_window_is_kept_and_matches_no_pipe() {
        let filters = build_filter(&CatalogArgs {
            diameter_min: Some(2001),
            diameter_max: Some(2500),
            ..args()
        });
        assert_eq!(filters.diameter, DiameterWindow::new(2001, 2500));

        let catalog = Catalog::bundled().unwrap();
        let results = catalog.search(&filters);
        assert!(results.items.iter().all(|p| !p.has_diameter()));
        assert!(!results
            .items
            .iter()
            .any(|p| p.name == "Spiral Sewage Pipe" || p.name == "Corrugated HDPE SN4"));
    }
}
