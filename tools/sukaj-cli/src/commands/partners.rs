//! Partner directory command.

use anyhow::{anyhow, Result};
use serde::Serialize;
use sukaj_catalog::prelude::*;

use super::PartnersArgs;
use crate::context::Context;

#[derive(Serialize)]
struct TypeCount {
    partner_type: PartnerType,
    label: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct PartnersReport<'a> {
    filter: &'static str,
    counts: Vec<TypeCount>,
    partners: Vec<&'a Partner>,
}

/// Run the partners command.
pub fn run(args: PartnersArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let filter: PartnerTypeFilter = args.partner_type.parse().map_err(|e| anyhow!("{}", e))?;

    let partners: Vec<&Partner> = if args.featured {
        catalog
            .featured_partners()
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect()
    } else {
        catalog.partners_by_type(filter)
    };

    let counts: Vec<TypeCount> = catalog
        .partner_type_counts()
        .into_iter()
        .map(|(partner_type, count)| TypeCount {
            partner_type,
            label: partner_type.display_name(),
            count,
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&PartnersReport {
            filter: filter.as_str(),
            counts,
            partners,
        });
        return Ok(());
    }

    let tabs: Vec<String> = std::iter::once(format!("All ({})", catalog.partners().len()))
        .chain(counts.iter().map(|c| format!("{} ({})", c.label, c.count)))
        .collect();
    ctx.output.header("Partners");
    ctx.output.info(&tabs.join(" · "));

    if partners.is_empty() {
        ctx.output.warn("No partners of this type.");
        return Ok(());
    }

    for partner in partners {
        ctx.output.header(&partner.name);
        ctx.output.kv("country", &partner.country);
        ctx.output.kv("type", partner.partner_type.display_name());
        ctx.output.kv("specialty", &partner.specialty);
        if partner.has_website() {
            ctx.output.kv("website", &partner.website);
        }
        if !partner.key_standards.is_empty() {
            ctx.output.kv("standards", &partner.key_standards.join(", "));
        }
        let products = catalog.products_for_partner(&partner.id);
        ctx.output.kv("products", &products.len().to_string());
        for product in products {
            ctx.output.list_item(&product.name);
        }
    }

    Ok(())
}
