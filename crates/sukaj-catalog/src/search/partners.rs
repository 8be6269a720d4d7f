//! Partner directory faceting.

use std::str::FromStr;

use crate::catalog::{Catalog, Partner, PartnerType};
use serde::{Deserialize, Serialize};

/// Partner-type constraint for the directory tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PartnerTypeFilter {
    #[default]
    All,
    Only(PartnerType),
}

impl PartnerTypeFilter {
    pub fn matches(&self, partner: &Partner) -> bool {
        match self {
            PartnerTypeFilter::All => true,
            PartnerTypeFilter::Only(t) => partner.partner_type == *t,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerTypeFilter::All => "all",
            PartnerTypeFilter::Only(t) => t.as_str(),
        }
    }
}

impl From<Option<PartnerType>> for PartnerTypeFilter {
    fn from(t: Option<PartnerType>) -> Self {
        t.map(PartnerTypeFilter::Only).unwrap_or(PartnerTypeFilter::All)
    }
}

impl FromStr for PartnerTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(PartnerTypeFilter::All);
        }
        PartnerType::from_str(s)
            .map(PartnerTypeFilter::Only)
            .ok_or_else(|| format!("unknown partner type: {}", s))
    }
}

impl Catalog {
    /// Partners of the given type, in fixture order.
    pub fn partners_by_type(&self, filter: PartnerTypeFilter) -> Vec<&Partner> {
        self.partners().iter().filter(|p| filter.matches(p)).collect()
    }

    /// Number of partners per type, in tab order (types with no partners included).
    pub fn partner_type_counts(&self) -> Vec<(PartnerType, usize)> {
        PartnerType::ALL
            .iter()
            .map(|&t| {
                let count = self.partners().iter().filter(|p| p.partner_type == t).count();
                (t, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_every_partner_in_order() {
        let catalog = Catalog::bundled().unwrap();
        let all = catalog.partners_by_type(PartnerTypeFilter::All);
        assert_eq!(all.len(), catalog.partners().len());
        assert_eq!(all[0].id.as_str(), "konti-hidroplast");
        assert_eq!(all[11].id.as_str(), "albplast");
    }

    #[test]
    fn test_type_filter_preserves_fixture_order() {
        let catalog = Catalog::bundled().unwrap();
        let hoses: Vec<&str> = catalog
            .partners_by_type(PartnerTypeFilter::Only(PartnerType::Hoses))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(hoses, vec!["fitt", "sel-polimer", "perplast"]);
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("all".parse(), Ok(PartnerTypeFilter::All));
        assert_eq!("ALL".parse(), Ok(PartnerTypeFilter::All));
        assert_eq!(
            "recycler".parse(),
            Ok(PartnerTypeFilter::Only(PartnerType::Recycler))
        );
        assert!("shipyard".parse::<PartnerTypeFilter>().is_err());
        assert_eq!(PartnerTypeFilter::from(None), PartnerTypeFilter::All);
    }

    #[test]
    fn test_type_counts() {
        let catalog = Catalog::bundled().unwrap();
        let counts = catalog.partner_type_counts();
        assert_eq!(
            counts,
            vec![
                (PartnerType::Manufacturer, 3),
                (PartnerType::Recycler, 2),
                (PartnerType::Packaging, 1),
                (PartnerType::Hoses, 3),
                (PartnerType::LocalDistributor, 3),
            ]
        );
    }
}
