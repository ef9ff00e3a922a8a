//! Pricing and comparison tables.

use super::heading_or;
use crate::compose::view_models::{ComparisonRowView, ComparisonView, PriceRowView, PricingView};
use crate::content::{PageContent, PricingTier};

pub const DEFAULT_PRICING_HEADING: &str = "Pricing";

pub fn pricing(page: &PageContent) -> Option<PricingView> {
    let tiers: &[PricingTier] = page.pricing.as_deref().unwrap_or_default();
    if tiers.is_empty() {
        return None;
    }

    Some(PricingView {
        heading: heading_or(&page.headings.pricing, DEFAULT_PRICING_HEADING),
        rows: tiers
            .iter()
            .map(|tier| PriceRowView {
                name: tier.name.clone(),
                price: tier.price.clone(),
                note: tier.note.clone().filter(|n| !n.trim().is_empty()),
            })
            .collect(),
    })
}

/// Rows are padded or truncated to the column count so the table stays rectangular.
pub fn comparison(page: &PageContent) -> Option<ComparisonView> {
    let table = page.comparison.as_ref()?;
    if table.columns.is_empty() || table.rows.is_empty() {
        return None;
    }

    let width = table.columns.len();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut values: Vec<String> = row.values.iter().take(width).cloned().collect();
            values.resize(width, String::new());
            ComparisonRowView {
                feature: row.feature.clone(),
                values,
            }
        })
        .collect();

    Some(ComparisonView {
        heading: table.heading.clone(),
        columns: table.columns.clone(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ComparisonRow, ComparisonTable, ContentRegistry};

    fn page(path: &str) -> PageContent {
        ContentRegistry::builtin().unwrap().get(path).unwrap().clone()
    }

    #[test]
    fn test_pricing_rows_verbatim() {
        let view = pricing(&page("/services/dental-implants")).unwrap();
        assert_eq!(view.heading, "Implant prices");
        assert_eq!(view.rows[2].price, "£2,495");
        assert!(view.rows[2].note.is_none());
        assert_eq!(view.rows[3].price, "From £450");
    }

    #[test]
    fn test_comparison_is_rectangular() {
        let mut p = page("/compare/implants-vs-bridges");
        p.comparison = Some(ComparisonTable {
            heading: "A vs B".to_string(),
            columns: vec!["A".to_string(), "B".to_string()],
            rows: vec![
                ComparisonRow::new("short", &["only a"]),
                ComparisonRow::new("long", &["a", "b", "c"]),
            ],
        });
        let view = comparison(&p).unwrap();
        assert_eq!(view.rows[0].values, vec!["only a".to_string(), String::new()]);
        assert_eq!(view.rows[1].values, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_missing_tables() {
        let p = page("/services/teeth-whitening");
        assert!(pricing(&p).is_none());
        assert!(comparison(&p).is_none());
    }
}
