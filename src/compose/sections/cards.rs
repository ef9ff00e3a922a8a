//! Card grids for benefits and treatment options.

use super::heading_or;
use crate::compose::styles::{accent_for_index, icon_for};
use crate::compose::view_models::{CardGridView, CardView};
use crate::content::{Benefit, PageContent, ServiceOffering};

pub const DEFAULT_BENEFITS_HEADING: &str = "Why patients choose us";
pub const DEFAULT_SERVICES_HEADING: &str = "Treatment options";

pub fn benefits(page: &PageContent) -> Option<CardGridView> {
    let benefits: &[Benefit] = page.benefits.as_deref().unwrap_or_default();
    if benefits.is_empty() {
        return None;
    }

    let cards = benefits
        .iter()
        .enumerate()
        .map(|(idx, benefit)| CardView {
            title: benefit.title.clone(),
            body: benefit.body.clone(),
            icon_svg: icon_for(&benefit.icon).map(|icon| icon.svg_path().to_string()),
            accent_classes: accent_for_index(idx).classes.to_string(),
            price: None,
            duration: None,
            bullets: Vec::new(),
        })
        .collect();

    Some(CardGridView {
        id: "benefits".to_string(),
        heading: heading_or(&page.headings.benefits, DEFAULT_BENEFITS_HEADING),
        cards,
    })
}

pub fn services(page: &PageContent) -> Option<CardGridView> {
    let services: &[ServiceOffering] = page.services.as_deref().unwrap_or_default();
    if services.is_empty() {
        return None;
    }

    let cards = services
        .iter()
        .enumerate()
        .map(|(idx, service)| CardView {
            title: service.name.clone(),
            body: service.description.clone(),
            icon_svg: None,
            accent_classes: accent_for_index(idx).classes.to_string(),
            price: non_empty(&service.price),
            duration: non_empty(&service.duration),
            bullets: service.benefits.clone(),
        })
        .collect();

    Some(CardGridView {
        id: "services".to_string(),
        heading: heading_or(&page.headings.services, DEFAULT_SERVICES_HEADING),
        cards,
    })
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;

    fn veneers() -> PageContent {
        ContentRegistry::builtin()
            .unwrap()
            .get("/services/veneers")
            .unwrap()
            .clone()
    }

    #[test]
    fn test_service_price_is_verbatim() {
        let grid = services(&veneers()).unwrap();
        let makeover = grid.cards.iter().find(|c| c.title == "Full smile makeover").unwrap();
        assert_eq!(makeover.price.as_deref(), Some("£2,500"));
        assert_eq!(makeover.duration.as_deref(), Some("3-4 visits"));
        assert_eq!(makeover.bullets.len(), 3);
        assert_eq!(grid.heading, "Choose the right veneer for you");
    }

    #[test]
    fn test_unknown_icon_is_omitted() {
        let mut page = veneers();
        page.benefits = Some(vec![
            Benefit::new("rocket", "Fast", "Quick."),
            Benefit::new("clock", "Timely", "On time."),
        ]);
        let grid = benefits(&page).unwrap();
        assert!(grid.cards[0].icon_svg.is_none());
        assert!(grid.cards[1].icon_svg.is_some());
        assert_eq!(grid.heading, DEFAULT_BENEFITS_HEADING);
    }

    #[test]
    fn test_absent_or_empty_arrays_yield_no_grid() {
        let mut page = veneers();
        page.benefits = None;
        page.services = Some(Vec::new());
        assert!(benefits(&page).is_none());
        assert!(services(&page).is_none());
    }
}
