//! Header/footer data shared by every page.

use serde::Serialize;

use crate::compose::LinkView;
use crate::content::{ContentRegistry, Practice};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteChrome {
    pub practice_name: String,
    pub phone: LinkView,
    pub booking_href: String,
    pub directions_href: String,
    pub email: String,
    pub address_line: String,
    /// "Monday - Thursday: 08:30-17:30"
    pub opening_lines: Vec<String>,
    /// Every page except home, in registry order
    pub nav: Vec<LinkView>,
}

impl SiteChrome {
    pub fn new(practice: &Practice, registry: &ContentRegistry) -> Self {
        let nav = registry
            .pages()
            .iter()
            .filter(|p| !p.is_home())
            .map(|p| LinkView {
                label: p.breadcrumb_label.clone(),
                href: p.path.clone(),
            })
            .collect();

        let opening_lines = practice
            .opening_hours
            .iter()
            .map(|h| {
                let days = match (h.days.first(), h.days.last()) {
                    (Some(first), Some(last)) if first != last => format!("{} - {}", first, last),
                    (Some(first), _) => first.clone(),
                    _ => String::new(),
                };
                format!("{}: {}-{}", days, h.opens, h.closes)
            })
            .collect();

        Self {
            practice_name: practice.name.clone(),
            phone: LinkView {
                label: practice.telephone_display.clone(),
                href: practice.telephone_href.clone(),
            },
            booking_href: practice.booking_url.clone(),
            directions_href: practice.directions_url.clone(),
            email: practice.email.clone(),
            address_line: practice.address.one_line(),
            opening_lines,
            nav,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_from_builtin() {
        let registry = ContentRegistry::builtin().unwrap();
        let chrome = SiteChrome::new(&Practice::builtin(), &registry);
        assert_eq!(chrome.nav.len(), registry.len() - 1);
        assert!(chrome.nav.iter().all(|l| l.href != "/"));
        assert_eq!(chrome.opening_lines[0], "Monday - Thursday: 08:30-17:30");
        assert_eq!(chrome.opening_lines[1], "Friday: 08:30-16:00");
    }
}
