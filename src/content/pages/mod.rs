//! Built-in page literals.
//!
//! One module per page. Order here is navigation and sitemap order.

use chrono::NaiveDate;

pub mod home;
pub mod services_veneers;
pub mod services_dental_implants;
pub mod services_teeth_whitening;
pub mod gedling_childrens_dentistry;
pub mod gedling_emergency_dentist;
pub mod compare_implants_vs_bridges;
pub mod reviews_patient_feedback;

use super::types::PageContent;

pub fn builtin_pages() -> Vec<PageContent> {
    vec![
        home::page(),
        services_veneers::page(),
        services_dental_implants::page(),
        services_teeth_whitening::page(),
        gedling_childrens_dentistry::page(),
        gedling_emergency_dentist::page(),
        compare_implants_vs_bridges::page(),
        reviews_patient_feedback::page(),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn reviewed(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_distinct() {
        let pages = builtin_pages();
        let mut paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), pages.len());
    }

    #[test]
    fn test_review_dates_are_real() {
        for page in builtin_pages() {
            assert!(page.last_reviewed > NaiveDate::MIN, "{} has no review date", page.path);
        }
    }
}
