//! Review-analysis themes with sentiment badges.

use super::heading_or;
use crate::compose::styles::sentiment_badge;
use crate::compose::view_models::{ReviewThemesView, ThemeView};
use crate::content::PageContent;

pub const DEFAULT_REVIEWS_HEADING: &str = "What our reviews tell us";

pub fn generate(page: &PageContent) -> Option<ReviewThemesView> {
    let analysis = page.reviews.as_ref()?;
    if analysis.themes.is_empty() {
        return None;
    }

    let themes = analysis
        .themes
        .iter()
        .map(|theme| {
            let badge = sentiment_badge(theme.sentiment);
            ThemeView {
                label: theme.label.clone(),
                mentions: theme.mentions,
                share_percent: share_percent(theme.mentions, analysis.review_count),
                summary: theme.summary.clone(),
                badge_label: badge.label.to_string(),
                badge_classes: badge.classes.to_string(),
            }
        })
        .collect();

    Some(ReviewThemesView {
        heading: heading_or(&page.headings.reviews, DEFAULT_REVIEWS_HEADING),
        rating: analysis.rating.clone(),
        review_count: analysis.review_count,
        source: analysis.source.clone(),
        themes,
    })
}

/// Rounded share, capped at 100. Zero reviews gives zero.
fn share_percent(mentions: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let pct = (u64::from(mentions) * 100 + u64::from(total) / 2) / u64::from(total);
    pct.min(100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(188, 412), 46);
        assert_eq!(share_percent(12, 412), 3);
        assert_eq!(share_percent(5, 0), 0);
        assert_eq!(share_percent(500, 412), 100);
    }

    #[test]
    fn test_review_themes() {
        let registry = ContentRegistry::builtin().unwrap();
        let view = generate(registry.get("/reviews/patient-feedback-analysis").unwrap()).unwrap();
        assert_eq!(view.heading, "Themes from 412 reviews");
        assert_eq!(view.rating, "4.9");
        assert_eq!(view.themes.len(), 5);
        assert_eq!(view.themes[3].badge_label, "Mixed");
        assert_eq!(view.themes[4].badge_label, "Needs work");
    }

    #[test]
    fn test_no_analysis() {
        let registry = ContentRegistry::builtin().unwrap();
        assert!(generate(registry.get("/services/veneers").unwrap()).is_none());
    }
}
