//! View Models for composed pages
//!
//! Output of the composer. Consumed by the askama templates and served as-is
//! by the JSON API.

use serde::Serialize;

use crate::content::PageKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedPage {
    pub path: String,
    pub kind: PageKind,
    pub title: String,
    pub sections: Vec<Section>,
}

impl ComposedPage {
    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(Section::name).collect()
    }

    pub fn faq(&self) -> Option<&FaqView> {
        self.sections.iter().find_map(|s| match s {
            Section::Faq(faq) => Some(faq),
            _ => None,
        })
    }
}

/// One visual block, in page order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Section {
    Hero(HeroView),
    CardGrid(CardGridView),
    Pricing(PricingView),
    Comparison(ComparisonView),
    Process(ProcessView),
    ReviewThemes(ReviewThemesView),
    Article(ArticleView),
    Testimonials(TestimonialsView),
    Faq(FaqView),
    CallToAction(CtaView),
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Hero(_) => "hero",
            Section::CardGrid(_) => "card_grid",
            Section::Pricing(_) => "pricing",
            Section::Comparison(_) => "comparison",
            Section::Process(_) => "process",
            Section::ReviewThemes(_) => "review_themes",
            Section::Article(_) => "article",
            Section::Testimonials(_) => "testimonials",
            Section::Faq(_) => "faq",
            Section::CallToAction(_) => "call_to_action",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub eyebrow: String,
    pub eyebrow_classes: String,
    pub heading: String,
    pub intro: String,
    pub badges: Vec<String>,
    pub breadcrumbs: Vec<LinkView>,
    pub primary: LinkView,
    pub secondary: LinkView,
}

// ============================================================================
// Card grids (benefits, treatment options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardGridView {
    /// Anchor id, e.g. "benefits" or "services"
    pub id: String,
    pub heading: String,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub title: String,
    pub body: String,
    pub icon_svg: Option<String>,
    pub accent_classes: String,
    /// Verbatim display price
    pub price: Option<String>,
    pub duration: Option<String>,
    pub bullets: Vec<String>,
}

// ============================================================================
// Tables
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingView {
    pub heading: String,
    pub rows: Vec<PriceRowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRowView {
    pub name: String,
    pub price: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonView {
    pub heading: String,
    pub columns: Vec<String>,
    /// Every row has exactly `columns.len()` values
    pub rows: Vec<ComparisonRowView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRowView {
    pub feature: String,
    pub values: Vec<String>,
}

// ============================================================================
// Process, reviews, article
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessView {
    pub heading: String,
    pub steps: Vec<StepView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepView {
    /// 1-based
    pub number: usize,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewThemesView {
    pub heading: String,
    pub rating: String,
    pub review_count: u32,
    pub source: String,
    pub themes: Vec<ThemeView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeView {
    pub label: String,
    pub mentions: u32,
    /// Share of all reviews mentioning this theme, 0-100
    pub share_percent: u32,
    pub summary: String,
    pub badge_label: String,
    pub badge_classes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleView {
    /// Pre-rendered from trusted markdown
    pub html: String,
}

// ============================================================================
// Testimonials, FAQ, call to action
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialsView {
    pub heading: String,
    pub items: Vec<TestimonialView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialView {
    pub quote: String,
    pub author: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqView {
    pub heading: String,
    pub items: Vec<FaqItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqItemView {
    /// Anchor id: faq-1, faq-2, ...
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaView {
    pub heading: String,
    pub body: String,
    pub booking: LinkView,
    pub phone: LinkView,
    pub directions: LinkView,
    pub address_line: String,
}
