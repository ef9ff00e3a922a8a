//! Style and icon lookup tables
//!
//! Maps content keys (icon names, sentiments, page kinds) to presentation
//! descriptors. Unknown icon keys resolve to `None` and the icon is omitted.

use serde::Serialize;

use crate::content::{PageKind, Sentiment};

/// Display label plus utility classes for a badge or accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleDescriptor {
    pub label: &'static str,
    pub classes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Sparkles,
    Shield,
    Clock,
    Heart,
    Tooth,
    Star,
    Smile,
    Calendar,
    Users,
    Pound,
    MapPin,
    Home,
}

impl Icon {
    /// Inner SVG markup for a 24x24 stroke icon.
    pub fn svg_path(&self) -> &'static str {
        match self {
            Icon::Sparkles => r#"<path d="M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2Z"/><path d="M5 3v4"/><path d="M3 5h4"/>"#,
            Icon::Shield => r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10Z"/>"#,
            Icon::Clock => r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#,
            Icon::Heart => r#"<path d="M19 14c1.5-1.5 3-3.2 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.8 0-3 .5-4.5 2-1.5-1.5-2.7-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4 3 5.5l7 7Z"/>"#,
            Icon::Tooth => r#"<path d="M7 3c-2.5 0-4 2-4 4.5 0 3 1.5 4.5 2 7.5s1 6 2.5 6 1.5-4 2.5-5.5c.5-.7 1.5-.7 2 0 1 1.5 1 5.5 2.5 5.5s2-3 2.5-6 2-4.5 2-7.5C21 5 19.5 3 17 3c-2 0-3 1-5 1S9 3 7 3Z"/>"#,
            Icon::Star => r#"<path d="M12 2l3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1Z"/>"#,
            Icon::Smile => r#"<circle cx="12" cy="12" r="10"/><path d="M8 14s1.5 2 4 2 4-2 4-2"/><path d="M9 9h.01"/><path d="M15 9h.01"/>"#,
            Icon::Calendar => r#"<rect x="3" y="4" width="18" height="18" rx="2"/><path d="M16 2v4"/><path d="M8 2v4"/><path d="M3 10h18"/>"#,
            Icon::Users => r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.9"/><path d="M16 3.1a4 4 0 0 1 0 7.8"/>"#,
            Icon::Pound => r#"<path d="M18 7c0-5.3-8-5.3-8 0v10"/><path d="M6 13h10"/><path d="M6 21h12"/>"#,
            Icon::MapPin => r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
            Icon::Home => r#"<path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2Z"/><path d="M9 22V12h6v10"/>"#,
        }
    }
}

static ICON_TABLE: &[(&str, Icon)] = &[
    ("sparkles", Icon::Sparkles),
    ("shield", Icon::Shield),
    ("clock", Icon::Clock),
    ("heart", Icon::Heart),
    ("tooth", Icon::Tooth),
    ("star", Icon::Star),
    ("smile", Icon::Smile),
    ("calendar", Icon::Calendar),
    ("users", Icon::Users),
    ("pound", Icon::Pound),
    ("map-pin", Icon::MapPin),
    ("home", Icon::Home),
];

/// Resolve an icon key. Case and surrounding whitespace are ignored.
pub fn icon_for(key: &str) -> Option<Icon> {
    let key = key.trim();
    ICON_TABLE
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|&(_, icon)| icon)
}

/// Card accents, cycled by card position.
static ACCENT_PALETTE: &[StyleDescriptor] = &[
    StyleDescriptor { label: "teal", classes: "bg-teal-50 text-teal-700 ring-teal-200" },
    StyleDescriptor { label: "sky", classes: "bg-sky-50 text-sky-700 ring-sky-200" },
    StyleDescriptor { label: "violet", classes: "bg-violet-50 text-violet-700 ring-violet-200" },
    StyleDescriptor { label: "amber", classes: "bg-amber-50 text-amber-700 ring-amber-200" },
];

pub fn accent_for_index(index: usize) -> StyleDescriptor {
    ACCENT_PALETTE[index % ACCENT_PALETTE.len()]
}

pub fn sentiment_badge(sentiment: Sentiment) -> StyleDescriptor {
    match sentiment {
        Sentiment::Positive => StyleDescriptor {
            label: "Positive",
            classes: "bg-emerald-100 text-emerald-800",
        },
        Sentiment::Mixed => StyleDescriptor {
            label: "Mixed",
            classes: "bg-amber-100 text-amber-800",
        },
        Sentiment::Negative => StyleDescriptor {
            label: "Needs work",
            classes: "bg-red-100 text-red-800",
        },
    }
}

/// Eyebrow styling per page kind.
pub fn kind_badge(kind: PageKind) -> StyleDescriptor {
    match kind {
        PageKind::Home => StyleDescriptor { label: "Practice", classes: "text-teal-700" },
        PageKind::Service => StyleDescriptor { label: "Treatment", classes: "text-sky-700" },
        PageKind::Location => StyleDescriptor { label: "Local care", classes: "text-teal-700" },
        PageKind::Comparison => StyleDescriptor { label: "Comparison", classes: "text-violet-700" },
        PageKind::ReviewAnalysis => StyleDescriptor { label: "Reviews", classes: "text-amber-700" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_lookup() {
        assert_eq!(icon_for("shield"), Some(Icon::Shield));
        assert_eq!(icon_for(" Map-Pin "), Some(Icon::MapPin));
        assert_eq!(icon_for("rocket"), None);
        assert_eq!(icon_for(""), None);
    }

    #[test]
    fn test_every_icon_has_svg() {
        for (key, icon) in ICON_TABLE {
            assert!(icon.svg_path().starts_with('<'), "icon {} has no markup", key);
        }
    }

    #[test]
    fn test_accent_cycles() {
        assert_eq!(accent_for_index(0), accent_for_index(ACCENT_PALETTE.len()));
        assert_ne!(accent_for_index(0), accent_for_index(1));
    }

    #[test]
    fn test_sentiment_badges_distinct() {
        let labels = [
            sentiment_badge(Sentiment::Positive).label,
            sentiment_badge(Sentiment::Mixed).label,
            sentiment_badge(Sentiment::Negative).label,
        ];
        assert_eq!(labels, ["Positive", "Mixed", "Needs work"]);
    }
}
