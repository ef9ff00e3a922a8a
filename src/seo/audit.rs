//! SEO audit
//!
//! Non-fatal lint over the registry. Findings are logged at startup and printed
//! by `build_site`, which stops before exporting on any error. Run it with
//! `--audit-only` to skip the export. Nothing here blocks rendering.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::content::ContentRegistry;

pub const MAX_TITLE_CHARS: usize = 60;
pub const MAX_DESCRIPTION_CHARS: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditRule {
    TitleEmpty,
    TitleTooLong,
    DescriptionEmpty,
    DescriptionTooLong,
    KeywordsMissing,
    FaqQuestionEmpty,
    FaqAnswerEmpty,
    DuplicateTitle,
}

impl AuditRule {
    pub fn severity(&self) -> Severity {
        match self {
            AuditRule::TitleEmpty
            | AuditRule::DescriptionEmpty
            | AuditRule::FaqQuestionEmpty
            | AuditRule::FaqAnswerEmpty => Severity::Error,
            AuditRule::TitleTooLong
            | AuditRule::DescriptionTooLong
            | AuditRule::KeywordsMissing
            | AuditRule::DuplicateTitle => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditFinding {
    pub path: String,
    pub rule: AuditRule,
    pub severity: Severity,
    pub message: String,
}

impl AuditFinding {
    fn new(path: &str, rule: AuditRule, message: String) -> Self {
        Self {
            path: path.to_string(),
            rule,
            severity: rule.severity(),
            message,
        }
    }
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}: {}", self.severity, self.path, self.message)
    }
}

/// Check every page. Findings come out in registry order.
pub fn audit(registry: &ContentRegistry) -> Vec<AuditFinding> {
    let mut findings = Vec::new();
    let mut first_by_title: FxHashMap<&str, &str> = FxHashMap::default();

    for page in registry.pages() {
        let path = page.path.as_str();
        let title = page.seo.title.trim();
        let description = page.seo.description.trim();

        // Character counts, so "£" counts once
        let title_len = title.chars().count();
        let description_len = description.chars().count();

        if title.is_empty() {
            findings.push(AuditFinding::new(path, AuditRule::TitleEmpty, "title is empty".to_string()));
        } else if title_len > MAX_TITLE_CHARS {
            findings.push(AuditFinding::new(
                path,
                AuditRule::TitleTooLong,
                format!("title is {} characters (max {})", title_len, MAX_TITLE_CHARS),
            ));
        }

        if description.is_empty() {
            findings.push(AuditFinding::new(
                path,
                AuditRule::DescriptionEmpty,
                "description is empty".to_string(),
            ));
        } else if description_len > MAX_DESCRIPTION_CHARS {
            findings.push(AuditFinding::new(
                path,
                AuditRule::DescriptionTooLong,
                format!(
                    "description is {} characters (max {})",
                    description_len, MAX_DESCRIPTION_CHARS
                ),
            ));
        }

        if page.seo.keywords.iter().all(|k| k.trim().is_empty()) {
            findings.push(AuditFinding::new(
                path,
                AuditRule::KeywordsMissing,
                "no keywords".to_string(),
            ));
        }

        for (idx, faq) in page.faqs().iter().enumerate() {
            if faq.question.trim().is_empty() {
                findings.push(AuditFinding::new(
                    path,
                    AuditRule::FaqQuestionEmpty,
                    format!("FAQ #{} has an empty question", idx + 1),
                ));
            }
            if faq.answer.trim().is_empty() {
                findings.push(AuditFinding::new(
                    path,
                    AuditRule::FaqAnswerEmpty,
                    format!("FAQ #{} has an empty answer", idx + 1),
                ));
            }
        }

        if !title.is_empty() {
            if let Some(first) = first_by_title.get(title) {
                findings.push(AuditFinding::new(
                    path,
                    AuditRule::DuplicateTitle,
                    format!("title duplicates {}", first),
                ));
            } else {
                first_by_title.insert(title, path);
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FaqEntry;

    fn registry_with(edit: impl Fn(&mut Vec<crate::content::PageContent>)) -> ContentRegistry {
        let mut pages = crate::content::pages::builtin_pages();
        edit(&mut pages);
        ContentRegistry::new(pages).unwrap()
    }

    #[test]
    fn test_builtin_pages_are_clean() {
        let registry = ContentRegistry::builtin().unwrap();
        let findings = audit(&registry);
        assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
    }

    #[test]
    fn test_long_title_and_description() {
        let registry = registry_with(|pages| {
            pages[1].seo.title = "x".repeat(61);
            pages[1].seo.description = "y".repeat(161);
        });
        let rules: Vec<AuditRule> = audit(&registry).iter().map(|f| f.rule).collect();
        assert_eq!(rules, vec![AuditRule::TitleTooLong, AuditRule::DescriptionTooLong]);
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        let registry = registry_with(|pages| {
            // 60 characters, 61 bytes
            pages[1].seo.title = format!("£{}", "a".repeat(59));
        });
        assert!(audit(&registry).is_empty());
    }

    #[test]
    fn test_empty_fields_are_errors() {
        let registry = registry_with(|pages| {
            pages[2].seo.title = " ".to_string();
            pages[2].seo.keywords.clear();
            pages[2].faqs = Some(vec![FaqEntry::new("", "Answer"), FaqEntry::new("Q?", "")]);
        });
        let findings = audit(&registry);
        let rules: Vec<AuditRule> = findings.iter().map(|f| f.rule).collect();
        assert_eq!(
            rules,
            vec![
                AuditRule::TitleEmpty,
                AuditRule::KeywordsMissing,
                AuditRule::FaqQuestionEmpty,
                AuditRule::FaqAnswerEmpty,
            ]
        );
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[1].severity, Severity::Warning);
        assert!(findings[3].message.contains("FAQ #2"));
    }

    #[test]
    fn test_duplicate_title() {
        let registry = registry_with(|pages| {
            pages[3].seo.title = pages[2].seo.title.clone();
        });
        let findings = audit(&registry);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, AuditRule::DuplicateTitle);
        assert_eq!(findings[0].path, "/services/teeth-whitening");
        assert!(findings[0].message.contains("/services/dental-implants"));
    }
}
