//! Text rendering for analysis results and catalogs.
//!
//! The result card mirrors the results screen: a heading with the restriction
//! badge, then Summary, Requirements, and Sources & Citations sections.

use chrono::DateTime;
use tradereg_core::catalog::{ACTIVITY_TYPES, COUNTRIES, PRODUCT_CATEGORIES};
use tradereg_core::{AnalysisResult, ParsedAnalysisResult};

/// What the analysis was about, shown under the card title.
pub struct Heading<'a> {
    pub product: Option<&'a str>,
    pub activity: &'a str,
    pub country: &'a str,
}

impl<'a> Heading<'a> {
    /// Heading taken from the echoed request fields of a result.
    pub fn from_result(result: &'a AnalysisResult) -> Self {
        Self {
            product: None,
            activity: &result.activity_type,
            country: &result.country,
        }
    }
}

/// Render a classified result as a vertical card.
pub fn render_card(
    parsed: &ParsedAnalysisResult,
    heading: &Heading<'_>,
    tariffs: Option<&[&str]>,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!("=== Regulatory Analysis {} ===", parsed.short_id()));
    let subject = match heading.product {
        Some(product) => format!("{product} - {} to {}", heading.activity, heading.country),
        None => format!("{} to {}", heading.activity, heading.country),
    };
    if !heading.activity.is_empty() || !heading.country.is_empty() {
        lines.push(subject);
    }
    lines.push(format!("Restriction: {}", parsed.restriction_level.label()));
    lines.push(String::new());

    lines.push("Summary".to_string());
    if parsed.summary.trim().is_empty() {
        lines.push("  (no summary provided)".to_string());
    } else {
        lines.extend(parsed.summary.lines().map(|l| format!("  {l}")));
    }
    lines.push(String::new());

    lines.push("Requirements".to_string());
    push_numbered(&mut lines, &parsed.key_requirements);
    lines.push(String::new());

    if let Some(tariffs) = tariffs {
        lines.push("Tariffs".to_string());
        if tariffs.is_empty() {
            lines.push("  none detected".to_string());
        } else {
            push_numbered(&mut lines, tariffs);
        }
        lines.push(String::new());
    }

    lines.push("Sources & Citations".to_string());
    if parsed.citations.is_empty() {
        lines.push("  No citations provided".to_string());
    } else {
        push_numbered(&mut lines, &parsed.citations);
    }

    if let Some(date) = last_updated_date(&parsed.last_updated) {
        lines.push(String::new());
        lines.push(format!("Last updated: {date}"));
    }

    lines.join("\n")
}

/// Render the form catalogs: countries with codes, categories, activities.
pub fn render_catalog() -> String {
    let mut lines = vec!["Countries".to_string()];
    lines.extend(
        COUNTRIES
            .iter()
            .map(|c| format!("  {:<4} {}", c.code, c.name)),
    );
    lines.push(String::new());

    lines.push("Product categories".to_string());
    lines.extend(PRODUCT_CATEGORIES.iter().map(|c| format!("  {c}")));
    lines.push(String::new());

    lines.push("Activity types".to_string());
    lines.extend(ACTIVITY_TYPES.iter().map(|a| format!("  {a}")));

    lines.join("\n")
}

fn push_numbered<S: AsRef<str>>(lines: &mut Vec<String>, items: &[S]) {
    for (i, item) in items.iter().enumerate() {
        lines.push(format!("  {:>2}. {}", i + 1, item.as_ref()));
    }
}

/// Calendar date of an RFC 3339 timestamp; other non-empty strings are shown as-is.
fn last_updated_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.date_naive().to_string()),
        Err(_) => Some(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradereg_core::RestrictionLevel;

    fn parsed() -> ParsedAnalysisResult {
        ParsedAnalysisResult {
            summary: "Coffee exports need a certificate of origin.\nA 2% tax applies.".into(),
            restriction_level: RestrictionLevel::Medium,
            key_requirements: vec!["Certificate of origin".into()],
            citations: vec!["Coffee Act 2001".into(), "EAC CMA 2004".into()],
            last_updated: "2026-03-01T09:30:00.000Z".into(),
            id: "6650f1c2a9e4b1d2c3e4f5a6".into(),
        }
    }

    fn heading() -> Heading<'static> {
        Heading {
            product: Some("Coffee Beans"),
            activity: "Export",
            country: "Kenya",
        }
    }

    #[test]
    fn card_has_all_sections_in_order() {
        let card = render_card(&parsed(), &heading(), None);
        let summary = card.find("\nSummary\n").unwrap();
        let reqs = card.find("\nRequirements\n").unwrap();
        let cites = card.find("\nSources & Citations\n").unwrap();
        assert!(summary < reqs && reqs < cites);
        assert!(card.starts_with("=== Regulatory Analysis e4f5a6 ==="));
        assert!(card.contains("Coffee Beans - Export to Kenya"));
        assert!(card.contains("Restriction: Medium Restrictions"));
        assert!(card.contains("   1. Certificate of origin"));
        assert!(card.contains("   2. EAC CMA 2004"));
        assert!(card.contains("  A 2% tax applies."));
        assert!(!card.contains("Tariffs"));
    }

    #[test]
    fn card_shows_date_part_of_last_updated() {
        let card = render_card(&parsed(), &heading(), None);
        assert!(card.ends_with("Last updated: 2026-03-01"));
    }

    #[test]
    fn card_handles_empty_fields() {
        let mut p = parsed();
        p.summary.clear();
        p.citations.clear();
        p.last_updated.clear();
        let card = render_card(&p, &heading(), None);
        assert!(card.contains("(no summary provided)"));
        assert!(card.contains("No citations provided"));
        assert!(!card.contains("Last updated"));
    }

    #[test]
    fn card_lists_tariffs_when_asked() {
        let card = render_card(&parsed(), &heading(), Some(&["2% tax"][..]));
        assert!(card.contains("Tariffs\n   1. 2% tax"));
        let card = render_card(&parsed(), &heading(), Some(&[][..]));
        assert!(card.contains("Tariffs\n  none detected"));
    }

    #[test]
    fn heading_without_product() {
        let h = Heading {
            product: None,
            activity: "Import",
            country: "Ghana",
        };
        let card = render_card(&parsed(), &h, None);
        assert!(card.contains("\nImport to Ghana\n"));
    }

    #[test]
    fn unparseable_timestamp_shown_raw() {
        assert_eq!(last_updated_date("last week").as_deref(), Some("last week"));
        assert_eq!(last_updated_date("  "), None);
        assert_eq!(
            last_updated_date("2026-01-31T23:00:00+02:00").as_deref(),
            Some("2026-01-31")
        );
    }

    #[test]
    fn catalog_lists_everything() {
        let text = render_catalog();
        assert!(text.contains("  KE   Kenya"));
        assert!(text.contains("  Medical Devices"));
        assert!(text.contains("  Re-export"));
    }
}
