//! Keyword tables driving the summary classifier.
//!
//! All matching is case-insensitive. Requirement phrases are reported in the
//! order they are declared here, not the order they appear in a summary.

use std::sync::LazyLock;

use regex::Regex;

/// Documentation items recognised in a summary, in reporting order.
pub const REQUIREMENT_PHRASES: &[&str] = &[
    "certificate of origin",
    "commercial invoice",
    "packing list",
    "bill of lading",
    "export license",
    "import permit",
    "quality certificate",
    "phytosanitary certificate",
];

/// Reported when no requirement phrase is found.
pub const DEFAULT_REQUIREMENTS: &[&str] = &[
    "Standard export documentation required",
    "Customs declaration necessary",
    "Commercial invoice and packing list",
];

/// Any of these makes an activity highly restricted.
pub const HIGH_TRIGGERS: &[&str] = &["restricted", "prohibited", "license required"];

/// Any of these (or a tariff figure) makes an activity moderately restricted.
pub const MEDIUM_TRIGGERS: &[&str] = &["permit", "approval"];

/// A figure followed by duty, tariff, or tax: "5% duty", "12.5 tariff", "3%tax".
pub static TARIFF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+(?:\.[0-9]+)?%?\s*(?:duty|tariff|tax)").expect("valid tariff regex")
});

/// Turn a phrase identifier into a display title.
///
/// Upper-cases the first character and puts a space before every later
/// uppercase letter. The phrases in [`REQUIREMENT_PHRASES`] are lowercase, so
/// in practice only the first letter changes.
pub fn format_title(phrase: &str) -> String {
    let mut chars = phrase.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut title: String = first.to_uppercase().collect();
    for c in chars {
        if c.is_ascii_uppercase() {
            title.push(' ');
        }
        title.push(c);
    }
    title
}
