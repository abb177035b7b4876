//! Keyword classification of regulatory analysis summaries.
//!
//! Derives a restriction level and a list of key documentation requirements
//! from the free-text summary returned by the analysis service. The result is
//! a heuristic over the wording of the summary, nothing more.

use tracing::debug;
use tradereg_core::{AnalysisResult, ParsedAnalysisResult, RestrictionLevel};

use crate::patterns::{
    DEFAULT_REQUIREMENTS, HIGH_TRIGGERS, MEDIUM_TRIGGERS, REQUIREMENT_PHRASES, TARIFF_PATTERN,
    format_title,
};

/// Classify an analysis result for display.
///
/// Pure: the same input always yields the same output. `summary`,
/// `citations`, `last_updated` and `id` are copied through unchanged.
pub fn classify(result: &AnalysisResult) -> ParsedAnalysisResult {
    let summary = &result.summary;
    let tariffs = detect_tariffs(summary);
    let restriction_level = restriction_level(summary, !tariffs.is_empty());
    let key_requirements = key_requirements(summary);

    debug!(
        id = %result.id,
        level = %restriction_level,
        requirements = key_requirements.len(),
        tariffs = tariffs.len(),
        "classified analysis"
    );

    ParsedAnalysisResult {
        summary: result.summary.clone(),
        restriction_level,
        key_requirements,
        citations: result.citations.clone(),
        last_updated: result.last_updated.clone(),
        id: result.id.clone(),
    }
}

/// Requirement titles found in `summary`, or the default list if none are.
pub fn key_requirements(summary: &str) -> Vec<String> {
    let lower = summary.to_lowercase();
    let found: Vec<String> = REQUIREMENT_PHRASES
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .map(|phrase| format_title(phrase))
        .collect();

    if found.is_empty() {
        DEFAULT_REQUIREMENTS.iter().map(|s| s.to_string()).collect()
    } else {
        found
    }
}

/// Every tariff figure mentioned in `summary`, e.g. `"5% duty"`.
pub fn detect_tariffs(summary: &str) -> Vec<&str> {
    TARIFF_PATTERN
        .find_iter(summary)
        .map(|m| m.as_str())
        .collect()
}

/// First matching rule wins: HIGH triggers, then MEDIUM triggers or a tariff
/// figure, otherwise LOW.
fn restriction_level(summary: &str, has_tariff: bool) -> RestrictionLevel {
    let lower = summary.to_lowercase();
    if HIGH_TRIGGERS.iter().any(|w| lower.contains(w)) {
        RestrictionLevel::High
    } else if has_tariff || MEDIUM_TRIGGERS.iter().any(|w| lower.contains(w)) {
        RestrictionLevel::Medium
    } else {
        RestrictionLevel::Low
    }
}
