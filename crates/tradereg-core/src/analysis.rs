//! Analysis records exchanged with the regulatory analysis service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A regulatory analysis request built from the analysis form.
///
/// Posted as the body of `/regulations/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub query: String,
    /// Resolved country name, not the code.
    pub country: String,
    pub product_category: String,
    pub activity_type: String,
}

/// An analysis returned by the service.
///
/// Only `_id` is mandatory; everything else falls back to empty values so a
/// partial payload still classifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub product_category: String,
    #[serde(default)]
    pub activity_type: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub citations: Vec<String>,
    /// ISO 8601 timestamp string.
    #[serde(default)]
    pub last_updated: String,
}

/// Coarse estimate of how regulated a trade activity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RestrictionLevel {
    High,
    Medium,
    Low,
}

impl RestrictionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Badge text shown next to an analysis.
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High Restrictions",
            Self::Medium => "Medium Restrictions",
            Self::Low => "Low Restrictions",
        }
    }
}

impl fmt::Display for RestrictionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display view of an [`AnalysisResult`], derived by the classifier.
///
/// Never stored; recomputed from the raw result whenever it is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAnalysisResult {
    pub summary: String,
    pub restriction_level: RestrictionLevel,
    /// Never empty.
    pub key_requirements: Vec<String>,
    pub citations: Vec<String>,
    pub last_updated: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl ParsedAnalysisResult {
    /// Last six characters of the server id, used as a compact reference.
    pub fn short_id(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.id[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_with_id(id: &str) -> ParsedAnalysisResult {
        ParsedAnalysisResult {
            summary: String::new(),
            restriction_level: RestrictionLevel::Low,
            key_requirements: vec!["x".into()],
            citations: Vec::new(),
            last_updated: String::new(),
            id: id.into(),
        }
    }

    #[test]
    fn input_serializes_camel_case() {
        let input = AnalysisInput {
            query: "What are the export requirements?".into(),
            country: "Kenya".into(),
            product_category: "Agriculture & Food".into(),
            activity_type: "Export".into(),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["productCategory"], "Agriculture & Food");
        assert_eq!(value["activityType"], "Export");
        assert!(value.get("product_category").is_none());
    }

    #[test]
    fn parsed_result_serializes_display_keys() {
        let parsed = ParsedAnalysisResult {
            restriction_level: RestrictionLevel::High,
            key_requirements: vec!["Export license".into()],
            last_updated: "2026-03-01T09:30:00Z".into(),
            ..parsed_with_id("6650f1c2a9e4b1d2c3e4f5a6")
        };
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["restrictionLevel"], "HIGH");
        assert_eq!(value["keyRequirements"][0], "Export license");
        assert_eq!(value["lastUpdated"], "2026-03-01T09:30:00Z");
        assert_eq!(value["_id"], "6650f1c2a9e4b1d2c3e4f5a6");
        assert!(value.get("id").is_none());
        assert!(value.get("restriction_level").is_none());
    }

    #[test]
    fn result_deserializes_service_payload() {
        let json = r#"{
            "_id": "6650f1c2a9e4b1d2c3e4f5a6",
            "query": "What are the export requirements for Coffee Beans?",
            "country": "Kenya",
            "productCategory": "Agriculture & Food",
            "activityType": "Export",
            "summary": "A certificate of origin is required.",
            "citations": ["Kenya Customs Act s.12"],
            "lastUpdated": "2026-03-01T09:30:00Z"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.id, "6650f1c2a9e4b1d2c3e4f5a6");
        assert_eq!(result.product_category, "Agriculture & Food");
        assert_eq!(result.citations, vec!["Kenya Customs Act s.12"]);
        assert_eq!(result.last_updated, "2026-03-01T09:30:00Z");
    }

    #[test]
    fn result_missing_fields_default_empty() {
        let result: AnalysisResult = serde_json::from_str(r#"{"_id": "abc"}"#).unwrap();
        assert!(result.summary.is_empty());
        assert!(result.citations.is_empty());
        assert!(result.last_updated.is_empty());
    }

    #[test]
    fn result_without_id_is_rejected() {
        let err = serde_json::from_str::<AnalysisResult>(r#"{"summary": "text"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn restriction_level_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&RestrictionLevel::Medium).unwrap(),
            "\"MEDIUM\""
        );
        assert_eq!(RestrictionLevel::High.label(), "High Restrictions");
    }

    #[test]
    fn short_id_takes_last_six() {
        assert_eq!(parsed_with_id("6650f1c2a9e4b1d2c3e4f5a6").short_id(), "e4f5a6");
        assert_eq!(parsed_with_id("abc").short_id(), "abc");
        assert_eq!(parsed_with_id("").short_id(), "");
    }
}
