//! Analysis form: required-field checks and query construction.

use thiserror::Error;

use crate::analysis::AnalysisInput;
use crate::catalog;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("unknown destination country code: {0}")]
    UnknownCountry(String),
    #[error("unknown product category: {0}")]
    UnknownCategory(String),
    #[error("unknown activity type: {0}")]
    UnknownActivity(String),
}

/// User-entered fields of the analysis form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisForm {
    pub product: String,
    /// Two-letter country code from [`catalog::COUNTRIES`].
    pub destination_country: String,
    pub product_category: String,
    pub activity_type: String,
    pub additional_details: String,
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self {
            product: String::new(),
            destination_country: String::new(),
            product_category: String::new(),
            activity_type: catalog::DEFAULT_ACTIVITY.to_string(),
            additional_details: String::new(),
        }
    }
}

impl AnalysisForm {
    /// Check the form and build the request sent to the analysis service.
    ///
    /// Missing fields are reported before any catalog lookup so an incomplete
    /// form always yields [`FormError::MissingFields`].
    pub fn validate_and_build(&self) -> Result<AnalysisInput, FormError> {
        let product = self.product.trim();
        let required = [
            product,
            self.destination_country.trim(),
            self.product_category.trim(),
            self.activity_type.trim(),
        ];
        if required.iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }

        let country = catalog::country_by_code(&self.destination_country)
            .ok_or_else(|| FormError::UnknownCountry(self.destination_country.clone()))?;
        let category = catalog::product_category(&self.product_category)
            .ok_or_else(|| FormError::UnknownCategory(self.product_category.clone()))?;
        let activity = catalog::activity_type(&self.activity_type)
            .ok_or_else(|| FormError::UnknownActivity(self.activity_type.clone()))?;

        let mut query = format!(
            "What are the {} requirements for {} ({}) to {}?",
            activity.to_lowercase(),
            product,
            category,
            country.name,
        );
        let details = self.additional_details.trim();
        if !details.is_empty() {
            query.push_str(" Additional details: ");
            query.push_str(details);
        }

        Ok(AnalysisInput {
            query,
            country: country.name.to_string(),
            product_category: category.to_string(),
            activity_type: activity.to_string(),
        })
    }
}
