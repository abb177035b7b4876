//! Fixed catalogs offered by the analysis form.

/// A destination country selectable in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "NG", name: "Nigeria" },
    Country { code: "ZA", name: "South Africa" },
    Country { code: "EG", name: "Egypt" },
    Country { code: "KE", name: "Kenya" },
    Country { code: "GH", name: "Ghana" },
    Country { code: "ET", name: "Ethiopia" },
    Country { code: "TZ", name: "Tanzania" },
    Country { code: "CD", name: "DR Congo" },
    Country { code: "UG", name: "Uganda" },
    Country { code: "MA", name: "Morocco" },
    Country { code: "CM", name: "Cameroon" },
    Country { code: "CI", name: "Côte d'Ivoire" },
    Country { code: "SN", name: "Senegal" },
    Country { code: "RW", name: "Rwanda" },
    Country { code: "ZW", name: "Zimbabwe" },
];

pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Agriculture & Food",
    "Chemicals & Pharmaceuticals",
    "Consumer Goods",
    "Electronics & Technology",
    "Industrial Equipment",
    "Medical Devices",
];

pub const ACTIVITY_TYPES: &[&str] = &["Import", "Export", "Transit", "Re-export"];

/// Activity preselected in a fresh form.
pub const DEFAULT_ACTIVITY: &str = "Export";

/// Look up a country by its two-letter code, ignoring case and surrounding whitespace.
pub fn country_by_code(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Resolve a product category to its catalog spelling.
pub fn product_category(category: &str) -> Option<&'static str> {
    find_ignore_case(PRODUCT_CATEGORIES, category)
}

/// Resolve an activity type to its catalog spelling.
pub fn activity_type(activity: &str) -> Option<&'static str> {
    find_ignore_case(ACTIVITY_TYPES, activity)
}

fn find_ignore_case(list: &[&'static str], value: &str) -> Option<&'static str> {
    let value = value.trim();
    list.iter().copied().find(|item| item.eq_ignore_ascii_case(value))
}
