pub mod analysis;
pub mod catalog;
pub mod form;
pub mod session;

pub use analysis::{AnalysisInput, AnalysisResult, ParsedAnalysisResult, RestrictionLevel};
pub use catalog::{ACTIVITY_TYPES, COUNTRIES, Country, PRODUCT_CATEGORIES};
pub use form::{AnalysisForm, FormError};
pub use session::{AnalysisSession, Notice, NoticeKind, SessionError, View};
