//! Client layer for the remote regulatory analysis service.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{AnalysisClient, ApiError, DEFAULT_BASE_URL};
