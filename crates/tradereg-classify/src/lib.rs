//! Summary classification: restriction level and key requirements from analysis text.

mod classifier;
pub mod patterns;

pub use classifier::{classify, detect_tariffs, key_requirements};
