//! Errors reported at widget setup.
//!
//! Layout queries themselves never fail: out-of-range lookups return `None`
//! or an empty list.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TagsError {
    #[error("no text measurement collaborator configured")]
    MissingMeasure,

    #[error("invalid {name}: {value} (must be finite and non-negative)")]
    InvalidMetric { name: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, TagsError>;
