use thiserror::Error;

use crate::value::PropertyType;

/// Errors returned when a write does not fit the property it targets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("property `{key}` expects a {expected} value, got {found}")]
    TypeMismatch {
        key: String,
        expected: PropertyType,
        found: &'static str,
    },
    #[error("property `{key}` has {len} elements, index {index} is out of range")]
    IndexOutOfRange {
        key: String,
        index: usize,
        len: usize,
    },
    #[error("property `{key}` does not hold an array")]
    NotAnArray { key: String },
}
