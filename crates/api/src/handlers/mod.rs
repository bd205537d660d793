#![forbid(unsafe_code)]

pub(crate) mod audit;
pub(crate) mod branches;
pub(crate) mod catalog;
pub(crate) mod main_stock;

use crate::error::ApiError;

pub(crate) async fn health() -> &'static str {
    "The server is running"
}

/// Body amount fields arrive as `Option` so a missing or null field turns
/// into a field-specific 400 instead of a generic deserialization rejection.
pub(crate) fn require_amount(value: Option<i64>, field: &str) -> Result<i64, ApiError> {
    value.ok_or_else(|| ApiError::Validation(format!("{field} is required")))
}
