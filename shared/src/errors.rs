//! Error types for the fasting calculator

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::get_field_display_label;

/// The calculator's single failure mode: the input record was rejected.
///
/// The estimator never recovers from bad input and never substitutes a
/// default or zero result; the error carries enough context for the
/// presentation layer to point at the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{display_label}: {message}")]
pub struct ValidationError {
    /// Technical field name (e.g. "height_inches")
    pub field: String,
    /// What was wrong with the value
    pub message: String,
    /// User-facing label for the field
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
