//! Client-side validation errors for request payloads.
//!
//! Payloads are checked before any request is sent. The first problem found
//! is reported; fields are checked in a fixed order, so the same payload
//! always yields the same error.
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::rest::ValidationError;
//!
//! let error = ValidationError::MissingField { field: "contact.city" };
//! assert_eq!(error.to_string(), "Missing required field: contact.city");
//! ```

use thiserror::Error;

/// Error returned when a request payload fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent. Nested fields use dotted names.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The dotted field name, e.g. `campaign_defaults.language`.
        field: &'static str,
    },

    /// A field is present but has the wrong JSON type.
    #[error("Field {field} must be {expected}")]
    InvalidType {
        /// The dotted field name.
        field: &'static str,
        /// The expected type.
        expected: &'static str,
    },

    /// A field is present but its value is not one of the allowed values.
    #[error("Field {field} has invalid value {value}; expected one of: {}", .allowed.join(", "))]
    InvalidValue {
        /// The dotted field name.
        field: &'static str,
        /// The rejected value, rendered as JSON.
        value: String,
        /// The allowed values.
        allowed: &'static [&'static str],
    },
}
