//! Configuration error types for the Mailchimp API client.
//!
//! This module contains the errors raised while building configuration and
//! credentials. They are all detected before any network activity.
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither an access token nor an account/API key pair was supplied.
    #[error("You must provide either access_token or a username and api_key")]
    CredentialRequired,

    /// Account name cannot be empty.
    #[error("Account name cannot be empty. Please provide the Mailchimp account (user) name.")]
    EmptyAccount,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Mailchimp API key.")]
    EmptyApiKey,

    /// API key has no usable data center suffix.
    #[error("Invalid API key. Expected format: '<key>-<dc>' (e.g., '0123abcd-us6').")]
    InvalidApiKey,

    /// OAuth access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid OAuth access token.")]
    EmptyAccessToken,

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'MAJOR.MINOR' (e.g., '3.0').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// An environment variable needed for credentials is not set.
    #[error("Environment variable '{name}' is not set")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },
}
