//! Top-level error type for the Marketing API client.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::{ErrorKind, MailchimpError};
//!
//! match client.get_list("57afe96172").await {
//!     Ok(list) => println!("{}", list["name"]),
//!     Err(e) if e.kind() == Some(ErrorKind::ResourceNotFound) => println!("No such list"),
//!     Err(MailchimpError::Validation(e)) => println!("Bad payload: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::auth::oauth::OAuthError;
use crate::clients::api_error::{ApiError, ErrorKind};
use crate::clients::HttpError;
use crate::error::ConfigError;
use crate::rest::ValidationError;
use thiserror::Error;

/// Error type for [`MailchimpClient`](crate::MailchimpClient) operations.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::MailchimpError;
///
/// let error = MailchimpError::NotImplemented { operation: "update_list" };
/// assert_eq!(error.to_string(), "update_list is not implemented");
/// assert!(error.kind().is_none());
/// ```
#[derive(Debug, Error)]
pub enum MailchimpError {
    /// Invalid or missing configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The OAuth metadata lookup failed.
    #[error(transparent)]
    OAuth(#[from] OAuthError),

    /// An HTTP-level error, including classified API errors.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A request payload failed client-side validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A typed payload could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The operation exists in the API but this client does not offer it yet.
    #[error("{operation} is not implemented")]
    NotImplemented {
        /// The name of the client method.
        operation: &'static str,
    },
}

impl MailchimpError {
    /// Returns the classified API error, if this is one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Http(e) => e.as_api_error(),
            _ => None,
        }
    }

    /// Returns the kind of the classified API error, if this is one.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.api_error().map(|e| e.kind)
    }
}

impl From<crate::clients::InvalidHttpRequestError> for MailchimpError {
    fn from(error: crate::clients::InvalidHttpRequestError) -> Self {
        Self::Http(error.into())
    }
}

// Verify MailchimpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MailchimpError>();
};
