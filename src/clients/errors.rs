//! HTTP-specific error types for the Mailchimp API client.
//!
//! # Error Handling
//!
//! - [`ApiError`]: a non-2xx response whose body names a `status` and `detail`
//! - [`HttpResponseError`]: a non-2xx response whose body is not JSON
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: unified error type encompassing all of the above, plus
//!   transport failures passed through unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::clients::HttpError;
//! use mailchimp_api::ErrorKind;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Api(e)) if e.kind == ErrorKind::TooManyRequests => {
//!         println!("Slow down: {}", e.detail);
//!     }
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.status, e.detail),
//!     Err(HttpError::Response(e)) => println!("Unparseable error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//!     Err(HttpError::Decode { code, source }) => println!("Bad body ({code}): {source}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::api_error::ApiError;
use crate::clients::http_request::HttpMethod;

/// Error returned when a non-2xx response carries a body that is not JSON.
///
/// This is the generic fallback: nothing can be classified, so the raw
/// body is kept as the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error: {code}. Message {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// The `X-Request-Id` of the response, if present.
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::clients::{HttpMethod, InvalidHttpRequestError};
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: HttpMethod::Delete,
/// };
/// assert_eq!(error.to_string(), "Cannot send a body with DELETE.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        method: HttpMethod,
    },

    /// A DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        method: HttpMethod,
    },

    /// The path has a `.` or `..` segment, which would climb out of the
    /// endpoint once the URL is normalized.
    #[error("Path {path} contains a dot segment.")]
    DotSegment { path: String },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A classified Marketing API error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A non-2xx response that could not be classified.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response whose body is not valid JSON.
    #[error("Failed to decode response body (status {code}): {source}")]
    Decode {
        /// The HTTP status code of the response.
        code: u16,
        /// The JSON parse error.
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Returns the classified API error, if this is one.
    #[must_use]
    pub const fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
