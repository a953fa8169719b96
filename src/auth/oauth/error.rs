//! OAuth-specific error types.
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::MetadataFailed {
//!     status: 401,
//!     message: "invalid_token".to_string(),
//! };
//! assert_eq!(
//!     error.to_string(),
//!     "OAuth metadata request failed with status 401: invalid_token"
//! );
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur while resolving an OAuth token's API endpoint.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// The metadata endpoint returned a non-success HTTP status.
    #[error("OAuth metadata request failed with status {status}: {message}")]
    MetadataFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The raw response body.
        message: String,
    },

    /// The metadata response could not be understood.
    #[error("Invalid OAuth metadata: {reason}")]
    InvalidMetadata {
        /// What was wrong with the response.
        reason: String,
    },

    /// The metadata request failed in transport.
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;

    #[test]
    fn test_invalid_metadata_message() {
        let error = OAuthError::InvalidMetadata {
            reason: "missing field `api_endpoint`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid OAuth metadata: missing field `api_endpoint`"
        );
    }

    #[test]
    fn test_http_error_is_transparent() {
        let inner = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: crate::clients::HttpMethod::Post,
        });
        let error: OAuthError = inner.into();
        assert_eq!(error.to_string(), "Cannot use POST without specifying data.");
    }

    #[test]
    fn test_oauth_error_implements_std_error() {
        let error: &dyn std::error::Error = &OAuthError::MetadataFailed {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(error.to_string().contains("500"));
    }
}
