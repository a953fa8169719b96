//! Outgoing request description.
//!
//! An [`HttpRequest`] is checked once, when it is created, so the dispatcher
//! never sees a POST without data, a DELETE with a body, or a path that
//! climbs out of its endpoint.

use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// The four verbs the Marketing API endpoints use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    /// Adds or updates ("upsert") a resource.
    Put,
    Delete,
}

impl HttpMethod {
    /// Returns the verb as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    const fn takes_body(self) -> Option<bool> {
        match self {
            Self::Post | Self::Put => Some(true),
            Self::Delete => Some(false),
            Self::Get => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A validated request against a path below the account's base URL.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::new(
///     HttpMethod::Post,
///     "lists/abc123/members/",
///     Some(json!({"email_address": "a@example.com", "status": "subscribed"})),
/// )
/// .unwrap();
/// assert_eq!(request.method(), HttpMethod::Post);
///
/// assert!(HttpRequest::new(HttpMethod::Put, "lists/abc123", None).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    method: HttpMethod,
    path: String,
    body: Option<Value>,
}

impl HttpRequest {
    /// Creates a request, checking the body against the method.
    ///
    /// GET requests may carry a body or not; it is sent when present.
    ///
    /// # Errors
    ///
    /// - [`InvalidHttpRequestError::MissingBody`] for POST or PUT without a body
    /// - [`InvalidHttpRequestError::BodyNotAllowed`] for DELETE with a body
    /// - [`InvalidHttpRequestError::DotSegment`] for a path with a `.` or `..` segment
    pub fn new(
        method: HttpMethod,
        path: impl Into<String>,
        body: Option<Value>,
    ) -> Result<Self, InvalidHttpRequestError> {
        match (method.takes_body(), &body) {
            (Some(true), None) => return Err(InvalidHttpRequestError::MissingBody { method }),
            (Some(false), Some(_)) => {
                return Err(InvalidHttpRequestError::BodyNotAllowed { method })
            }
            _ => {}
        }

        let path = path.into();
        if path.split('/').any(is_dot_segment) {
            return Err(InvalidHttpRequestError::DotSegment { path });
        }

        Ok(Self { method, path, body })
    }

    /// Shorthand for a GET without a body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::DotSegment`] for a path with a
    /// `.` or `..` segment.
    pub fn get(path: impl Into<String>) -> Result<Self, InvalidHttpRequestError> {
        Self::new(HttpMethod::Get, path, None)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the path, relative to the base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// URL parsers treat `%2e` like `.`, so both spellings count.
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}
