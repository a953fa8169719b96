//! HTTP response types for the Mailchimp API client.
//!
//! This module provides the [`HttpResponse`] type returned by the dispatcher
//! and, for DELETE calls, handed back to the caller as-is.

use std::collections::HashMap;

/// An HTTP response from the Marketing API.
///
/// Header names are stored lowercased; a header may carry several values.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::HttpResponse;
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);
///
/// let response = HttpResponse::new(200, headers, json!({"lists": []}));
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("abc-123"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body. Empty bodies are represented as `{}`.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the given header, if present.
    ///
    /// The lookup is case-insensitive.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// Include this ID when reporting a problem to Mailchimp support.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Consumes the response, returning its body.
    #[must_use]
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}
