//! Typed Marketing API errors.
//!
//! Mailchimp reports failures as RFC 7807 problem documents:
//!
//! ```json
//! {
//!   "type": "https://mailchimp.com/developer/marketing/docs/errors/",
//!   "title": "Resource Not Found",
//!   "status": 404,
//!   "detail": "The requested resource could not be found.",
//!   "instance": "995c5cb0-3280-4a6e-808b-3b096d0bb219"
//! }
//! ```
//!
//! The `status` field is mapped through a fixed table to an [`ErrorKind`].
//! Codes missing from the table map to [`ErrorKind::Unexpected`].
//!
//! | status | kind |
//! |--------|------|
//! | 400 | [`ErrorKind::BadRequest`] |
//! | 401 | [`ErrorKind::ApiKeyMissing`] |
//! | 403 | [`ErrorKind::Forbidden`] |
//! | 404 | [`ErrorKind::ResourceNotFound`] |
//! | 405 | [`ErrorKind::MethodNotAllowed`] |
//! | 414 | [`ErrorKind::ResourceNestingTooDeep`] |
//! | 425 | [`ErrorKind::InvalidMethodOverride`] |
//! | 429 | [`ErrorKind::TooManyRequests`] |
//! | 500 | [`ErrorKind::InternalServerError`] |
//! | 503 | [`ErrorKind::ComplianceRelated`] |

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// The kind of a Marketing API error, derived from its status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400: the request could not be processed.
    BadRequest,
    /// 401: no valid API key was provided.
    ApiKeyMissing,
    /// 403: the credentials do not grant access to the resource.
    Forbidden,
    /// 404: the requested resource could not be found.
    ResourceNotFound,
    /// 405: the method is not allowed on this resource.
    MethodNotAllowed,
    /// 414: the sub-resource nesting is too deep.
    ResourceNestingTooDeep,
    /// 425: the `X-HTTP-Method-Override` value is invalid.
    InvalidMethodOverride,
    /// 429: too many simultaneous requests.
    TooManyRequests,
    /// 500: an unexpected internal error on the provider side.
    InternalServerError,
    /// 503: the action is blocked for compliance reasons.
    ComplianceRelated,
    /// Any status code that is not in the table.
    Unexpected,
}

impl ErrorKind {
    /// Every kind that corresponds to a documented status code.
    pub const KNOWN: [Self; 10] = [
        Self::BadRequest,
        Self::ApiKeyMissing,
        Self::Forbidden,
        Self::ResourceNotFound,
        Self::MethodNotAllowed,
        Self::ResourceNestingTooDeep,
        Self::InvalidMethodOverride,
        Self::TooManyRequests,
        Self::InternalServerError,
        Self::ComplianceRelated,
    ];

    /// Maps a numeric status code to its kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailchimp_api::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::from_code(429), ErrorKind::TooManyRequests);
    /// assert_eq!(ErrorKind::from_code(418), ErrorKind::Unexpected);
    /// ```
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            401 => Self::ApiKeyMissing,
            403 => Self::Forbidden,
            404 => Self::ResourceNotFound,
            405 => Self::MethodNotAllowed,
            414 => Self::ResourceNestingTooDeep,
            425 => Self::InvalidMethodOverride,
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            503 => Self::ComplianceRelated,
            _ => Self::Unexpected,
        }
    }

    /// Maps the `status` field of an error body to its kind.
    ///
    /// Numbers and numeric strings are looked up in the table; anything
    /// else is [`ErrorKind::Unexpected`].
    #[must_use]
    pub fn from_status(status: &Value) -> Self {
        let code = match status {
            Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
            Value::String(s) => s.trim().parse::<u16>().ok(),
            _ => None,
        };
        code.map_or(Self::Unexpected, Self::from_code)
    }

    /// Returns the status code for this kind, or `None` for `Unexpected`.
    #[must_use]
    pub const fn code(&self) -> Option<u16> {
        match self {
            Self::BadRequest => Some(400),
            Self::ApiKeyMissing => Some(401),
            Self::Forbidden => Some(403),
            Self::ResourceNotFound => Some(404),
            Self::MethodNotAllowed => Some(405),
            Self::ResourceNestingTooDeep => Some(414),
            Self::InvalidMethodOverride => Some(425),
            Self::TooManyRequests => Some(429),
            Self::InternalServerError => Some(500),
            Self::ComplianceRelated => Some(503),
            Self::Unexpected => None,
        }
    }

    /// Returns the provider's name for this kind (e.g. `"APIKeyMissing"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequest",
            Self::ApiKeyMissing => "APIKeyMissing",
            Self::Forbidden => "Forbidden",
            Self::ResourceNotFound => "ResourceNotFound",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::ResourceNestingTooDeep => "ResourceNestingTooDeep",
            Self::InvalidMethodOverride => "InvalidMethodOverride",
            Self::TooManyRequests => "TooManyRequests",
            Self::InternalServerError => "InternalServerError",
            Self::ComplianceRelated => "ComplianceRelated",
            Self::Unexpected => "UnexpectedError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error response from the Marketing API.
///
/// `status` keeps the code exactly as it appeared in the body, so an
/// unexpected value can be reported verbatim.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::{ApiError, ErrorKind};
/// use serde_json::json;
///
/// let error = ApiError::new(&json!(404), "The requested resource could not be found.");
/// assert_eq!(error.kind, ErrorKind::ResourceNotFound);
/// assert_eq!(error.detail, "The requested resource could not be found.");
///
/// let error = ApiError::new(&json!(418), "I'm a teapot");
/// assert_eq!(error.kind, ErrorKind::Unexpected);
/// assert_eq!(error.to_string(), "Error: 418. Message I'm a teapot");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", render(.kind, .status, .detail))]
pub struct ApiError {
    /// The kind this error maps to.
    pub kind: ErrorKind,
    /// The raw status code from the body.
    pub status: String,
    /// The human-readable message from the body.
    pub detail: String,
    /// The problem title (e.g. "Resource Not Found"), if present.
    pub title: Option<String>,
    /// The problem type URL, if present.
    pub error_type: Option<String>,
    /// The problem instance id, if present.
    pub instance: Option<String>,
    /// The `X-Request-Id` of the failed response, if present.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Creates an error from a raw `status` value and message.
    #[must_use]
    pub fn new(status: &Value, detail: impl Into<String>) -> Self {
        let raw_status = match status {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        Self {
            kind: ErrorKind::from_status(status),
            status: raw_status,
            detail: detail.into(),
            title: None,
            error_type: None,
            instance: None,
            request_id: None,
        }
    }

    /// Creates an error from a problem-details body.
    ///
    /// Returns `None` unless the body carries both `status` and `detail`.
    #[must_use]
    pub fn from_body(body: &Value) -> Option<Self> {
        let status = body.get("status")?;
        let detail = body.get("detail")?;

        let detail = match detail {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(String::from);

        Some(Self {
            title: text("title"),
            error_type: text("type"),
            instance: text("instance"),
            ..Self::new(status, detail)
        })
    }

    /// Attaches the request id of the failed response.
    #[must_use]
    pub fn with_request_id(mut self, request_id: Option<&str>) -> Self {
        self.request_id = request_id.map(String::from);
        self
    }

    /// Returns `true` for errors whose status code is in the table.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self.kind, ErrorKind::Unexpected)
    }
}

/// Unmapped codes keep the raw status in the message.
fn render(kind: &ErrorKind, status: &str, detail: &str) -> String {
    match kind {
        ErrorKind::Unexpected => format!("Error: {status}. Message {detail}"),
        kind => format!("{kind}: {detail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_kinds_round_trip_through_code() {
        for kind in ErrorKind::KNOWN {
            let code = kind.code().unwrap();
            assert_eq!(ErrorKind::from_code(code), kind);
        }
        assert_eq!(ErrorKind::Unexpected.code(), None);
    }

    #[test]
    fn test_from_status_accepts_numeric_strings() {
        assert_eq!(ErrorKind::from_status(&json!("404")), ErrorKind::ResourceNotFound);
        assert_eq!(ErrorKind::from_status(&json!(" 429 ")), ErrorKind::TooManyRequests);
    }

    #[test]
    fn test_from_status_defaults_to_unexpected() {
        assert_eq!(ErrorKind::from_status(&json!(418)), ErrorKind::Unexpected);
        assert_eq!(ErrorKind::from_status(&json!("teapot")), ErrorKind::Unexpected);
        assert_eq!(ErrorKind::from_status(&json!(404.5)), ErrorKind::Unexpected);
        assert_eq!(ErrorKind::from_status(&json!(-1)), ErrorKind::Unexpected);
        assert_eq!(ErrorKind::from_status(&json!(70000)), ErrorKind::Unexpected);
        assert_eq!(ErrorKind::from_status(&json!(null)), ErrorKind::Unexpected);
    }

    #[test]
    fn test_api_key_missing_uses_provider_name() {
        assert_eq!(ErrorKind::ApiKeyMissing.to_string(), "APIKeyMissing");
    }

    #[test]
    fn test_from_body_requires_status_and_detail() {
        assert!(ApiError::from_body(&json!({"status": 404})).is_none());
        assert!(ApiError::from_body(&json!({"detail": "gone"})).is_none());
        assert!(ApiError::from_body(&json!({})).is_none());
    }

    #[test]
    fn test_from_body_captures_problem_fields() {
        let body = json!({
            "type": "https://mailchimp.com/developer/marketing/docs/errors/",
            "title": "Invalid Resource",
            "status": 400,
            "detail": "Please provide a valid email address.",
            "instance": "abc-123"
        });

        let error = ApiError::from_body(&body).unwrap();
        assert_eq!(error.kind, ErrorKind::BadRequest);
        assert_eq!(error.status, "400");
        assert_eq!(error.detail, "Please provide a valid email address.");
        assert_eq!(error.title.as_deref(), Some("Invalid Resource"));
        assert_eq!(error.instance.as_deref(), Some("abc-123"));
        assert!(error.error_type.is_some());
        assert!(error.is_known());
    }

    #[test]
    fn test_unexpected_message_carries_code_and_detail_verbatim() {
        let error = ApiError::new(&json!("E_WEIRD"), "Something odd");
        assert_eq!(error.status, "E_WEIRD");
        assert_eq!(error.to_string(), "Error: E_WEIRD. Message Something odd");
        assert!(!error.is_known());
    }

    #[test]
    fn test_known_message_names_kind() {
        let error = ApiError::new(&json!(403), "User does not have access");
        assert_eq!(error.to_string(), "Forbidden: User does not have access");
    }

    #[test]
    fn test_api_error_is_a_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ApiError::new(&json!(429), "Slow down"));
        assert_eq!(error.to_string(), "TooManyRequests: Slow down");
    }

    #[test]
    fn test_with_request_id() {
        let error = ApiError::new(&json!(500), "boom").with_request_id(Some("req-1"));
        assert_eq!(error.request_id.as_deref(), Some("req-1"));
    }
}
