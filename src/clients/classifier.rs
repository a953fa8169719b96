//! Response classification.
//!
//! Every response from the Marketing API passes through [`classify`] before
//! it reaches the caller. Success responses come back untouched; error
//! responses become an [`ApiError`] when their body names a `status` and a
//! `detail`.
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::clients::{classify, HttpError};
//! use mailchimp_api::{ErrorKind, HttpResponse};
//! use std::collections::HashMap;
//! use serde_json::json;
//!
//! let response = HttpResponse::new(
//!     429,
//!     HashMap::new(),
//!     json!({"status": 429, "detail": "You have exceeded the limit"}),
//! );
//!
//! match classify(response) {
//!     Err(HttpError::Api(e)) => assert_eq!(e.kind, ErrorKind::TooManyRequests),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use crate::clients::api_error::ApiError;
use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;

/// Classifies a response.
///
/// - 2xx: returned unchanged.
/// - Non-2xx whose body carries both `status` and `detail`: an
///   [`HttpError::Api`] of the mapped kind.
/// - Non-2xx whose body lacks either field: returned unchanged. Such bodies
///   are not problem documents, so there is nothing to classify.
///
/// # Errors
///
/// Returns [`HttpError::Api`] for classifiable error responses.
pub fn classify(response: HttpResponse) -> Result<HttpResponse, HttpError> {
    if response.is_ok() {
        return Ok(response);
    }

    match ApiError::from_body(&response.body) {
        Some(error) => Err(HttpError::Api(
            error.with_request_id(response.request_id()),
        )),
        None => Ok(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::api_error::ErrorKind;
    use serde_json::json;
    use std::collections::HashMap;

    fn response(code: u16, body: serde_json::Value) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    #[test]
    fn test_success_is_returned_unchanged() {
        let body = json!({"lists": [{"id": "abc"}], "total_items": 1});
        let classified = classify(response(200, body.clone())).unwrap();
        assert_eq!(classified.code, 200);
        assert_eq!(classified.body, body);
    }

    #[test]
    fn test_success_with_error_shaped_body_is_not_classified() {
        let body = json!({"status": 400, "detail": "looks like an error"});
        assert!(classify(response(200, body)).is_ok());
    }

    #[test]
    fn test_every_known_code_maps_to_its_kind() {
        for kind in ErrorKind::KNOWN {
            let code = kind.code().unwrap();
            let body = json!({"status": code, "detail": format!("message for {code}")});

            match classify(response(code, body)) {
                Err(HttpError::Api(e)) => {
                    assert_eq!(e.kind, kind);
                    assert_eq!(e.detail, format!("message for {code}"));
                }
                other => panic!("expected {kind} for {code}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_body_status_wins_over_http_status() {
        let body = json!({"status": 404, "detail": "The requested resource could not be found."});
        let error = classify(response(400, body)).unwrap_err();
        assert_eq!(
            error.as_api_error().map(|e| e.kind),
            Some(ErrorKind::ResourceNotFound)
        );
    }

    #[test]
    fn test_unmapped_code_is_unexpected() {
        let body = json!({"status": 422, "detail": "Invalid merge fields"});
        match classify(response(422, body)) {
            Err(HttpError::Api(e)) => {
                assert_eq!(e.kind, ErrorKind::Unexpected);
                assert_eq!(e.to_string(), "Error: 422. Message Invalid merge fields");
            }
            other => panic!("expected Unexpected, got {other:?}"),
        }
    }

    #[test]
    fn test_error_body_without_status_and_detail_passes_through() {
        let body = json!({"error": "something else entirely"});
        let classified = classify(response(500, body.clone())).unwrap();
        assert_eq!(classified.code, 500);
        assert_eq!(classified.body, body);

        let body = json!({"detail": "no status"});
        assert!(classify(response(400, body)).is_ok());
    }

    #[test]
    fn test_request_id_is_attached() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-42".to_string()]);
        let body = json!({"status": 503, "detail": "Compliance hold"});

        let error = classify(HttpResponse::new(503, headers, body)).unwrap_err();
        let api_error = error.as_api_error().unwrap();
        assert_eq!(api_error.kind, ErrorKind::ComplianceRelated);
        assert_eq!(api_error.request_id.as_deref(), Some("req-42"));
    }
}
