//! HTTP client for Marketing API communication.
//!
//! This module provides the [`HttpClient`] type, the dispatcher every
//! endpoint call goes through.

use std::collections::HashMap;

use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::classifier::classify;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dispatcher for requests against one account's base URL.
///
/// Every call:
/// - joins the request path onto the base URL
/// - sends the `User-Agent`, `Accept` and `Authorization` headers
/// - parses the body as JSON and runs it through [`classify`]
///
/// Each call sends exactly one request. Nothing is retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use mailchimp_api::clients::{HttpClient, HttpRequest};
/// use mailchimp_api::Credentials;
///
/// let credentials = Credentials::api_key("me", "0123abcd-us6")?;
/// let client = HttpClient::new(
///     reqwest::Client::new(),
///     "https://us6.api.mailchimp.com/3.0/",
///     &credentials,
///     None,
/// );
///
/// let response = client.request(&HttpRequest::get("lists/")?).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Always ends in `/`, e.g. `https://us6.api.mailchimp.com/3.0/`.
    base_url: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a dispatcher bound to `base_url`.
    ///
    /// `user_agent_prefix`, when given, is placed in front of the library's
    /// own `User-Agent` value, separated by ` | `.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailchimp_api::clients::HttpClient;
    /// use mailchimp_api::Credentials;
    ///
    /// let credentials = Credentials::oauth("token").unwrap();
    /// let client = HttpClient::new(
    ///     reqwest::Client::new(),
    ///     "https://us6.api.mailchimp.com/3.0",
    ///     &credentials,
    ///     Some("MyApp/1.0"),
    /// );
    ///
    /// assert_eq!(client.base_url(), "https://us6.api.mailchimp.com/3.0/");
    /// ```
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        credentials: &Credentials,
        user_agent_prefix: Option<&str>,
    ) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let library = format!(
            "Mailchimp API Library v{SDK_VERSION} | Rust {}",
            env!("CARGO_PKG_RUST_VERSION")
        );
        let user_agent = match user_agent_prefix {
            Some(prefix) => format!("{prefix} | {library}"),
            None => library,
        };

        let default_headers = HashMap::from([
            ("User-Agent".to_string(), user_agent),
            ("Accept".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), credentials.authorization_header()),
        ]);

        Self {
            client,
            base_url,
            default_headers,
        }
    }

    /// Returns the base URL every request path is joined onto.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends one request and classifies the response.
    ///
    /// A non-2xx response whose JSON body lacks `status` or `detail` is
    /// returned as `Ok`; check [`HttpResponse::is_ok`] if that matters.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Network`]: the transport failed; the error is passed on as-is
    /// - [`HttpError::Api`]: the response was classified as an API error
    /// - [`HttpError::Response`]: a non-2xx body is not JSON
    /// - [`HttpError::Decode`]: a 2xx body is not JSON
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = format!(
            "{}{}",
            self.base_url,
            request.path().trim_start_matches('/')
        );

        let mut builder = self.client.request(request.method().into(), &url);
        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body() {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!("Sending {} request to {}", request.method(), url);
        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let text = res.text().await?;

        let body = match Self::parse_body(code, &text) {
            Ok(body) => body,
            Err(source) if (200..300).contains(&code) => {
                return Err(HttpError::Decode { code, source });
            }
            Err(_) => {
                tracing::warn!(
                    "Non-JSON error response from {} (status {})",
                    request.path(),
                    code
                );
                let error_reference = headers
                    .get("x-request-id")
                    .and_then(|values| values.first())
                    .cloned();
                return Err(HttpResponseError {
                    code,
                    message: text,
                    error_reference,
                }
                .into());
            }
        };

        let response = classify(HttpResponse::new(code, headers, body)).map_err(|error| {
            if let HttpError::Api(api_error) = &error {
                tracing::warn!(
                    "Mailchimp API error on {} {}: {} (request id: {})",
                    request.method(),
                    request.path(),
                    api_error,
                    api_error.request_id.as_deref().unwrap_or("none")
                );
            }
            error
        })?;

        if !response.is_ok() {
            tracing::warn!(
                "Unclassified error response from {} (status {}); returning body as-is",
                request.path(),
                code
            );
        }
        Ok(response)
    }

    /// Parses a response body, treating an empty body as `{}`.
    fn parse_body(code: u16, text: &str) -> Result<Value, serde_json::Error> {
        if text.trim().is_empty() {
            if code != 204 {
                tracing::debug!("Empty response body (status {code})");
            }
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(text)
    }

    /// Collects headers under lowercased names, keeping repeated values.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        headers.iter().fold(HashMap::new(), |mut acc, (name, value)| {
            acc.entry(name.as_str().to_lowercase())
                .or_insert_with(Vec::new)
                .push(value.to_str().unwrap_or_default().to_string());
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_key_client(prefix: Option<&str>) -> HttpClient {
        let credentials = Credentials::api_key("user", "abc-us6").unwrap();
        HttpClient::new(
            reqwest::Client::new(),
            "https://us6.api.mailchimp.com/3.0/",
            &credentials,
            prefix,
        )
    }

    #[test]
    fn test_client_construction_keeps_base_url() {
        let client = api_key_client(None);
        assert_eq!(client.base_url(), "https://us6.api.mailchimp.com/3.0/");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let credentials = Credentials::oauth("token").unwrap();
        let client = HttpClient::new(
            reqwest::Client::new(),
            "http://localhost:8080/3.0",
            &credentials,
            None,
        );
        assert_eq!(client.base_url(), "http://localhost:8080/3.0/");
    }

    #[test]
    fn test_user_agent_names_library_and_prefix() {
        let plain = api_key_client(None);
        let user_agent = &plain.default_headers()["User-Agent"];
        assert!(user_agent.starts_with("Mailchimp API Library v"));
        assert!(user_agent.contains(" | Rust "));

        let prefixed = api_key_client(Some("MyApp/1.0"));
        assert_eq!(
            prefixed.default_headers()["User-Agent"],
            format!("MyApp/1.0 | {user_agent}")
        );
    }

    #[test]
    fn test_authorization_header_follows_credentials() {
        let basic = api_key_client(None);
        assert_eq!(basic.default_headers()["Authorization"], "Basic dXNlcjphYmMtdXM2");

        let oauth = HttpClient::new(
            reqwest::Client::new(),
            "https://us1.api.mailchimp.com/3.0/",
            &Credentials::oauth("token-value").unwrap(),
            None,
        );
        assert_eq!(oauth.default_headers()["Authorization"], "OAuth token-value");
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = api_key_client(None);
        assert_eq!(client.default_headers()["Accept"], "application/json");
    }

    #[test]
    fn test_parse_body_handles_empty_and_invalid() {
        assert_eq!(HttpClient::parse_body(204, "").unwrap(), json!({}));
        assert_eq!(HttpClient::parse_body(200, " \n").unwrap(), json!({}));
        assert!(HttpClient::parse_body(200, "<html>").is_err());
        assert_eq!(
            HttpClient::parse_body(200, r#"{"id":"abc"}"#).unwrap(),
            json!({"id": "abc"})
        );
    }
}
