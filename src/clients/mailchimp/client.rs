//! Marketing API client implementation.

use serde_json::Value;

use crate::auth::oauth::fetch_metadata;
use crate::auth::Credentials;
use crate::clients::mailchimp::MailchimpError;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, MailchimpConfig};

/// Client for the Mailchimp Marketing API.
///
/// `get`, `post` and `put` return the classified response body. `delete`
/// returns the classified [`HttpResponse`] itself, since most DELETE calls
/// answer `204 No Content`.
///
/// The list endpoints (`get_lists`, `add_new_list_member`, ...) are defined
/// in [`crate::rest`].
///
/// # Thread Safety
///
/// `MailchimpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use mailchimp_api::MailchimpClient;
///
/// let client = MailchimpClient::with_api_key("me", "0123abcd-us6").await?;
///
/// let lists = client.get("lists/").await?;
/// let response = client.delete("lists/57afe96172").await?;
/// assert_eq!(response.code, 204);
/// ```
#[derive(Debug)]
pub struct MailchimpClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    credentials: Credentials,
}

// Verify MailchimpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MailchimpClient>();
};

impl MailchimpClient {
    /// Creates a new client from configuration.
    ///
    /// For OAuth credentials this performs the metadata lookup to find the
    /// account's API endpoint.
    ///
    /// # Errors
    ///
    /// - [`MailchimpError::OAuth`] if the metadata lookup fails
    /// - [`MailchimpError::Http`] if the HTTP client cannot be created
    pub async fn new(config: &MailchimpConfig) -> Result<Self, MailchimpError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(HttpError::Network)?;

        let base_url = match config.credentials() {
            Credentials::OAuth { access_token } => {
                let metadata = fetch_metadata(&http, config.metadata_url(), access_token).await?;
                metadata.base_url(config.api_version())
            }
            Credentials::ApiKey { .. } => config
                .api_key_base_url()
                .ok_or(crate::error::ConfigError::CredentialRequired)?,
        };

        tracing::debug!(
            "Mailchimp client using base URL {} ({} auth)",
            base_url,
            if config.credentials().is_oauth() {
                "OAuth"
            } else {
                "API key"
            }
        );

        let http_client = HttpClient::new(
            http,
            base_url,
            config.credentials(),
            config.user_agent_prefix(),
        );

        Ok(Self {
            http_client,
            api_version: config.api_version().clone(),
            credentials: config.credentials().clone(),
        })
    }

    /// Creates a client from an account name and API key.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Config`] if either value is invalid.
    pub async fn with_api_key(
        account: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, MailchimpError> {
        let config = MailchimpConfig::builder()
            .credentials(Credentials::api_key(account, api_key)?)
            .build()?;
        Self::new(&config).await
    }

    /// Creates a client from an OAuth access token.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Config`] for an empty token, or
    /// [`MailchimpError::OAuth`] if the metadata lookup fails.
    pub async fn with_access_token(
        access_token: impl Into<String>,
    ) -> Result<Self, MailchimpError> {
        let config = MailchimpConfig::builder()
            .credentials(Credentials::oauth(access_token)?)
            .build()?;
        Self::new(&config).await
    }

    /// Creates a client from the `MAILCHIMP_*` environment variables.
    ///
    /// # Errors
    ///
    /// See [`Credentials::from_env`] and [`MailchimpClient::new`].
    pub async fn from_env() -> Result<Self, MailchimpError> {
        let config = MailchimpConfig::builder()
            .credentials(Credentials::from_env()?)
            .build()?;
        Self::new(&config).await
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the resolved base URL, ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Returns `true` if the client authenticates with OAuth.
    #[must_use]
    pub const fn is_oauth(&self) -> bool {
        self.credentials.is_oauth()
    }

    /// Sends a GET request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get(&self, path: &str) -> Result<Value, MailchimpError> {
        self.make_request(HttpMethod::Get, path, None)
            .await
            .map(HttpResponse::into_body)
    }

    /// Sends a POST request with a JSON body and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, MailchimpError> {
        self.make_request(HttpMethod::Post, path, Some(body))
            .await
            .map(HttpResponse::into_body)
    }

    /// Sends a PUT request with a JSON body and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, MailchimpError> {
        self.make_request(HttpMethod::Put, path, Some(body))
            .await
            .map(HttpResponse::into_body)
    }

    /// Sends a DELETE request and returns the response itself.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, MailchimpError> {
        self.make_request(HttpMethod::Delete, path, None).await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, MailchimpError> {
        let request = HttpRequest::new(method, path, body)?;
        Ok(self.http_client.request(&request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostUrl;

    #[tokio::test]
    async fn test_api_key_client_resolves_data_center() {
        let client = MailchimpClient::with_api_key("me", "0123abcd-us21").await.unwrap();
        assert_eq!(client.base_url(), "https://us21.api.mailchimp.com/3.0/");
        assert!(!client.is_oauth());
        assert_eq!(client.api_version(), &ApiVersion::V3_0);
    }

    #[tokio::test]
    async fn test_api_key_client_honours_host_override() {
        let config = MailchimpConfig::builder()
            .credentials(Credentials::api_key("me", "key-us6").unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:4010").unwrap())
            .build()
            .unwrap();

        let client = MailchimpClient::new(&config).await.unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:4010/3.0/");
    }

    #[tokio::test]
    async fn test_with_api_key_rejects_invalid_key() {
        let result = MailchimpClient::with_api_key("me", "key-").await;
        assert!(matches!(
            result,
            Err(MailchimpError::Config(crate::error::ConfigError::InvalidApiKey))
        ));
    }

    #[tokio::test]
    async fn test_post_without_body_fails_before_sending() {
        let client = MailchimpClient::with_api_key("me", "key-us6").await.unwrap();
        let result = client.make_request(HttpMethod::Post, "lists/", None).await;
        assert!(matches!(
            result,
            Err(MailchimpError::Http(HttpError::InvalidRequest(_)))
        ));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MailchimpClient>();
    }
}
