//! OAuth metadata lookup.

use serde::Deserialize;

use crate::auth::oauth::OAuthError;
use crate::clients::HttpError;
use crate::config::{AccessToken, ApiVersion, HostUrl};

/// The login that granted an OAuth token.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct LoginInfo {
    /// The login's email address.
    #[serde(default)]
    pub email: Option<String>,
    /// URL of the login's avatar image.
    #[serde(default)]
    pub avatar: Option<String>,
    /// The login's numeric id.
    #[serde(default)]
    pub login_id: Option<u64>,
    /// The login's user name.
    #[serde(default)]
    pub login_name: Option<String>,
    /// The email address used to sign in.
    #[serde(default)]
    pub login_email: Option<String>,
}

/// The response of the OAuth metadata endpoint.
///
/// Only `api_endpoint` is required; everything else is informational.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::auth::oauth::OAuthMetadata;
/// use mailchimp_api::ApiVersion;
///
/// let metadata: OAuthMetadata = serde_json::from_value(serde_json::json!({
///     "dc": "us6",
///     "api_endpoint": "https://us6.api.mailchimp.com"
/// }))
/// .unwrap();
///
/// assert_eq!(metadata.base_url(&ApiVersion::V3_0), "https://us6.api.mailchimp.com/3.0/");
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct OAuthMetadata {
    /// The data center, e.g. `us6`.
    #[serde(default)]
    pub dc: Option<String>,
    /// The role of the login within the account.
    #[serde(default)]
    pub role: Option<String>,
    /// The account name.
    #[serde(default)]
    pub accountname: Option<String>,
    /// The account's user id.
    #[serde(default)]
    pub user_id: Option<u64>,
    /// The login that granted the token.
    #[serde(default)]
    pub login: Option<LoginInfo>,
    /// The login URL.
    #[serde(default)]
    pub login_url: Option<String>,
    /// Scheme and host of the account's API, e.g. `https://us6.api.mailchimp.com`.
    pub api_endpoint: String,
}

impl OAuthMetadata {
    /// Returns the API base URL for the given version, ending in `/`.
    #[must_use]
    pub fn base_url(&self, version: &ApiVersion) -> String {
        format!(
            "{}{}",
            self.api_endpoint.trim_end_matches('/'),
            version.path_segment()
        )
    }
}

/// Fetches the metadata for an OAuth access token.
///
/// Sends `GET <metadata_url>` with `Authorization: OAuth <token>`. The
/// request is made once; nothing is retried.
///
/// # Errors
///
/// - [`OAuthError::Http`] wrapping [`HttpError::Network`] if the request
///   cannot be sent
/// - [`OAuthError::MetadataFailed`] for a non-success status
/// - [`OAuthError::InvalidMetadata`] if the body is not JSON or has no
///   `api_endpoint`
pub async fn fetch_metadata(
    client: &reqwest::Client,
    metadata_url: &HostUrl,
    access_token: &AccessToken,
) -> Result<OAuthMetadata, OAuthError> {
    let response = client
        .get(metadata_url.as_ref())
        .header("Accept", "application/json")
        .header("Authorization", format!("OAuth {}", access_token.as_ref()))
        .send()
        .await
        .map_err(HttpError::Network)?;

    let status = response.status().as_u16();
    let body = response.text().await.map_err(HttpError::Network)?;

    if !(200..300).contains(&status) {
        return Err(OAuthError::MetadataFailed {
            status,
            message: body,
        });
    }

    let metadata = parse_metadata(&body)?;
    tracing::debug!(
        "Resolved OAuth API endpoint {} (dc: {})",
        metadata.api_endpoint,
        metadata.dc.as_deref().unwrap_or("unknown")
    );
    Ok(metadata)
}

fn parse_metadata(body: &str) -> Result<OAuthMetadata, OAuthError> {
    let metadata: OAuthMetadata =
        serde_json::from_str(body).map_err(|e| OAuthError::InvalidMetadata {
            reason: e.to_string(),
        })?;

    if metadata.api_endpoint.trim().is_empty() {
        return Err(OAuthError::InvalidMetadata {
            reason: "api_endpoint is empty".to_string(),
        });
    }

    Ok(metadata)
}
