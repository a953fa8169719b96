//! Configuration types for the Mailchimp API client.
//!
//! # Overview
//!
//! - [`MailchimpConfig`]: the configuration a client is built from
//! - [`MailchimpConfigBuilder`]: a builder for [`MailchimpConfig`]
//! - [`AccountName`], [`ApiKey`], [`AccessToken`]: validated credential newtypes
//! - [`HostUrl`]: a validated absolute URL
//! - [`ApiVersion`]: the Marketing API version
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::{MailchimpConfig, AccountName, ApiKey};
//!
//! let config = MailchimpConfig::builder()
//!     .api_key(AccountName::new("me").unwrap(), ApiKey::new("0123abcd-us6").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, AccountName, ApiKey, HostUrl};
pub use version::ApiVersion;

use crate::auth::Credentials;
use crate::error::ConfigError;

/// The Marketing API domain; the data center is prepended as a subdomain.
pub const API_DOMAIN: &str = "api.mailchimp.com";

/// The OAuth metadata endpoint that resolves a token to its API endpoint.
pub const OAUTH_METADATA_URL: &str = "https://login.mailchimp.com/oauth2/metadata";

/// Configuration for the Mailchimp API client.
///
/// # Thread Safety
///
/// `MailchimpConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::{MailchimpConfig, AccessToken, ApiVersion};
///
/// let config = MailchimpConfig::builder()
///     .access_token(AccessToken::new("oauth-token").unwrap())
///     .api_version(ApiVersion::V3_0)
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert!(config.credentials().is_oauth());
/// ```
#[derive(Clone, Debug)]
pub struct MailchimpConfig {
    credentials: Credentials,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    metadata_url: HostUrl,
    user_agent_prefix: Option<String>,
}

impl MailchimpConfig {
    /// Creates a new builder for constructing a `MailchimpConfig`.
    #[must_use]
    pub fn builder() -> MailchimpConfigBuilder {
        MailchimpConfigBuilder::new()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the OAuth metadata URL.
    #[must_use]
    pub const fn metadata_url(&self) -> &HostUrl {
        &self.metadata_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL for API-key credentials, or `None` for OAuth.
    ///
    /// The base URL is `https://<dc>.api.mailchimp.com/<version>/`, or the
    /// API host override followed by the version segment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailchimp_api::{MailchimpConfig, Credentials};
    ///
    /// let config = MailchimpConfig::builder()
    ///     .credentials(Credentials::api_key("me", "0123abcd-us6").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     config.api_key_base_url().as_deref(),
    ///     Some("https://us6.api.mailchimp.com/3.0/")
    /// );
    /// ```
    #[must_use]
    pub fn api_key_base_url(&self) -> Option<String> {
        match &self.credentials {
            Credentials::ApiKey { api_key, .. } => Some(self.api_host.as_ref().map_or_else(
                || {
                    format!(
                        "https://{}.{API_DOMAIN}{}",
                        api_key.data_center(),
                        self.api_version.path_segment()
                    )
                },
                |host| format!("{host}{}", self.api_version.path_segment()),
            )),
            Credentials::OAuth { .. } => None,
        }
    }
}

// Verify MailchimpConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MailchimpConfig>();
};

/// Builder for constructing [`MailchimpConfig`] instances.
///
/// One credential form is required. When both an access token and an API
/// key are set, the access token is used.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest()`]
/// - `api_host`: `None`
/// - `metadata_url`: [`OAUTH_METADATA_URL`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct MailchimpConfigBuilder {
    api_key: Option<(AccountName, ApiKey)>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    metadata_url: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl MailchimpConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account name and API key for basic auth.
    #[must_use]
    pub fn api_key(mut self, account: AccountName, api_key: ApiKey) -> Self {
        self.api_key = Some((account, api_key));
        self
    }

    /// Sets the OAuth access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets either credential form from a [`Credentials`] value.
    #[must_use]
    pub fn credentials(self, credentials: Credentials) -> Self {
        match credentials {
            Credentials::ApiKey { account, api_key } => self.api_key(account, api_key),
            Credentials::OAuth { access_token } => self.access_token(access_token),
        }
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the scheme and host used with API-key credentials.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Overrides the OAuth metadata URL.
    #[must_use]
    pub fn metadata_url(mut self, url: HostUrl) -> Self {
        self.metadata_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MailchimpConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialRequired`] if no credentials are set.
    pub fn build(self) -> Result<MailchimpConfig, ConfigError> {
        let credentials = match (self.access_token, self.api_key) {
            (Some(access_token), api_key) => {
                if api_key.is_some() {
                    tracing::debug!("Both OAuth and API key credentials configured; using OAuth");
                }
                Credentials::OAuth { access_token }
            }
            (None, Some((account, api_key))) => Credentials::ApiKey { account, api_key },
            (None, None) => return Err(ConfigError::CredentialRequired),
        };

        let metadata_url = match self.metadata_url {
            Some(url) => url,
            None => HostUrl::new(OAUTH_METADATA_URL)?,
        };

        Ok(MailchimpConfig {
            credentials,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            metadata_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
