//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around credential strings that
//! validate their contents on construction. Secret values are masked in
//! debug output.

use crate::error::ConfigError;
use std::fmt;

/// A validated Mailchimp account (user) name used for basic auth.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::AccountName;
///
/// let account = AccountName::new("newsletter-team").unwrap();
/// assert_eq!(account.as_ref(), "newsletter-team");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    /// Creates a new validated account name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccount`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyAccount);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Mailchimp API key.
///
/// Mailchimp API keys end with the data center that serves the account,
/// separated by a hyphen (`0123456789abcdef-us6`). The data center selects
/// the API subdomain.
///
/// # Security
///
/// The `Debug` implementation masks the key and only shows the data center.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::ApiKey;
///
/// let key = ApiKey::new("0123456789abcdef-us6").unwrap();
/// assert_eq!(key.data_center(), "us6");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****-us6)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, or
    /// [`ConfigError::InvalidApiKey`] if it has no hyphen or the part after
    /// the last hyphen is not an ASCII alphanumeric data center.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        // The data center becomes part of the API host name.
        match key.rsplit_once('-') {
            Some((_, dc)) if !dc.is_empty() && dc.bytes().all(|b| b.is_ascii_alphanumeric()) => {
                Ok(Self(key))
            }
            _ => Err(ConfigError::InvalidApiKey),
        }
    }

    /// Returns the data center: the part of the key after the last hyphen.
    #[must_use]
    pub fn data_center(&self) -> &str {
        self.0.rsplit_once('-').map_or("", |(_, dc)| dc)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(*****-{})", self.data_center())
    }
}

/// A validated OAuth access token.
///
/// # Security
///
/// The `Debug` implementation masks the token value.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::AccessToken;
///
/// let token = AccessToken::new("a1b2c3").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated absolute URL with a scheme and host.
///
/// Used for the API host override and the OAuth metadata endpoint. Any
/// trailing slash is removed on construction.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::HostUrl;
///
/// let url = HostUrl::new("http://localhost:3000/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "localhost");
/// assert_eq!(url.as_ref(), "http://localhost:3000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Creates a new validated URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = url.get(host_start..).unwrap_or_default();

        // Host ends at port, path, query, or end of string
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end <= host_start {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
