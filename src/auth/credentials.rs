//! Credential types and precedence rules.
//!
//! A client authenticates in exactly one of two ways:
//!
//! - **API key**: HTTP basic auth with the account name and API key. The
//!   key's data center suffix selects the API subdomain.
//! - **OAuth**: an `Authorization: OAuth <token>` header. The API base URL
//!   is looked up from the OAuth metadata endpoint.
//!
//! When both are supplied, OAuth wins.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::{AccessToken, AccountName, ApiKey};
use crate::error::ConfigError;

/// Environment variable holding an OAuth access token.
pub const ACCESS_TOKEN_ENV: &str = "MAILCHIMP_ACCESS_TOKEN";

/// Environment variable holding the account name for API-key auth.
pub const ACCOUNT_ENV: &str = "MAILCHIMP_ACCOUNT";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "MAILCHIMP_API_KEY";

/// The credentials a client authenticates with.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::Credentials;
///
/// let credentials = Credentials::api_key("newsletter-team", "0123abcd-us6").unwrap();
/// assert!(!credentials.is_oauth());
/// assert!(credentials.authorization_header().starts_with("Basic "));
///
/// let credentials = Credentials::oauth("token-value").unwrap();
/// assert_eq!(credentials.authorization_header(), "OAuth token-value");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Basic auth with an account name and API key.
    ApiKey {
        /// The account (user) name.
        account: AccountName,
        /// The API key, including its data center suffix.
        api_key: ApiKey,
    },
    /// An OAuth access token.
    OAuth {
        /// The access token.
        access_token: AccessToken,
    },
}

impl Credentials {
    /// Creates API-key credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the account or key is invalid.
    pub fn api_key(
        account: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::ApiKey {
            account: AccountName::new(account)?,
            api_key: ApiKey::new(api_key)?,
        })
    }

    /// Creates OAuth credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn oauth(access_token: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::OAuth {
            access_token: AccessToken::new(access_token)?,
        })
    }

    /// Chooses credentials from optional raw values.
    ///
    /// Empty strings count as absent. A non-empty access token wins over an
    /// account/API key pair; the pair is used only when both halves are
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialRequired`] when neither form is
    /// complete, or a validation error from the chosen form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailchimp_api::{ConfigError, Credentials};
    ///
    /// let credentials = Credentials::resolve(Some("me"), Some("key-us6"), Some("token")).unwrap();
    /// assert!(credentials.is_oauth());
    ///
    /// let result = Credentials::resolve(Some("me"), None, None);
    /// assert_eq!(result, Err(ConfigError::CredentialRequired));
    /// ```
    pub fn resolve(
        account: Option<&str>,
        api_key: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Self, ConfigError> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|v| !v.is_empty())
        }

        match (
            present(account),
            present(api_key),
            present(access_token),
        ) {
            (account, api_key, Some(token)) => {
                if account.is_some() || api_key.is_some() {
                    tracing::debug!("Both OAuth and API key credentials supplied; using OAuth");
                }
                Self::oauth(token)
            }
            (Some(account), Some(api_key), None) => Self::api_key(account, api_key),
            _ => Err(ConfigError::CredentialRequired),
        }
    }

    /// Reads credentials from the process environment.
    ///
    /// See [`Credentials::from_lookup`] for the variables consulted.
    ///
    /// # Errors
    ///
    /// See [`Credentials::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads credentials through a variable lookup function.
    ///
    /// Consults [`ACCESS_TOKEN_ENV`], then [`ACCOUNT_ENV`] and
    /// [`API_KEY_ENV`], with the same precedence as [`Credentials::resolve`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingEnvVar`] when only one half of the API key
    ///   pair is set
    /// - [`ConfigError::CredentialRequired`] when nothing is set
    ///
    /// # Example
    ///
    /// ```rust
    /// use mailchimp_api::Credentials;
    /// use std::collections::HashMap;
    ///
    /// let vars = HashMap::from([
    ///     ("MAILCHIMP_ACCOUNT", "me"),
    ///     ("MAILCHIMP_API_KEY", "0123abcd-us6"),
    /// ]);
    ///
    /// let credentials =
    ///     Credentials::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
    /// assert!(!credentials.is_oauth());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let access_token = read(ACCESS_TOKEN_ENV);
        let account = read(ACCOUNT_ENV);
        let api_key = read(API_KEY_ENV);

        if access_token.is_none() {
            match (&account, &api_key) {
                (Some(_), None) => return Err(ConfigError::MissingEnvVar { name: API_KEY_ENV }),
                (None, Some(_)) => return Err(ConfigError::MissingEnvVar { name: ACCOUNT_ENV }),
                _ => {}
            }
        }

        Self::resolve(
            account.as_deref(),
            api_key.as_deref(),
            access_token.as_deref(),
        )
    }

    /// Returns `true` for OAuth credentials.
    #[must_use]
    pub const fn is_oauth(&self) -> bool {
        matches!(self, Self::OAuth { .. })
    }

    /// Returns the value of the `Authorization` header for these credentials.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::ApiKey { account, api_key } => {
                let pair = format!("{}:{}", account.as_ref(), api_key.as_ref());
                format!("Basic {}", STANDARD.encode(pair))
            }
            Self::OAuth { access_token } => format!("OAuth {}", access_token.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| vars.get(name).map(|v| (*v).to_string())
    }

    #[test]
    fn test_resolve_requires_some_credential() {
        assert_eq!(
            Credentials::resolve(None, None, None),
            Err(ConfigError::CredentialRequired)
        );
        assert_eq!(
            Credentials::resolve(None, Some("key-us6"), None),
            Err(ConfigError::CredentialRequired)
        );
        assert_eq!(
            Credentials::resolve(Some(""), Some(""), Some("")),
            Err(ConfigError::CredentialRequired)
        );
    }

    #[test]
    fn test_resolve_treats_empty_token_as_absent() {
        let account = String::from("me");
        let api_key = String::from("key-us6");
        let credentials =
            Credentials::resolve(Some(&account), Some(&api_key), Some("")).unwrap();
        assert!(!credentials.is_oauth());
    }

    #[test]
    fn test_resolve_prefers_oauth() {
        let credentials =
            Credentials::resolve(Some("me"), Some("key-us6"), Some("oauth-token")).unwrap();
        assert_eq!(credentials, Credentials::oauth("oauth-token").unwrap());
    }

    #[test]
    fn test_resolve_uses_api_key_pair() {
        let credentials = Credentials::resolve(Some("me"), Some("key-us6"), None).unwrap();
        match credentials {
            Credentials::ApiKey { account, api_key } => {
                assert_eq!(account.as_ref(), "me");
                assert_eq!(api_key.data_center(), "us6");
            }
            Credentials::OAuth { .. } => panic!("expected API key credentials"),
        }
    }

    #[test]
    fn test_resolve_propagates_key_validation() {
        assert_eq!(
            Credentials::resolve(Some("me"), Some("key-"), None),
            Err(ConfigError::InvalidApiKey)
        );
    }

    #[test]
    fn test_basic_authorization_header() {
        let credentials = Credentials::api_key("user", "abc-us6").unwrap();
        // base64("user:abc-us6")
        assert_eq!(
            credentials.authorization_header(),
            "Basic dXNlcjphYmMtdXM2"
        );
    }

    #[test]
    fn test_oauth_authorization_header() {
        let credentials = Credentials::oauth("568cf681").unwrap();
        assert_eq!(credentials.authorization_header(), "OAuth 568cf681");
    }

    #[test]
    fn test_debug_output_masks_secrets() {
        let credentials = Credentials::api_key("user", "topsecret-us6").unwrap();
        assert!(!format!("{credentials:?}").contains("topsecret"));

        let credentials = Credentials::oauth("topsecret").unwrap();
        assert!(!format!("{credentials:?}").contains("topsecret"));
    }

    #[test]
    fn test_from_lookup_reads_access_token() {
        let credentials = Credentials::from_lookup(lookup_from(&[
            (ACCESS_TOKEN_ENV, "token"),
            (ACCOUNT_ENV, "me"),
        ]))
        .unwrap();
        assert!(credentials.is_oauth());
    }

    #[test]
    fn test_from_lookup_reports_missing_half_of_pair() {
        let result = Credentials::from_lookup(lookup_from(&[(ACCOUNT_ENV, "me")]));
        assert_eq!(
            result,
            Err(ConfigError::MissingEnvVar { name: API_KEY_ENV })
        );

        let result = Credentials::from_lookup(lookup_from(&[(API_KEY_ENV, "key-us6")]));
        assert_eq!(result, Err(ConfigError::MissingEnvVar { name: ACCOUNT_ENV }));
    }

    #[test]
    fn test_from_lookup_without_variables() {
        let result = Credentials::from_lookup(lookup_from(&[]));
        assert_eq!(result, Err(ConfigError::CredentialRequired));
    }
}
