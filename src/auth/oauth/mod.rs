//! OAuth support for the Mailchimp Marketing API.
//!
//! An OAuth access token does not say which data center it belongs to. Before
//! the first API call the client asks the metadata endpoint, which answers
//! with the account's `api_endpoint`:
//!
//! ```text
//! GET https://login.mailchimp.com/oauth2/metadata
//! Authorization: OAuth <token>
//! ```
//!
//! [`fetch_metadata`] performs that request and returns an [`OAuthMetadata`].
//! [`MailchimpClient::new`](crate::MailchimpClient::new) calls it for OAuth
//! credentials, so most callers never use this module directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::auth::oauth::fetch_metadata;
//! use mailchimp_api::{AccessToken, ApiVersion, HostUrl};
//!
//! let http = reqwest::Client::new();
//! let url = HostUrl::new("https://login.mailchimp.com/oauth2/metadata")?;
//! let token = AccessToken::new("oauth-token")?;
//!
//! let metadata = fetch_metadata(&http, &url, &token).await?;
//! println!("{}", metadata.base_url(&ApiVersion::V3_0));
//! ```

mod error;
mod metadata;

pub use error::OAuthError;
pub use metadata::{fetch_metadata, LoginInfo, OAuthMetadata};
