//! # Mailchimp API Rust Client
//!
//! A thin async client for the Mailchimp Marketing API (v3.0), providing
//! type-safe configuration, both authentication modes, list endpoint methods
//! and typed errors for every documented API failure.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MailchimpConfig`] and [`MailchimpConfigBuilder`]
//! - Validated newtypes for credentials and URLs
//! - API-key basic auth, or OAuth with the account's API endpoint looked up
//!   via [`auth::oauth`]
//! - An async HTTP dispatcher that classifies error responses into [`ErrorKind`]s
//! - List, member, merge field, segment and webhook endpoints on [`MailchimpClient`]
//! - Client-side validation of list and member payloads
//!
//! ## Quick Start
//!
//! ```rust
//! use mailchimp_api::{MailchimpConfig, AccountName, ApiKey, ApiVersion};
//!
//! // Create configuration using the builder pattern
//! let config = MailchimpConfig::builder()
//!     .api_key(AccountName::new("me").unwrap(), ApiKey::new("0123abcd-us6").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.api_key_base_url().as_deref(),
//!     Some("https://us6.api.mailchimp.com/3.0/")
//! );
//! ```
//!
//! ## OAuth Authentication
//!
//! An OAuth access token does not carry its data center. The client looks it
//! up once, when it is created:
//!
//! ```rust,ignore
//! use mailchimp_api::MailchimpClient;
//!
//! let client = MailchimpClient::with_access_token("oauth-access-token").await?;
//! println!("Talking to {}", client.base_url());
//! ```
//!
//! When both an access token and an API key are configured, the access
//! token is used.
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use mailchimp_api::{ErrorKind, MailchimpClient, MailchimpError};
//! use serde_json::json;
//!
//! let client = MailchimpClient::with_api_key("me", "0123abcd-us6").await?;
//!
//! let lists = client.get_lists().await?;
//!
//! match client
//!     .add_new_list_member("57afe96172", &json!({
//!         "email_address": "freddie@example.com",
//!         "status": "subscribed",
//!     }))
//!     .await
//! {
//!     Ok(member) => println!("Added {}", member["id"]),
//!     Err(e) if e.kind() == Some(ErrorKind::BadRequest) => println!("Rejected: {e}"),
//!     Err(MailchimpError::Validation(e)) => println!("Fix the payload: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every non-2xx response whose body carries a `status` and a `detail` is
//! returned as an [`ApiError`], whose [`ErrorKind`] comes from a fixed
//! status code table:
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
//!
//! Any other status is [`ErrorKind::Unexpected`].
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One request per call**: Nothing is retried, cached or paginated

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    AccessToken, AccountName, ApiKey, ApiVersion, HostUrl, MailchimpConfig,
    MailchimpConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ErrorKind, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MailchimpClient, MailchimpError,
};

// Re-export OAuth and validation types for convenience
pub use auth::oauth::{OAuthError, OAuthMetadata};
pub use rest::ValidationError;
