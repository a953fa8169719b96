//! Authentication for the Mailchimp Marketing API.
//!
//! # Overview
//!
//! - [`Credentials`]: API-key basic auth or an OAuth access token
//! - [`oauth`]: the OAuth metadata lookup that resolves a token to its API endpoint
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::Credentials;
//!
//! let credentials = Credentials::resolve(Some("me"), Some("0123abcd-us6"), None).unwrap();
//! assert!(!credentials.is_oauth());
//! ```

mod credentials;
pub mod oauth;

pub use credentials::{Credentials, ACCESS_TOKEN_ENV, ACCOUNT_ENV, API_KEY_ENV};
