//! Marketing API client.
//!
//! This module provides [`MailchimpClient`], built on top of the
//! [`HttpClient`](crate::clients::HttpClient), and [`MailchimpError`], the
//! error type every client method returns.
//!
//! # Base URL Resolution
//!
//! - API-key credentials: `https://<dc>.api.mailchimp.com/3.0/`, where `<dc>`
//!   is the key's data center suffix. No network call is made.
//! - OAuth credentials: the `api_endpoint` returned by the OAuth metadata
//!   endpoint, followed by `/3.0/`. One request is made during construction.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::{MailchimpClient, MailchimpConfig, Credentials};
//!
//! let config = MailchimpConfig::builder()
//!     .credentials(Credentials::api_key("me", "0123abcd-us6")?)
//!     .build()?;
//!
//! let client = MailchimpClient::new(&config).await?;
//! let lists = client.get_lists().await?;
//! println!("{}", lists["total_items"]);
//! ```

mod client;
mod errors;

pub use client::MailchimpClient;
pub use errors::MailchimpError;
