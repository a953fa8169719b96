//! HTTP client types for Marketing API communication.
//!
//! This module provides the HTTP layer every endpoint call goes through:
//! dispatch, response parsing and response classification.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MailchimpClient`]: The client holding credentials and the resolved base URL
//! - [`HttpClient`]: The async HTTP dispatcher
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`classify`]: Maps an error response to an [`ApiError`]
//! - [`ApiError`] and [`ErrorKind`]: A classified API error and its kind
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::clients::{HttpClient, HttpRequest};
//! use mailchimp_api::Credentials;
//!
//! let credentials = Credentials::api_key("me", "0123abcd-us6")?;
//! let client = HttpClient::new(
//!     reqwest::Client::new(),
//!     "https://us6.api.mailchimp.com/3.0/",
//!     &credentials,
//!     None,
//! );
//!
//! let response = client.request(&HttpRequest::get("lists/")?).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call sends one request; a `429` surfaces as
//! [`ErrorKind::TooManyRequests`] for the caller to act on.

mod api_error;
mod classifier;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod mailchimp;

pub use api_error::{ApiError, ErrorKind};
pub use classifier::classify;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::HttpResponse;

pub use mailchimp::{MailchimpClient, MailchimpError};
