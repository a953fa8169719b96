//! List endpoints of the Marketing API.
//!
//! This module adds the list endpoint methods to
//! [`MailchimpClient`](crate::MailchimpClient) and provides what they are
//! built from:
//!
//! - **Validation**: required-field checks run before a payload is sent
//!   ([`validate_new_list`], [`validate_new_member`], [`validate_member_update`])
//! - **Path building**: endpoint templates filled with percent-encoded ids
//!   ([`build_path`]) and the member id hash ([`subscriber_hash`])
//! - **[`resources`]**: the endpoint methods and typed views per resource
//! - **[`ValidationError`]**: the error returned by validation
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::MailchimpClient;
//! use serde_json::json;
//!
//! let client = MailchimpClient::with_api_key("me", "0123abcd-us6").await?;
//!
//! let member = client
//!     .add_new_list_member("57afe96172", &json!({
//!         "email_address": "freddie@example.com",
//!         "status": "subscribed",
//!     }))
//!     .await?;
//!
//! let response = client.remove_list_member("57afe96172", "Freddie@Example.com").await?;
//! assert_eq!(response.code, 204);
//! ```

mod errors;
mod path;
pub mod resources;
mod validation;

pub use errors::ValidationError;
pub use path::{build_path, subscriber_hash};
pub use validation::{validate_member_update, validate_new_list, validate_new_member};
