//! List resources: endpoint methods and typed views.
//!
//! Each module adds its endpoint methods to
//! [`MailchimpClient`](crate::MailchimpClient) and defines the typed views
//! for the JSON it returns. Endpoint methods return raw `serde_json::Value`;
//! convert with `serde_json::from_value` when a typed view is wanted.
//!
//! ```text
//! resources/
//!   lists.rs               <- lists, list reports, typed list payloads
//!   members.rs             <- list members, subscriber status
//!   merge_fields.rs        <- merge fields
//!   interest_categories.rs <- interest categories
//!   segments.rs            <- segments
//!   signup_forms.rs        <- signup forms
//!   webhooks.rs            <- list webhooks
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use mailchimp_api::rest::resources::{List, MemberStatus, NewMember};
//!
//! let list: List = serde_json::from_value(client.get_list("57afe96172").await?)?;
//! println!("{} has {} members", list.name, list.stats.map_or(0, |s| s.member_count));
//!
//! let member = NewMember::new("freddie@example.com", MemberStatus::Pending);
//! client.add_member("57afe96172", &member).await?;
//! ```
//!
//! # Timestamps
//!
//! The API sends timestamps as ISO 8601 strings and uses `""` for "never".
//! Timestamp fields are `Option<DateTime<FixedOffset>>`, with `""` read as
//! `None`.

mod interest_categories;
mod lists;
mod members;
mod merge_fields;
mod segments;
mod signup_forms;
mod webhooks;

pub use lists::{CampaignDefaults, List, ListContact, ListStats, NewList};
pub use members::{ListMember, MemberStatus, MemberTag, NewMember};
pub use merge_fields::MergeField;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer};

/// Deserializes an optional timestamp, treating `""` as absent.
pub(crate) fn optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
