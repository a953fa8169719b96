//! List members.
//!
//! Members are addressed by the MD5 hash of their lowercased email address;
//! the methods here take the address and hash it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::HttpResponse;
use crate::rest::path::{self, MEMBERS};
use crate::rest::resources::optional_timestamp;
use crate::rest::{validate_member_update, validate_new_member, ValidationError};
use crate::{MailchimpClient, MailchimpError};

/// A subscriber's status in a list.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::rest::resources::MemberStatus;
///
/// let status: MemberStatus = "pending".parse().unwrap();
/// assert_eq!(status, MemberStatus::Pending);
/// assert_eq!(status.to_string(), "pending");
/// assert!("archived".parse::<MemberStatus>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Subscribed,
    Unsubscribed,
    Cleaned,
    Pending,
}

impl MemberStatus {
    /// The status values accepted when adding or updating a member.
    pub const ALLOWED: &'static [&'static str] = &["subscribed", "unsubscribed", "cleaned", "pending"];

    /// Returns the status as the API spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Subscribed => "subscribed",
            Self::Unsubscribed => "unsubscribed",
            Self::Cleaned => "cleaned",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subscribed" => Ok(Self::Subscribed),
            "unsubscribed" => Ok(Self::Unsubscribed),
            "cleaned" => Ok(Self::Cleaned),
            "pending" => Ok(Self::Pending),
            other => Err(ValidationError::InvalidValue {
                field: "status",
                value: format!("{other:?}"),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

/// A tag attached to a list member.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MemberTag {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

/// A list member as returned by the members endpoints.
///
/// `status` is kept as a string: responses may carry values such as
/// `transactional` or `archived` that cannot be set through this client.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ListMember {
    pub id: String,
    pub email_address: String,
    #[serde(default)]
    pub unique_email_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub web_id: Option<u64>,
    #[serde(default)]
    pub email_type: Option<String>,
    pub status: String,
    #[serde(default)]
    pub merge_fields: Map<String, Value>,
    #[serde(default)]
    pub interests: Option<Map<String, Value>>,
    #[serde(default)]
    pub ip_signup: Option<String>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub timestamp_signup: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub timestamp_opt: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub last_changed: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub vip: Option<bool>,
    #[serde(default)]
    pub email_client: Option<String>,
    #[serde(default)]
    pub tags: Vec<MemberTag>,
    #[serde(default)]
    pub list_id: Option<String>,
}

/// The payload for adding a member to a list.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::rest::resources::{MemberStatus, NewMember};
///
/// let member = NewMember::new("freddie@example.com", MemberStatus::Subscribed)
///     .merge_field("FNAME", "Freddie")
///     .tag("hats");
///
/// let value = serde_json::to_value(&member).unwrap();
/// assert_eq!(value["status"], "subscribed");
/// assert_eq!(value["merge_fields"]["FNAME"], "Freddie");
/// ```
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewMember {
    pub email_address: String,
    pub status: MemberStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_type: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub merge_fields: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl NewMember {
    /// Creates a payload with only the address and status set.
    #[must_use]
    pub fn new(email_address: impl Into<String>, status: MemberStatus) -> Self {
        Self {
            email_address: email_address.into(),
            status,
            email_type: None,
            merge_fields: Map::new(),
            language: None,
            vip: None,
            tags: Vec::new(),
        }
    }

    /// Sets a merge field value, keyed by its tag (e.g. `FNAME`).
    #[must_use]
    pub fn merge_field(mut self, tag: impl Into<String>, value: impl Into<Value>) -> Self {
        self.merge_fields.insert(tag.into(), value.into());
        self
    }

    /// Sets the member's language code (e.g. `fr`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Marks the member as VIP.
    #[must_use]
    pub const fn vip(mut self, vip: bool) -> Self {
        self.vip = Some(vip);
        self
    }

    /// Adds a tag by name.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

impl MailchimpClient {
    /// Gets information about the members of a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_list_members(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(MEMBERS, list_id)).await
    }

    /// Gets one list member, addressed by email.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_list_member(
        &self,
        list_id: &str,
        email: &str,
    ) -> Result<Value, MailchimpError> {
        self.get(&path::member(list_id, email)).await
    }

    /// Adds a new member to a list.
    ///
    /// `email_address` and `status` are required; see
    /// [`validate_new_member`](crate::rest::validate_new_member).
    ///
    /// # Errors
    ///
    /// - [`MailchimpError::Validation`] if the payload is invalid
    /// - [`MailchimpError::Http`] for transport and API errors
    pub async fn add_new_list_member(
        &self,
        list_id: &str,
        data: &Value,
    ) -> Result<Value, MailchimpError> {
        validate_new_member(data)?;
        self.post(&path::list_collection(MEMBERS, list_id), data.clone())
            .await
    }

    /// Adds a new member to a list from a typed payload.
    ///
    /// # Errors
    ///
    /// See [`MailchimpClient::add_new_list_member`].
    pub async fn add_member(
        &self,
        list_id: &str,
        member: &NewMember,
    ) -> Result<Value, MailchimpError> {
        let data = serde_json::to_value(member)?;
        self.add_new_list_member(list_id, &data).await
    }

    /// Updates a list member, addressed by email.
    ///
    /// # Errors
    ///
    /// - [`MailchimpError::Validation`] if the payload is not an object or
    ///   carries an unknown `status`
    /// - [`MailchimpError::Http`] for transport and API errors
    pub async fn update_list_member(
        &self,
        list_id: &str,
        email: &str,
        data: &Value,
    ) -> Result<Value, MailchimpError> {
        validate_member_update(data)?;
        self.put(&path::member(list_id, email), data.clone()).await
    }

    /// Removes a member from a list, addressed by email.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn remove_list_member(
        &self,
        list_id: &str,
        email: &str,
    ) -> Result<HttpResponse, MailchimpError> {
        self.delete(&path::member(list_id, email)).await
    }
}
