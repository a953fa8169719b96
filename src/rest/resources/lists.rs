//! Lists (audiences) and their reports.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::HttpResponse;
use crate::rest::path::{self, LISTS};
use crate::rest::resources::optional_timestamp;
use crate::rest::validate_new_list;
use crate::{MailchimpClient, MailchimpError};

/// Contact information shown in the footer of list emails.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ListContact {
    pub company: String,
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Default values for campaigns sent to a list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CampaignDefaults {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub language: String,
}

/// Subscriber and campaign counters reported with a list.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ListStats {
    #[serde(default)]
    pub member_count: u64,
    #[serde(default)]
    pub unsubscribe_count: u64,
    #[serde(default)]
    pub cleaned_count: u64,
    #[serde(default)]
    pub campaign_count: u64,
    #[serde(default)]
    pub open_rate: Option<f64>,
    #[serde(default)]
    pub click_rate: Option<f64>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub campaign_last_sent: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub last_sub_date: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub last_unsub_date: Option<DateTime<FixedOffset>>,
}

/// A list as returned by `get_list` and in the `lists` array of `get_lists`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct List {
    pub id: String,
    #[serde(default)]
    pub web_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub contact: Option<ListContact>,
    #[serde(default)]
    pub permission_reminder: Option<String>,
    #[serde(default)]
    pub use_archive_bar: Option<bool>,
    #[serde(default)]
    pub campaign_defaults: Option<CampaignDefaults>,
    #[serde(default)]
    pub email_type_option: Option<bool>,
    #[serde(default)]
    pub double_optin: Option<bool>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub date_created: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub list_rating: Option<u8>,
    #[serde(default)]
    pub subscribe_url_short: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub stats: Option<ListStats>,
}

/// The payload for creating a list.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::rest::resources::{CampaignDefaults, ListContact, NewList};
///
/// let list = NewList::new(
///     "Freddie's Favorite Hats",
///     ListContact {
///         company: "Mailchimp".to_string(),
///         address1: "675 Ponce De Leon Ave NE".to_string(),
///         city: "Atlanta".to_string(),
///         state: "GA".to_string(),
///         zip: "30308".to_string(),
///         country: "US".to_string(),
///         ..Default::default()
///     },
///     "You signed up for updates on our website.",
///     CampaignDefaults {
///         from_name: "Freddie".to_string(),
///         from_email: "freddie@example.com".to_string(),
///         subject: String::new(),
///         language: "en".to_string(),
///     },
/// )
/// .double_optin(true);
///
/// assert!(list.email_type_option);
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewList {
    pub name: String,
    pub contact: ListContact,
    pub permission_reminder: String,
    pub campaign_defaults: CampaignDefaults,
    pub email_type_option: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_archive_bar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_subscribe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_unsubscribe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_optin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_permissions: Option<bool>,
}

impl NewList {
    /// Creates a payload with the required fields; `email_type_option` defaults to `true`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        contact: ListContact,
        permission_reminder: impl Into<String>,
        campaign_defaults: CampaignDefaults,
    ) -> Self {
        Self {
            name: name.into(),
            contact,
            permission_reminder: permission_reminder.into(),
            campaign_defaults,
            email_type_option: true,
            use_archive_bar: None,
            notify_on_subscribe: None,
            notify_on_unsubscribe: None,
            double_optin: None,
            marketing_permissions: None,
        }
    }

    /// Sets whether subscribers may choose HTML or plain-text email.
    #[must_use]
    pub const fn email_type_option(mut self, enabled: bool) -> Self {
        self.email_type_option = enabled;
        self
    }

    /// Requires confirmation by email before a signup is subscribed.
    #[must_use]
    pub const fn double_optin(mut self, enabled: bool) -> Self {
        self.double_optin = Some(enabled);
        self
    }

    /// Sets the address notified of new subscribers.
    #[must_use]
    pub fn notify_on_subscribe(mut self, email: impl Into<String>) -> Self {
        self.notify_on_subscribe = Some(email.into());
        self
    }

    /// Sets the address notified of unsubscribes.
    #[must_use]
    pub fn notify_on_unsubscribe(mut self, email: impl Into<String>) -> Self {
        self.notify_on_unsubscribe = Some(email.into());
        self
    }
}

impl MailchimpClient {
    /// Gets information about all lists in the account.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_lists(&self) -> Result<Value, MailchimpError> {
        self.get(LISTS).await
    }

    /// Gets information about a specific list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_list(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list(list_id)).await
    }

    /// Creates a new list.
    ///
    /// The payload is validated before sending: see
    /// [`validate_new_list`](crate::rest::validate_new_list).
    ///
    /// # Errors
    ///
    /// - [`MailchimpError::Validation`] if a required field is missing or mistyped
    /// - [`MailchimpError::Http`] for transport and API errors
    pub async fn create_new_list(&self, data: &Value) -> Result<Value, MailchimpError> {
        validate_new_list(data)?;
        self.post(LISTS, data.clone()).await
    }

    /// Creates a new list from a typed payload.
    ///
    /// # Errors
    ///
    /// See [`MailchimpClient::create_new_list`].
    pub async fn create_list(&self, list: &NewList) -> Result<Value, MailchimpError> {
        let data = serde_json::to_value(list)?;
        self.create_new_list(&data).await
    }

    /// Deletes a list. The response is returned as-is (usually `204`).
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn remove_lists(&self, list_id: &str) -> Result<HttpResponse, MailchimpError> {
        self.delete(&path::list(list_id)).await
    }

    /// Updates a list's settings. Not yet offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`MailchimpError::NotImplemented`].
    pub async fn update_list(&self, _list_id: &str, _data: &Value) -> Result<Value, MailchimpError> {
        Err(MailchimpError::NotImplemented {
            operation: "update_list",
        })
    }

    /// Gets up to the previous 180 days of daily activity for a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_recent_list_activity(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(path::LIST_ACTIVITY, list_id))
            .await
    }

    /// Gets the email clients most used by a list's subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_top_email_clients(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(path::LIST_CLIENTS, list_id))
            .await
    }

    /// Gets a month-by-month summary of a list's growth.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_list_growth_history(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(path::LIST_GROWTH_HISTORY, list_id))
            .await
    }

    /// Gets a summary of a list's growth for one month, given as `YYYY-MM`.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_list_growth_history_month(
        &self,
        list_id: &str,
        month: &str,
    ) -> Result<Value, MailchimpError> {
        self.get(&path::list_item(
            path::LIST_GROWTH_HISTORY_MONTH,
            list_id,
            ("month", month),
        ))
        .await
    }

    /// Gets the countries of a list's subscribers, by IP-based geolocation.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_list_locations(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(path::LIST_LOCATIONS, list_id))
            .await
    }

    /// Gets the abuse reports for a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_abuse_reports(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(path::ABUSE_REPORTS, list_id))
            .await
    }

    /// Gets one abuse report for a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_abuse_report(
        &self,
        list_id: &str,
        report_id: &str,
    ) -> Result<Value, MailchimpError> {
        self.get(&path::list_item(
            path::ABUSE_REPORT,
            list_id,
            ("report_id", report_id),
        ))
        .await
    }
}
