//! List webhooks.
//!
//! These manage the webhook subscriptions of a list. Delivering or
//! receiving webhook calls is outside this client.

use serde_json::Value;

use crate::clients::HttpResponse;
use crate::rest::path::{self, WEBHOOK, WEBHOOKS};
use crate::{MailchimpClient, MailchimpError};

impl MailchimpClient {
    /// Gets the webhooks configured for a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_webhooks(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(WEBHOOKS, list_id)).await
    }

    /// Gets one webhook of a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_webhook(
        &self,
        list_id: &str,
        webhook_id: &str,
    ) -> Result<Value, MailchimpError> {
        self.get(&path::list_item(WEBHOOK, list_id, ("webhook_id", webhook_id)))
            .await
    }

    /// Deletes a webhook. The response is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn remove_webhook(
        &self,
        list_id: &str,
        webhook_id: &str,
    ) -> Result<HttpResponse, MailchimpError> {
        self.delete(&path::list_item(WEBHOOK, list_id, ("webhook_id", webhook_id)))
            .await
    }

    /// Creates a webhook. Not yet offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`MailchimpError::NotImplemented`].
    pub async fn create_webhook(
        &self,
        _list_id: &str,
        _data: &Value,
    ) -> Result<Value, MailchimpError> {
        Err(MailchimpError::NotImplemented {
            operation: "create_webhook",
        })
    }

    /// Updates a webhook. Not yet offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`MailchimpError::NotImplemented`].
    pub async fn update_webhook(
        &self,
        _list_id: &str,
        _webhook_id: &str,
        _data: &Value,
    ) -> Result<Value, MailchimpError> {
        Err(MailchimpError::NotImplemented {
            operation: "update_webhook",
        })
    }
}
