//! Segments and tags of a list.

use serde_json::Value;

use crate::clients::HttpResponse;
use crate::rest::path::{self, SEGMENT, SEGMENTS};
use crate::{MailchimpClient, MailchimpError};

impl MailchimpClient {
    /// Gets the segments of a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_segments(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(SEGMENTS, list_id)).await
    }

    /// Gets one segment of a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_segment(
        &self,
        list_id: &str,
        segment_id: &str,
    ) -> Result<Value, MailchimpError> {
        self.get(&path::list_item(SEGMENT, list_id, ("segment_id", segment_id)))
            .await
    }

    /// Deletes a segment. The response is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn remove_segment(
        &self,
        list_id: &str,
        segment_id: &str,
    ) -> Result<HttpResponse, MailchimpError> {
        self.delete(&path::list_item(SEGMENT, list_id, ("segment_id", segment_id)))
            .await
    }

    /// Creates a segment. Not yet offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`MailchimpError::NotImplemented`].
    pub async fn create_new_segment(
        &self,
        _list_id: &str,
        _data: &Value,
    ) -> Result<Value, MailchimpError> {
        Err(MailchimpError::NotImplemented {
            operation: "create_new_segment",
        })
    }

    /// Removes a member from a static segment. Not yet offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`MailchimpError::NotImplemented`].
    pub async fn remove_list_members_segment(
        &self,
        _list_id: &str,
        _segment_id: &str,
        _email: &str,
    ) -> Result<HttpResponse, MailchimpError> {
        Err(MailchimpError::NotImplemented {
            operation: "remove_list_members_segment",
        })
    }

    /// Updates a segment. Not yet offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`MailchimpError::NotImplemented`].
    pub async fn update_segment(
        &self,
        _list_id: &str,
        _segment_id: &str,
        _data: &Value,
    ) -> Result<Value, MailchimpError> {
        Err(MailchimpError::NotImplemented {
            operation: "update_segment",
        })
    }
}
