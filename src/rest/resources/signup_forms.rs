//! Hosted signup forms.

use serde_json::Value;

use crate::rest::path::{self, SIGNUP_FORMS};
use crate::{MailchimpClient, MailchimpError};

impl MailchimpClient {
    /// Gets the signup forms of a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_signup_forms(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(SIGNUP_FORMS, list_id)).await
    }

    /// Customizes a list's default signup form. Not yet offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`MailchimpError::NotImplemented`].
    pub async fn customize_signup(
        &self,
        _list_id: &str,
        _data: &Value,
    ) -> Result<Value, MailchimpError> {
        Err(MailchimpError::NotImplemented {
            operation: "customize_signup",
        })
    }
}
