//! Interest categories (groups of interests subscribers can pick from).

use serde_json::Value;

use crate::rest::path::{self, INTEREST_CATEGORIES};
use crate::{MailchimpClient, MailchimpError};

impl MailchimpClient {
    /// Gets the interest categories of a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_interest_categories(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(INTEREST_CATEGORIES, list_id))
            .await
    }

    /// Creates an interest category. Not yet offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`MailchimpError::NotImplemented`].
    pub async fn create_new_interest_category(
        &self,
        _list_id: &str,
        _data: &Value,
    ) -> Result<Value, MailchimpError> {
        Err(MailchimpError::NotImplemented {
            operation: "create_new_interest_category",
        })
    }

    /// Updates an interest category. Not yet offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`MailchimpError::NotImplemented`].
    pub async fn update_category(
        &self,
        _list_id: &str,
        _category_id: &str,
        _data: &Value,
    ) -> Result<Value, MailchimpError> {
        Err(MailchimpError::NotImplemented {
            operation: "update_category",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_category_writes_are_not_implemented() {
        let client = MailchimpClient::with_api_key("me", "key-us6").await.unwrap();

        let result = client.create_new_interest_category("abc", &json!({})).await;
        assert!(matches!(
            result,
            Err(MailchimpError::NotImplemented { operation: "create_new_interest_category" })
        ));

        let result = client.update_category("abc", "def", &json!({})).await;
        assert!(matches!(
            result,
            Err(MailchimpError::NotImplemented { operation: "update_category" })
        ));
    }
}
