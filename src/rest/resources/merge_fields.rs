//! Merge fields (audience fields and `*|MERGE|*` tags).

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::rest::path::{self, MERGE_FIELD, MERGE_FIELDS};
use crate::{MailchimpClient, MailchimpError};

/// An audience field, addressed in content by its `*|TAG|*`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct MergeField {
    pub merge_id: u64,
    pub tag: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub display_order: Option<u32>,
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub list_id: Option<String>,
}

impl MailchimpClient {
    /// Gets the merge fields of a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_merge_fields(&self, list_id: &str) -> Result<Value, MailchimpError> {
        self.get(&path::list_collection(MERGE_FIELDS, list_id)).await
    }

    /// Gets one merge field of a list.
    ///
    /// # Errors
    ///
    /// Returns [`MailchimpError::Http`] for transport and API errors.
    pub async fn get_merge_field(
        &self,
        list_id: &str,
        merge_id: &str,
    ) -> Result<Value, MailchimpError> {
        self.get(&path::list_item(MERGE_FIELD, list_id, ("merge_id", merge_id)))
            .await
    }

    /// Adds a merge field to a list. Not yet offered by this client.
    ///
    /// # Errors
    ///
    /// Always returns [`MailchimpError::NotImplemented`].
    pub async fn create_merge_field(
        &self,
        _list_id: &str,
        _data: &Value,
    ) -> Result<Value, MailchimpError> {
        Err(MailchimpError::NotImplemented {
            operation: "create_merge_field",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_field_reads_type_field() {
        let field: MergeField = serde_json::from_value(json!({
            "merge_id": 1,
            "tag": "FNAME",
            "name": "First Name",
            "type": "text",
            "required": false,
            "default_value": "",
            "public": true,
            "display_order": 2,
            "options": {"size": 25},
            "help_text": "",
            "list_id": "57afe96172"
        }))
        .unwrap();

        assert_eq!(field.field_type, "text");
        assert_eq!(field.tag, "FNAME");
        assert_eq!(field.options["size"], json!(25));
    }

    #[tokio::test]
    async fn test_create_merge_field_is_not_implemented() {
        let client = MailchimpClient::with_api_key("me", "key-us6").await.unwrap();
        let result = client.create_merge_field("abc", &json!({})).await;
        assert!(matches!(
            result,
            Err(MailchimpError::NotImplemented { operation: "create_merge_field" })
        ));
    }
}
