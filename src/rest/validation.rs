//! Required-field validation for list and member payloads.
//!
//! Presence is checked by key: a field set to `null` counts as present and
//! is left for the API to judge.

use serde_json::{Map, Value};

use crate::rest::errors::ValidationError;
use crate::rest::resources::MemberStatus;

const CONTACT_FIELDS: [(&str, &str); 6] = [
    ("company", "contact.company"),
    ("address1", "contact.address1"),
    ("city", "contact.city"),
    ("state", "contact.state"),
    ("zip", "contact.zip"),
    ("country", "contact.country"),
];

const CAMPAIGN_DEFAULT_FIELDS: [(&str, &str); 4] = [
    ("from_name", "campaign_defaults.from_name"),
    ("from_email", "campaign_defaults.from_email"),
    ("subject", "campaign_defaults.subject"),
    ("language", "campaign_defaults.language"),
];

/// Validates a new-list payload.
///
/// Checks, in order: `name`, `contact` and its six fields,
/// `permission_reminder`, `campaign_defaults` and its four fields,
/// `email_type_option`, then that `email_type_option` is a boolean.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::rest::{validate_new_list, ValidationError};
/// use serde_json::json;
///
/// let result = validate_new_list(&json!({"name": "Newsletter"}));
/// assert_eq!(result, Err(ValidationError::MissingField { field: "contact" }));
/// ```
pub fn validate_new_list(data: &Value) -> Result<(), ValidationError> {
    let root = data.as_object();

    require(root, "name", "name")?;
    let contact = require(root, "contact", "contact")?;
    for (key, field) in CONTACT_FIELDS {
        require(contact.as_object(), key, field)?;
    }

    require(root, "permission_reminder", "permission_reminder")?;
    let defaults = require(root, "campaign_defaults", "campaign_defaults")?;
    for (key, field) in CAMPAIGN_DEFAULT_FIELDS {
        require(defaults.as_object(), key, field)?;
    }

    let email_type_option = require(root, "email_type_option", "email_type_option")?;
    if !email_type_option.is_boolean() {
        return Err(ValidationError::InvalidType {
            field: "email_type_option",
            expected: "a boolean",
        });
    }

    Ok(())
}

/// Validates a new-member payload.
///
/// Requires `email_address` and `status`, and `status` must be one of
/// `subscribed`, `unsubscribed`, `cleaned` or `pending`.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::rest::{validate_new_member, ValidationError};
/// use serde_json::json;
///
/// let result = validate_new_member(&json!({
///     "email_address": "a@example.com",
///     "status": "archived",
/// }));
/// assert!(matches!(result, Err(ValidationError::InvalidValue { field: "status", .. })));
/// ```
pub fn validate_new_member(data: &Value) -> Result<(), ValidationError> {
    let root = data.as_object();

    require(root, "email_address", "email_address")?;
    let status = require(root, "status", "status")?;
    check_status(status)
}

/// Validates a member update payload.
///
/// No field is required, but a `status`, when present, must be valid.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidType`] for a non-object payload, or
/// [`ValidationError::InvalidValue`] for an unknown status.
pub fn validate_member_update(data: &Value) -> Result<(), ValidationError> {
    let Some(root) = data.as_object() else {
        return Err(ValidationError::InvalidType {
            field: "member",
            expected: "an object",
        });
    };

    root.get("status").map_or(Ok(()), check_status)
}

fn require<'a>(
    object: Option<&'a Map<String, Value>>,
    key: &str,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    object
        .and_then(|o| o.get(key))
        .ok_or(ValidationError::MissingField { field })
}

fn check_status(status: &Value) -> Result<(), ValidationError> {
    let allowed = status
        .as_str()
        .is_some_and(|s| s.parse::<MemberStatus>().is_ok());

    if allowed {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: "status",
            value: status.to_string(),
            allowed: MemberStatus::ALLOWED,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_list() -> Value {
        json!({
            "name": "Freddie's Favorite Hats",
            "contact": {
                "company": "Mailchimp",
                "address1": "675 Ponce De Leon Ave NE",
                "city": "Atlanta",
                "state": "GA",
                "zip": "30308",
                "country": "US"
            },
            "permission_reminder": "You're receiving this email because you signed up for updates.",
            "campaign_defaults": {
                "from_name": "Freddie",
                "from_email": "freddie@example.com",
                "subject": "",
                "language": "en"
            },
            "email_type_option": true
        })
    }

    fn without(mut data: Value, pointer: &str) -> Value {
        let (parent, key) = pointer.rsplit_once('/').unwrap();
        let target = if parent.is_empty() {
            &mut data
        } else {
            data.pointer_mut(parent).unwrap()
        };
        target.as_object_mut().unwrap().remove(key);
        data
    }

    #[test]
    fn test_valid_list_passes() {
        assert_eq!(validate_new_list(&valid_list()), Ok(()));
    }

    #[test]
    fn test_each_missing_list_field_is_reported_by_dotted_name() {
        let cases = [
            ("/name", "name"),
            ("/contact", "contact"),
            ("/contact/company", "contact.company"),
            ("/contact/address1", "contact.address1"),
            ("/contact/city", "contact.city"),
            ("/contact/state", "contact.state"),
            ("/contact/zip", "contact.zip"),
            ("/contact/country", "contact.country"),
            ("/permission_reminder", "permission_reminder"),
            ("/campaign_defaults", "campaign_defaults"),
            ("/campaign_defaults/from_name", "campaign_defaults.from_name"),
            ("/campaign_defaults/from_email", "campaign_defaults.from_email"),
            ("/campaign_defaults/subject", "campaign_defaults.subject"),
            ("/campaign_defaults/language", "campaign_defaults.language"),
            ("/email_type_option", "email_type_option"),
        ];

        for (pointer, field) in cases {
            assert_eq!(
                validate_new_list(&without(valid_list(), pointer)),
                Err(ValidationError::MissingField { field }),
                "removing {pointer}"
            );
        }
    }

    #[test]
    fn test_fields_are_checked_in_order() {
        let data = json!({"contact": {}, "campaign_defaults": {}});
        assert_eq!(
            validate_new_list(&data),
            Err(ValidationError::MissingField { field: "name" })
        );

        let data = json!({"name": "x", "contact": {}});
        assert_eq!(
            validate_new_list(&data),
            Err(ValidationError::MissingField { field: "contact.company" })
        );
    }

    #[test]
    fn test_email_type_option_must_be_boolean() {
        let mut data = valid_list();
        data["email_type_option"] = json!("yes");
        assert_eq!(
            validate_new_list(&data),
            Err(ValidationError::InvalidType {
                field: "email_type_option",
                expected: "a boolean",
            })
        );

        data["email_type_option"] = json!(false);
        assert_eq!(validate_new_list(&data), Ok(()));
    }

    #[test]
    fn test_non_object_payload_reports_first_field() {
        assert_eq!(
            validate_new_list(&json!([1, 2, 3])),
            Err(ValidationError::MissingField { field: "name" })
        );
        assert_eq!(
            validate_new_member(&json!("a@example.com")),
            Err(ValidationError::MissingField { field: "email_address" })
        );
    }

    #[test]
    fn test_non_object_contact_reports_its_first_field() {
        let mut data = valid_list();
        data["contact"] = json!("Atlanta");
        assert_eq!(
            validate_new_list(&data),
            Err(ValidationError::MissingField { field: "contact.company" })
        );
    }

    #[test]
    fn test_member_requires_email_then_status() {
        assert_eq!(
            validate_new_member(&json!({"status": "subscribed"})),
            Err(ValidationError::MissingField { field: "email_address" })
        );
        assert_eq!(
            validate_new_member(&json!({"email_address": "a@example.com"})),
            Err(ValidationError::MissingField { field: "status" })
        );
    }

    #[test]
    fn test_member_accepts_every_allowed_status() {
        for status in MemberStatus::ALLOWED {
            let data = json!({"email_address": "a@example.com", "status": status});
            assert_eq!(validate_new_member(&data), Ok(()), "status {status}");
        }
    }

    #[test]
    fn test_member_rejects_unknown_status() {
        let data = json!({"email_address": "a@example.com", "status": "Subscribed"});
        assert_eq!(
            validate_new_member(&data),
            Err(ValidationError::InvalidValue {
                field: "status",
                value: "\"Subscribed\"".to_string(),
                allowed: MemberStatus::ALLOWED,
            })
        );

        let data = json!({"email_address": "a@example.com", "status": 1});
        assert!(matches!(
            validate_new_member(&data),
            Err(ValidationError::InvalidValue { value, .. }) if value == "1"
        ));
    }

    #[test]
    fn test_member_update_checks_status_only_when_present() {
        assert_eq!(validate_member_update(&json!({"merge_fields": {"FNAME": "Ann"}})), Ok(()));
        assert_eq!(validate_member_update(&json!({"status": "cleaned"})), Ok(()));
        assert!(matches!(
            validate_member_update(&json!({"status": "gone"})),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert!(matches!(
            validate_member_update(&json!(null)),
            Err(ValidationError::InvalidType { field: "member", .. })
        ));
    }
}
