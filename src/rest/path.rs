//! Endpoint path building.
//!
//! Endpoint paths are templates with `{name}` placeholders, relative to the
//! client's base URL. [`build_path`] fills the placeholders, percent-encoding
//! each value so caller-supplied ids cannot alter the path structure.
//!
//! List members are addressed by [`subscriber_hash`], the MD5 of the
//! lowercased email address.
//!
//! # Example
//!
//! ```rust
//! use mailchimp_api::rest::{build_path, subscriber_hash};
//!
//! let hash = subscriber_hash("Test@Example.com");
//! let path = build_path(
//!     "lists/{list_id}/members/{subscriber_hash}",
//!     &[("list_id", "57afe96172"), ("subscriber_hash", &hash)],
//! );
//! assert_eq!(path, "lists/57afe96172/members/55502f40dc8b7c769880b10874abc9d0");
//! ```

use md5::{Digest, Md5};

pub(crate) const LISTS: &str = "lists/";
pub(crate) const LIST: &str = "lists/{list_id}";
pub(crate) const LIST_ACTIVITY: &str = "lists/{list_id}/activity";
pub(crate) const LIST_CLIENTS: &str = "lists/{list_id}/clients";
pub(crate) const LIST_GROWTH_HISTORY: &str = "lists/{list_id}/growth-history";
pub(crate) const LIST_GROWTH_HISTORY_MONTH: &str = "lists/{list_id}/growth-history/{month}";
pub(crate) const LIST_LOCATIONS: &str = "lists/{list_id}/locations";
pub(crate) const ABUSE_REPORTS: &str = "lists/{list_id}/abuse-reports";
pub(crate) const ABUSE_REPORT: &str = "lists/{list_id}/abuse-reports/{report_id}";
pub(crate) const MEMBERS: &str = "lists/{list_id}/members/";
pub(crate) const MEMBER: &str = "lists/{list_id}/members/{subscriber_hash}";
pub(crate) const MERGE_FIELDS: &str = "lists/{list_id}/merge-fields";
pub(crate) const MERGE_FIELD: &str = "lists/{list_id}/merge-fields/{merge_id}";
pub(crate) const INTEREST_CATEGORIES: &str = "lists/{list_id}/interest-categories";
pub(crate) const SEGMENTS: &str = "lists/{list_id}/segments";
pub(crate) const SEGMENT: &str = "lists/{list_id}/segments/{segment_id}";
pub(crate) const SIGNUP_FORMS: &str = "lists/{list_id}/signup-forms";
pub(crate) const WEBHOOKS: &str = "lists/{list_id}/webhooks";
pub(crate) const WEBHOOK: &str = "lists/{list_id}/webhooks/{webhook_id}";

/// Builds a path from a template by interpolating percent-encoded values.
///
/// Replaces `{name}` placeholders in the template with the matching value.
/// Placeholders without a value are left as they are.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::rest::build_path;
///
/// let path = build_path("lists/{list_id}/segments/{segment_id}", &[
///     ("list_id", "abc"),
///     ("segment_id", "a/b"),
/// ]);
/// assert_eq!(path, "lists/abc/segments/a%2Fb");
/// ```
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

/// Returns the subscriber hash for an email address.
///
/// The hash is the lowercase hex MD5 digest of the lowercased address, so
/// addresses differing only in case share a hash.
#[must_use]
pub fn subscriber_hash(email: &str) -> String {
    let digest = Md5::digest(email.to_lowercase().as_bytes());
    hex::encode(digest)
}

/// Builds the path for a single list.
pub(crate) fn list(list_id: &str) -> String {
    build_path(LIST, &[("list_id", list_id)])
}

/// Builds the path for a collection under a list.
pub(crate) fn list_collection(template: &str, list_id: &str) -> String {
    build_path(template, &[("list_id", list_id)])
}

/// Builds the path for one item of a collection under a list.
pub(crate) fn list_item(template: &str, list_id: &str, item: (&str, &str)) -> String {
    build_path(template, &[("list_id", list_id), item])
}

/// Builds the path for a list member, addressed by email.
pub(crate) fn member(list_id: &str, email: &str) -> String {
    let hash = subscriber_hash(email);
    list_item(MEMBER, list_id, ("subscriber_hash", &hash))
}
