//! Mailchimp Marketing API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for the version path segment
//! appended to every base URL (`/3.0/`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Mailchimp Marketing API version.
///
/// The Marketing API has a single stable version, 3.0. The `Custom` variant
/// allows targeting a future version without a crate release.
///
/// # Example
///
/// ```rust
/// use mailchimp_api::ApiVersion;
///
/// let version: ApiVersion = "3.0".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3_0);
/// assert_eq!(version.to_string(), "3.0");
/// assert_eq!(ApiVersion::latest(), ApiVersion::V3_0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 3.0
    #[default]
    V3_0,
    /// Custom version string for future versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3_0
    }

    /// Returns `true` if this is a known stable API version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::V3_0)
    }

    /// Returns the versioned path segment, wrapped in slashes (`/3.0/`).
    #[must_use]
    pub fn path_segment(&self) -> String {
        format!("/{self}/")
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V3_0 => f.write_str("3.0"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed == "3.0" {
            return Ok(Self::V3_0);
        }

        let is_valid = trimmed
            .split_once('.')
            .is_some_and(|(major, minor)| {
                !major.is_empty()
                    && !minor.is_empty()
                    && major.chars().all(|c| c.is_ascii_digit())
                    && minor.chars().all(|c| c.is_ascii_digit())
            });

        if is_valid {
            Ok(Self::Custom(trimmed.to_string()))
        } else {
            Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_stable() {
        assert!(ApiVersion::latest().is_stable());
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
    }

    #[test]
    fn test_path_segment_wraps_version() {
        assert_eq!(ApiVersion::V3_0.path_segment(), "/3.0/");
        assert_eq!(
            ApiVersion::Custom("3.1".to_string()).path_segment(),
            "/3.1/"
        );
    }

    #[test]
    fn test_parse_custom_version() {
        let version: ApiVersion = " 4.2 ".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("4.2".to_string()));
        assert!(!version.is_stable());
    }

    #[test]
    fn test_parse_rejects_invalid_versions() {
        for input in ["", "3", "v3.0", "3.", ".0", "2024-10", "3.0.1"] {
            let result: Result<ApiVersion, _> = input.parse();
            assert!(
                matches!(result, Err(ConfigError::InvalidApiVersion { .. })),
                "expected {input:?} to be rejected"
            );
        }
    }
}
