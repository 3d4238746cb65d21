//! Admin API version selection.
//!
//! The version is part of the GraphQL endpoint path
//! (`/admin/api/{version}/graphql.json`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Shopify Admin API version.
///
/// Shopify releases quarterly versions (January, April, July, October).
/// Known versions get a variant; any other well-formed `YYYY-MM` release is
/// carried as [`ApiVersion::Custom`].
///
/// ```rust
/// use shopify_file_catalog::ApiVersion;
///
/// let version: ApiVersion = "2026-01".parse().unwrap();
/// assert_eq!(version, ApiVersion::latest());
/// assert_eq!(version.to_string(), "2026-01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2025-04
    V2025_04,
    /// API version 2025-07
    V2025_07,
    /// API version 2025-10
    V2025_10,
    /// API version 2026-01
    V2026_01,
    /// Unstable API version for development and testing.
    Unstable,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2026_01
    }

    /// Returns the oldest version still inside Shopify's support window.
    #[must_use]
    pub const fn minimum_supported() -> Self {
        Self::V2025_04
    }

    /// Returns `true` for custom versions older than the support window.
    ///
    /// Known variants are all inside the window; `Unstable` is never
    /// deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        match self {
            Self::Custom(v) => v.as_str() < Self::minimum_supported().as_str(),
            _ => false,
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::V2026_01 => "2026-01",
            Self::Unstable => "unstable",
            Self::Custom(s) => s,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };
        year.len() == 4
            && year.chars().all(|c| c.is_ascii_digit())
            && matches!(month, "01" | "04" | "07" | "10")
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "2025-04" => Ok(Self::V2025_04),
            "2025-07" => Ok(Self::V2025_07),
            "2025-10" => Ok(Self::V2025_10),
            "2026-01" => Ok(Self::V2026_01),
            "unstable" => Ok(Self::Unstable),
            _ if Self::is_valid_version_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
