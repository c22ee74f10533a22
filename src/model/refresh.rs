/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How concurrent requests that hit a `401` coordinate their token refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshPolicy {
    /// Every request that sees a `401` runs its own refresh
    #[default]
    Independent,
    /// Refreshes are serialized; a caller that waited behind another refresh
    /// reuses the token it produced instead of refreshing again
    SingleFlight,
}

impl RefreshPolicy {
    /// True for [`RefreshPolicy::SingleFlight`]
    #[must_use]
    pub fn is_single_flight(&self) -> bool {
        matches!(self, RefreshPolicy::SingleFlight)
    }
}

impl FromStr for RefreshPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "independent" => Ok(RefreshPolicy::Independent),
            "single-flight" | "singleflight" => Ok(RefreshPolicy::SingleFlight),
            other => Err(format!("unknown refresh policy: {other}")),
        }
    }
}

impl fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshPolicy::Independent => f.write_str("independent"),
            RefreshPolicy::SingleFlight => f.write_str("single-flight"),
        }
    }
}
