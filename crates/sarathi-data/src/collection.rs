//! Named content collections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Collections the site reads from and writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Product catalog.
    Products,
    /// Business lines used to group products.
    BusinessDivisions,
    /// Industries the company serves.
    IndustriesServed,
    /// Submitted quote requests.
    QuoteRequests,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::BusinessDivisions => "businessdivisions",
            Collection::IndustriesServed => "industriesserved",
            Collection::QuoteRequests => "quoterequests",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "products" => Some(Collection::Products),
            "businessdivisions" => Some(Collection::BusinessDivisions),
            "industriesserved" => Some(Collection::IndustriesServed),
            "quoterequests" => Some(Collection::QuoteRequests),
            _ => None,
        }
    }

    /// All known collections.
    pub fn all() -> [Collection; 4] {
        [
            Collection::Products,
            Collection::BusinessDivisions,
            Collection::IndustriesServed,
            Collection::QuoteRequests,
        ]
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Collection {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
