//! Inquiry list filtering.

use crate::quote::{QuoteRequest, QuoteStatus};
use serde::{Deserialize, Serialize};

/// Which statuses an inquiry listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    /// Every inquiry.
    #[default]
    All,
    /// Only inquiries in the given status.
    Only(QuoteStatus),
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Parse a filter value; `"all"` or any status name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(StatusFilter::All),
            other => QuoteStatus::from_str(other).map(StatusFilter::Only),
        }
    }

    pub fn matches(&self, status: QuoteStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Search text plus status filter for the inquiry desk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryQuery {
    /// Case-insensitive text matched against name, email and company.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
}

impl InquiryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: QuoteStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    pub fn matches(&self, request: &QuoteRequest) -> bool {
        if !self.status.matches(request.status) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            Some(request.customer_name.as_str()),
            Some(request.email.as_str()),
            request.company_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    /// Keep the matching requests, preserving order.
    pub fn apply<'a>(&self, requests: &'a [QuoteRequest]) -> Vec<&'a QuoteRequest> {
        requests.iter().filter(|r| self.matches(r)).collect()
    }
}
