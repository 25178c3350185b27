//! Quote request records.

use crate::ids::{ProductId, QuoteRequestId};
use crate::quote::ContactForm;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Separator used when storing product ids on a request.
pub const PRODUCT_ID_SEPARATOR: &str = ",";

/// Processing status of a quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStatus {
    /// Submitted, not yet looked at.
    #[default]
    Pending,
    /// Being worked on by the sales team.
    InProgress,
    /// Answered.
    Completed,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "pending",
            QuoteStatus::InProgress => "in-progress",
            QuoteStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(QuoteStatus::Pending),
            "in-progress" => Some(QuoteStatus::InProgress),
            "completed" => Some(QuoteStatus::Completed),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuoteStatus::Pending => "Pending",
            QuoteStatus::InProgress => "In Progress",
            QuoteStatus::Completed => "Completed",
        }
    }

    /// All statuses in workflow order.
    pub fn all() -> [QuoteStatus; 3] {
        [QuoteStatus::Pending, QuoteStatus::InProgress, QuoteStatus::Completed]
    }
}

/// A customer's submitted inquiry.
///
/// Built once per successful submission and never changed by the site
/// afterwards; status changes happen on the inquiry desk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Unique request identifier.
    #[serde(rename = "_id")]
    pub id: QuoteRequestId,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub request_details: String,
    /// Comma-joined ids of the products asked about; empty when none.
    #[serde(default)]
    pub product_ids: String,
    /// When the customer submitted the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: QuoteStatus,
}

impl QuoteRequest {
    /// Build a pending request from a contact form and the basket's product ids.
    ///
    /// Text fields are trimmed; a blank company name is dropped.
    pub fn new(contact: &ContactForm, product_ids: &[ProductId]) -> Self {
        let company = contact.company_name.trim();
        Self {
            id: QuoteRequestId::generate(),
            customer_name: contact.customer_name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone_number: contact.phone_number.trim().to_string(),
            company_name: (!company.is_empty()).then(|| company.to_string()),
            request_details: contact.request_details.trim().to_string(),
            product_ids: join_product_ids(product_ids),
            submission_date: Some(Utc::now()),
            status: QuoteStatus::Pending,
        }
    }

    /// The product ids this request refers to, in stored order.
    pub fn product_id_list(&self) -> Vec<ProductId> {
        split_product_ids(&self.product_ids)
    }
}

/// Join ids for storage.
pub fn join_product_ids(ids: &[ProductId]) -> String {
    ids.iter()
        .map(ProductId::as_str)
        .collect::<Vec<_>>()
        .join(PRODUCT_ID_SEPARATOR)
}

/// Split a stored id list, dropping blanks.
pub fn split_product_ids(joined: &str) -> Vec<ProductId> {
    joined
        .split(PRODUCT_ID_SEPARATOR)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ProductId::from)
        .collect()
}
