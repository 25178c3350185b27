//! Business divisions used to group products and content.

use crate::catalog::Product;
use crate::ids::DivisionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of products shown on a division page.
pub const DIVISION_PRODUCT_LIMIT: usize = 6;

/// A business line of the company (e.g. water solutions).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDivision {
    /// Unique division identifier.
    #[serde(rename = "_id")]
    pub id: DivisionId,
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    /// Division name.
    #[serde(rename = "divisionName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL-friendly slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(rename = "divisionImage", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action_url: Option<String>,
    /// Only active divisions are listed on the site.
    #[serde(default)]
    pub is_active: bool,
}

impl BusinessDivision {
    /// Create an active division.
    pub fn new(id: impl Into<DivisionId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_date: None,
            updated_date: None,
            name: Some(name.into()),
            slug: Some(slug.into()),
            short_description: None,
            long_description: None,
            image: None,
            call_to_action_url: None,
            is_active: true,
        }
    }

    /// Whether a product belongs to this division.
    ///
    /// Products are linked by category text: the category must contain the
    /// division name or its slug, ignoring case.
    pub fn covers(&self, product: &Product) -> bool {
        let Some(category) = product.category.as_deref() else {
            return false;
        };
        let category = category.to_lowercase();
        [&self.name, &self.slug]
            .into_iter()
            .flatten()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .any(|needle| category.contains(&needle))
    }
}

/// Divisions flagged active, in their stored order.
pub fn active_divisions(divisions: &[BusinessDivision]) -> Vec<&BusinessDivision> {
    divisions.iter().filter(|d| d.is_active).collect()
}

/// Find a division by slug.
pub fn find_by_slug<'a>(divisions: &'a [BusinessDivision], slug: &str) -> Option<&'a BusinessDivision> {
    divisions.iter().find(|d| d.slug.as_deref() == Some(slug))
}

/// The first `limit` products belonging to a division.
pub fn division_products<'a>(
    division: &BusinessDivision,
    products: &'a [Product],
    limit: usize,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| division.covers(p))
        .take(limit)
        .collect()
}
