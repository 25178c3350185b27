//! Product records as stored in the content service.

use crate::ids::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Owned by the content service; the site only reads it. Field names follow
/// the `products` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// When the record was created.
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// When the record was last updated.
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    /// Display name.
    #[serde(rename = "productName", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short description for listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Full description for the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Image reference.
    #[serde(rename = "productImage", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Free-form category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Manufacturer model number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    /// Link to the specification sheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications_url: Option<String>,
    /// Marked as an eco-friendly product.
    #[serde(rename = "isEcoFriendly", default)]
    pub eco_friendly: bool,
    /// Industries or applications the product is aimed at.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub industries: Vec<String>,
}

impl Product {
    /// Create a product with only an id and a name.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_date: None,
            updated_date: None,
            name: Some(name.into()),
            short_description: None,
            long_description: None,
            image: None,
            category: None,
            model_number: None,
            specifications_url: None,
            eco_friendly: false,
            industries: Vec::new(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the short description.
    pub fn with_short_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = Some(description.into());
        self
    }

    /// Set the model number.
    pub fn with_model_number(mut self, model_number: impl Into<String>) -> Self {
        self.model_number = Some(model_number.into());
        self
    }

    /// Name to show, falling back to the model number and then the id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.model_number.as_deref())
            .unwrap_or(self.id.as_str())
    }

    /// Whether the product belongs to `category` (exact match).
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// Case-insensitive substring search over name, short description and category.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.short_description, &self.category]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
