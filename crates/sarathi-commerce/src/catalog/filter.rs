//! Product listing filters.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Number of related products shown on a product page.
pub const RELATED_PRODUCT_LIMIT: usize = 3;

/// Search box and category selector of the product listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductFilter {
    /// Free-text search over name, short description and category.
    pub search: Option<String>,
    /// Exact category; `None` or `"all"` disables the filter.
    pub category: Option<String>,
}

impl ProductFilter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            category: None,
        }
    }

    /// Restrict to a category.
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether a product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => product.matches_lowercase(&query.to_lowercase()),
            _ => true,
        };
        let category_ok = match self.category.as_deref() {
            Some(category) if category != ALL_CATEGORIES => product.in_category(category),
            _ => true,
        };
        search_ok && category_ok
    }

    /// Products passing the filter, in listing order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Distinct non-empty categories, in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in products.iter().filter_map(|p| p.category.as_deref()) {
        if !category.trim().is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}

/// Other products from the same category, at most `limit` of them.
pub fn related_products<'a>(
    product: &Product,
    products: &'a [Product],
    limit: usize,
) -> Vec<&'a Product> {
    let Some(category) = product.category.as_deref() else {
        return Vec::new();
    };
    products
        .iter()
        .filter(|p| p.id != product.id && p.in_category(category))
        .take(limit)
        .collect()
}
