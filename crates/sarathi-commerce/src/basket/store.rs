//! Inquiry basket store.

use crate::basket::{BasketEvent, BasketEvents};
use crate::catalog::Product;
use crate::ids::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// A product flagged for inquiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasketItem {
    /// Snapshot of the product when it was added.
    #[serde(flatten)]
    pub product: Product,
    /// When the product was added.
    pub added_at: DateTime<Utc>,
}

impl BasketItem {
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }
}

/// The products a visitor intends to ask about.
///
/// Holds at most one item per product id, in insertion order. The store is
/// constructed by the application root and handed to whatever needs it;
/// views that want to redraw on change call [`BasketStore::subscribe`].
/// Contents live for the browsing session only.
#[derive(Debug, Default)]
pub struct BasketStore {
    items: Vec<BasketItem>,
    events: BasketEvents,
}

impl BasketStore {
    /// Create an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty basket publishing on an existing bus.
    pub fn with_events(events: BasketEvents) -> Self {
        Self {
            items: Vec::new(),
            events,
        }
    }

    /// Receive a [`BasketEvent`] after every change.
    pub fn subscribe(&self) -> broadcast::Receiver<BasketEvent> {
        self.events.subscribe()
    }

    /// Add a product.
    ///
    /// Adding a product that is already present, or one with a blank id,
    /// changes nothing. Returns whether the product was inserted.
    pub fn add_item(&mut self, product: Product) -> bool {
        if product.id.is_empty() {
            tracing::debug!("ignoring product with blank id");
            return false;
        }
        if self.contains(&product.id) {
            return false;
        }

        let product_id = product.id.clone();
        self.items.push(BasketItem {
            product,
            added_at: Utc::now(),
        });
        tracing::debug!(product_id = %product_id, count = self.items.len(), "added to basket");
        self.events.publish(BasketEvent::ItemAdded {
            product_id,
            count: self.items.len(),
        });
        true
    }

    /// Remove a product. Returns whether anything was removed.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(product_id = %product_id, count = self.items.len(), "removed from basket");
            self.events.publish(BasketEvent::ItemRemoved {
                product_id: product_id.clone(),
                count: self.items.len(),
            });
        }
        removed
    }

    /// Empty the basket.
    pub fn clear_items(&mut self) {
        let was_empty = self.items.is_empty();
        self.items.clear();
        if !was_empty {
            tracing::debug!("basket cleared");
            self.events.publish(BasketEvent::Cleared);
        }
    }

    /// Number of products in the basket.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    /// Whether a product is in the basket.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.product.id == product_id)
    }

    /// Product ids in insertion order.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|i| i.product.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Product {}", id))
    }

    #[test]
    fn test_basket_creation() {
        let basket = BasketStore::new();
        assert!(basket.is_empty());
        assert_eq!(basket.item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut basket = BasketStore::new();
        assert!(basket.add_item(product("P1")));
        assert_eq!(basket.item_count(), 1);
        assert!(basket.contains(&ProductId::new("P1")));
        assert_eq!(basket.items()[0].product.name.as_deref(), Some("Product P1"));
    }

    #[test]
    fn test_add_same_item_is_idempotent() {
        let mut basket = BasketStore::new();
        assert!(basket.add_item(product("P1")));
        let first_added = basket.items()[0].added_at;
        assert!(!basket.add_item(product("P1")));

        assert_eq!(basket.item_count(), 1);
        assert_eq!(basket.items()[0].added_at, first_added);
    }

    #[test]
    fn test_blank_id_is_ignored() {
        let mut basket = BasketStore::new();
        assert!(!basket.add_item(product("")));
        assert!(basket.is_empty());
    }

    #[test]
    fn test_insertion_order() {
        let mut basket = BasketStore::new();
        for id in ["P3", "P1", "P2", "P1"] {
            basket.add_item(product(id));
        }
        let ids: Vec<&str> = basket.items().iter().map(|i| i.product_id().as_str()).collect();
        assert_eq!(ids, vec!["P3", "P1", "P2"]);
    }

    #[test]
    fn test_remove_item() {
        let mut basket = BasketStore::new();
        basket.add_item(product("P1"));
        basket.add_item(product("P2"));

        assert!(basket.remove_item(&ProductId::new("P1")));
        assert_eq!(basket.product_ids(), vec![ProductId::new("P2")]);
    }

    #[test]
    fn test_remove_missing_item_leaves_basket_unchanged() {
        let mut basket = BasketStore::new();
        basket.add_item(product("P1"));
        let before = basket.items().to_vec();

        assert!(!basket.remove_item(&ProductId::new("P9")));
        assert_eq!(basket.items(), before.as_slice());
    }

    #[test]
    fn test_clear_items() {
        let mut basket = BasketStore::new();
        basket.clear_items();
        assert!(basket.is_empty());

        for id in ["P1", "P2", "P3"] {
            basket.add_item(product(id));
        }
        basket.clear_items();
        assert!(basket.is_empty());
        assert_eq!(basket.item_count(), 0);
    }

    #[test]
    fn test_events_follow_effective_changes() {
        let mut basket = BasketStore::new();
        let mut rx = basket.subscribe();

        basket.add_item(product("P1"));
        basket.add_item(product("P1"));
        basket.add_item(product("P2"));
        basket.remove_item(&ProductId::new("P9"));
        basket.remove_item(&ProductId::new("P1"));
        basket.clear_items();
        basket.clear_items();

        let mut received = Vec::new();
        while let Ok(event) = rx.try_recv() {
            received.push(event);
        }
        assert_eq!(
            received,
            vec![
                BasketEvent::ItemAdded { product_id: ProductId::new("P1"), count: 1 },
                BasketEvent::ItemAdded { product_id: ProductId::new("P2"), count: 2 },
                BasketEvent::ItemRemoved { product_id: ProductId::new("P1"), count: 1 },
                BasketEvent::Cleared,
            ]
        );
    }

    #[test]
    fn test_item_serializes_flat() {
        let mut basket = BasketStore::new();
        basket.add_item(product("P1").with_model_number("M-1"));
        let value = serde_json::to_value(&basket.items()[0]).unwrap();
        assert_eq!(value["_id"], "P1");
        assert_eq!(value["modelNumber"], "M-1");
        assert!(value.get("addedAt").is_some());
    }
}
