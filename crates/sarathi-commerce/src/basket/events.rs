//! Change notifications for the inquiry basket.

use crate::ids::ProductId;
use tokio::sync::broadcast;

/// Default number of events buffered per subscriber.
pub const DEFAULT_EVENT_CAPACITY: usize = 32;

/// A change to the basket contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasketEvent {
    /// A product was added.
    ItemAdded { product_id: ProductId, count: usize },
    /// A product was removed.
    ItemRemoved { product_id: ProductId, count: usize },
    /// The basket was emptied.
    Cleared,
}

impl BasketEvent {
    /// Basket size after the change.
    pub fn count(&self) -> usize {
        match self {
            BasketEvent::ItemAdded { count, .. } | BasketEvent::ItemRemoved { count, .. } => *count,
            BasketEvent::Cleared => 0,
        }
    }
}

/// Broadcast bus that fans basket changes out to any subscribed view.
#[derive(Debug, Clone)]
pub struct BasketEvents {
    sender: broadcast::Sender<BasketEvent>,
}

impl BasketEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BasketEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: BasketEvent) {
        // No subscribers is fine; lagging ones lose old events.
        let _ = self.sender.send(event);
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BasketEvents {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}
