//! Inquiry basket module.
//!
//! Contains the basket store and its change notifications.

mod events;
mod store;

pub use events::{BasketEvent, BasketEvents, DEFAULT_EVENT_CAPACITY};
pub use store::{BasketItem, BasketStore};
