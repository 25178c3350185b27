//! Inquiry-side domain logic for the Sarathi Industry site.
//!
//! This crate provides the types behind the product pages and the quote flow:
//!
//! - **Catalog**: Products, business divisions, industries, listing filters
//! - **Basket**: The visitor's set of products to ask about, with change events
//! - **Quote**: Contact form, validation table, quote requests and submission
//! - **Desk**: Staff-side listing and status handling of submitted inquiries
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sarathi_commerce::prelude::*;
//! use sarathi_data::MemoryCrudService;
//!
//! let mut basket = BasketStore::new();
//! basket.add_item(Product::new("P1", "RO Plant 500 LPH"));
//!
//! let mut form = QuoteForm::new();
//! form.set(Field::CustomerName, "Asha Verma");
//! form.set(Field::Email, "asha@example.in");
//! form.set(Field::PhoneNumber, "9876543210");
//! form.set(Field::RequestDetails, "Please quote for two units");
//!
//! let composer = QuoteComposer::new(Arc::new(MemoryCrudService::new()), Arc::new(TracingNotifier));
//! let request = composer.submit(&mut form, &mut basket).await?;
//! assert_eq!(request.product_ids, "P1");
//! assert!(basket.is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod notify;

pub mod basket;
pub mod catalog;
pub mod desk;
pub mod quote;

pub use error::CommerceError;
pub use ids::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::notify::{Notice, NoticeKind, Notifier, TracingNotifier};

    // Catalog
    pub use crate::catalog::{BusinessDivision, IndustryServed, Product, ProductFilter};

    // Basket
    pub use crate::basket::{BasketEvent, BasketItem, BasketStore};

    // Quote
    pub use crate::quote::{
        ContactForm, Field, FieldErrorKind, FieldErrors, QuoteComposer, QuoteForm, QuoteRequest,
        QuoteStatus, ValidationRules,
    };

    // Desk
    pub use crate::desk::{InquiryDesk, InquiryQuery, StatusFilter, StatusSummary};
}
