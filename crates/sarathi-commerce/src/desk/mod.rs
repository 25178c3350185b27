//! Inquiry desk module.
//!
//! Staff-side listing, filtering and status handling of stored quote requests.

mod query;
mod service;
mod summary;

pub use query::{InquiryQuery, StatusFilter};
pub use service::InquiryDesk;
pub use summary::StatusSummary;
