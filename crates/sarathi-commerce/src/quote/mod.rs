//! Quote request module.
//!
//! Contains the contact form, its validation table, the request record and
//! the submission flow.

mod composer;
mod form;
mod request;
mod validation;

pub use composer::QuoteComposer;
pub use form::{ContactForm, QuoteForm};
pub use request::{
    join_product_ids, split_product_ids, QuoteRequest, QuoteStatus, PRODUCT_ID_SEPARATOR,
};
pub use validation::{
    validate_details, validate_email, validate_name, validate_phone, Field, FieldErrorKind,
    FieldErrors, ValidationRules, Validator, MIN_DETAILS_LEN,
};
