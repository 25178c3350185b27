//! Quote submission flow.

use std::sync::Arc;

use sarathi_data::{Collection, CrudService};

use crate::basket::BasketStore;
use crate::error::CommerceError;
use crate::notify::{Notice, Notifier};
use crate::quote::{QuoteForm, QuoteRequest, ValidationRules};

/// Raises a flag for as long as it lives.
///
/// Dropping a submission future mid-flight still lowers the flag.
struct Busy<'a>(&'a mut bool);

impl<'a> Busy<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Turns a filled-in quote form and the basket into a stored quote request.
pub struct QuoteComposer {
    crud: Arc<dyn CrudService>,
    notifier: Arc<dyn Notifier>,
    rules: ValidationRules,
    collection: String,
}

impl QuoteComposer {
    /// Create a composer writing to the `quoterequests` collection.
    pub fn new(crud: Arc<dyn CrudService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            crud,
            notifier,
            rules: ValidationRules::default(),
            collection: Collection::QuoteRequests.as_str().to_string(),
        }
    }

    /// Replace the validation table.
    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Write to a different collection.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate the form in place, storing any field errors on it.
    ///
    /// Returns whether the form is valid.
    pub fn validate(&self, form: &mut QuoteForm) -> bool {
        match self.rules.validate(&form.contact) {
            Ok(()) => {
                form.errors.clear();
                true
            }
            Err(errors) => {
                form.errors = errors;
                false
            }
        }
    }

    /// Build the request the form would submit, without sending it.
    pub fn compose(&self, form: &QuoteForm, basket: &BasketStore) -> Result<QuoteRequest, CommerceError> {
        self.rules
            .validate(&form.contact)
            .map_err(CommerceError::Validation)?;
        Ok(QuoteRequest::new(&form.contact, &basket.product_ids()))
    }

    /// Validate, build and store a quote request.
    ///
    /// On success the basket is cleared, the form is reset and the stored
    /// request is returned. A validation failure leaves everything untouched
    /// apart from the form's error map and never reaches the content
    /// service. A storage failure leaves both basket and form as they were
    /// so the visitor can retry.
    pub async fn submit(
        &self,
        form: &mut QuoteForm,
        basket: &mut BasketStore,
    ) -> Result<QuoteRequest, CommerceError> {
        if !self.validate(form) {
            tracing::debug!(fields = form.errors.len(), "quote form rejected");
            self.notifier
                .notify(Notice::quote_invalid(form.errors.to_string()));
            return Err(CommerceError::Validation(form.errors.clone()));
        }

        let request = QuoteRequest::new(&form.contact, &basket.product_ids());
        let record = serde_json::to_value(&request)?;

        let created = {
            let _busy = Busy::raise(&mut form.submitting);
            self.crud.create(&self.collection, record).await
        };

        match created {
            Ok(_) => {
                tracing::info!(
                    quote_id = %request.id,
                    products = basket.item_count(),
                    "quote request submitted"
                );
                basket.clear_items();
                form.reset();
                self.notifier.notify(Notice::quote_submitted());
                Ok(request)
            }
            Err(e) => {
                tracing::warn!(quote_id = %request.id, error = %e, "quote request submission failed");
                self.notifier.notify(Notice::quote_failed());
                Err(CommerceError::Persistence(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{ContactForm, Field, FieldErrorKind};
    use sarathi_data::MemoryCrudService;

    fn composer() -> QuoteComposer {
        QuoteComposer::new(
            Arc::new(MemoryCrudService::new()),
            Arc::new(crate::notify::TracingNotifier),
        )
    }

    fn filled_form() -> QuoteForm {
        QuoteForm::with_contact(ContactForm {
            customer_name: "Asha Verma".into(),
            email: "asha@example.in".into(),
            phone_number: "9876543210".into(),
            company_name: "Aqua Pvt Ltd".into(),
            request_details: "Quote for 2 softeners".into(),
        })
    }

    #[test]
    fn test_busy_flag() {
        let mut flag = false;
        {
            let _busy = Busy::raise(&mut flag);
        }
        assert!(!flag);
    }

    #[test]
    fn test_validate_stores_errors() {
        let composer = composer();
        let mut form = filled_form();
        form.contact.phone_number = "12345".into();

        assert!(!composer.validate(&mut form));
        assert_eq!(form.errors.get(Field::PhoneNumber), Some(FieldErrorKind::InvalidFormat));

        form.set(Field::PhoneNumber, "+91 91234 56789");
        assert!(composer.validate(&mut form));
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_compose_uses_basket_order() {
        let composer = composer();
        let mut basket = BasketStore::new();
        basket.add_item(crate::catalog::Product::new("P2", "Softener"));
        basket.add_item(crate::catalog::Product::new("P1", "RO Plant"));

        let request = composer.compose(&filled_form(), &basket).unwrap();
        assert_eq!(request.product_ids, "P2,P1");
        assert_eq!(request.company_name.as_deref(), Some("Aqua Pvt Ltd"));
        assert_eq!(basket.item_count(), 2);
    }

    #[test]
    fn test_compose_rejects_invalid_form() {
        let err = composer()
            .compose(&QuoteForm::new(), &BasketStore::new())
            .unwrap_err();
        assert_eq!(err.field_errors().map(|e| e.len()), Some(4));
    }
}
