//! Quote form state.

use crate::quote::{Field, FieldErrors};
use serde::{Deserialize, Serialize};

/// Raw contact inputs as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub request_details: String,
}

impl ContactForm {
    /// Overwrite one input.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::CustomerName => self.customer_name = value,
            Field::Email => self.email = value,
            Field::PhoneNumber => self.phone_number = value,
            Field::CompanyName => self.company_name = value,
            Field::RequestDetails => self.request_details = value,
        }
    }
}

/// Transient state of the quote form: inputs plus the last validation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteForm {
    pub contact: ContactForm,
    pub errors: FieldErrors,
    /// A submission is awaiting the content service.
    pub submitting: bool,
}

impl QuoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-filled inputs.
    pub fn with_contact(contact: ContactForm) -> Self {
        Self {
            contact,
            ..Self::default()
        }
    }

    /// Handle an input change. Editing a field clears its error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.contact.set(field, value);
        self.errors.remove(field);
    }

    /// Clear inputs and errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::FieldErrorKind;

    #[test]
    fn test_set_fields() {
        let mut contact = ContactForm::default();
        contact.set(Field::CustomerName, "Asha");
        contact.set(Field::CompanyName, "Aqua Pvt Ltd");
        assert_eq!(contact.customer_name, "Asha");
        assert_eq!(contact.company_name, "Aqua Pvt Ltd");
        assert_eq!(Field::CompanyName.value(&contact), "Aqua Pvt Ltd");
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = QuoteForm::new();
        form.errors.insert(Field::Email, FieldErrorKind::InvalidFormat);
        form.errors.insert(Field::PhoneNumber, FieldErrorKind::MissingField);

        form.set(Field::Email, "asha@example.in");
        assert_eq!(form.errors.get(Field::Email), None);
        assert_eq!(form.errors.get(Field::PhoneNumber), Some(FieldErrorKind::MissingField));
    }

    #[test]
    fn test_reset() {
        let mut form = QuoteForm::with_contact(ContactForm {
            customer_name: "Asha".into(),
            ..ContactForm::default()
        });
        form.errors.insert(Field::Email, FieldErrorKind::MissingField);
        form.submitting = true;

        form.reset();
        assert_eq!(form, QuoteForm::default());
    }

    #[test]
    fn test_contact_from_form_payload() {
        let contact: ContactForm = serde_json::from_value(serde_json::json!({
            "customerName": "Ravi",
            "phoneNumber": "9876543210"
        }))
        .unwrap();
        assert_eq!(contact.customer_name, "Ravi");
        assert!(contact.email.is_empty());
    }
}
