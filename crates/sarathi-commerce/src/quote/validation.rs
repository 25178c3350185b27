//! Contact form validation.
//!
//! Rules are a table of `(field, validator)` pairs. Each validator looks at
//! one raw input and reports at most one [`FieldErrorKind`]; every failing
//! field is reported, and any failure blocks submission.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::quote::ContactForm;

/// Minimum length of the request details, in characters, after trimming.
pub const MIN_DETAILS_LEN: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// Indian mobile: optional +91 (optionally followed by '-') then 10 digits starting 6-9.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+91-?)?[6-9][0-9]{9}$").expect("valid phone regex"));

/// Input fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CustomerName,
    Email,
    PhoneNumber,
    CompanyName,
    RequestDetails,
}

impl Field {
    /// Form field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CustomerName => "customerName",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::CompanyName => "companyName",
            Field::RequestDetails => "requestDetails",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "customerName" => Some(Field::CustomerName),
            "email" => Some(Field::Email),
            "phoneNumber" => Some(Field::PhoneNumber),
            "companyName" => Some(Field::CompanyName),
            "requestDetails" => Some(Field::RequestDetails),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::CustomerName => "Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone number",
            Field::CompanyName => "Company name",
            Field::RequestDetails => "Request details",
        }
    }

    /// Raw input for this field.
    pub fn value<'a>(&self, form: &'a ContactForm) -> &'a str {
        match self {
            Field::CustomerName => &form.customer_name,
            Field::Email => &form.email,
            Field::PhoneNumber => &form.phone_number,
            Field::CompanyName => &form.company_name,
            Field::RequestDetails => &form.request_details,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldErrorKind {
    /// Required field left blank.
    MissingField,
    /// Value does not have the expected shape.
    InvalidFormat,
    /// Value is shorter than required.
    TooShort,
}

impl FieldErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldErrorKind::MissingField => "missing-field",
            FieldErrorKind::InvalidFormat => "invalid-format",
            FieldErrorKind::TooShort => "too-short",
        }
    }

    /// User-facing message for a field.
    pub fn message(&self, field: Field) -> String {
        match (self, field) {
            (FieldErrorKind::MissingField, field) => format!("{} is required", field.label()),
            (FieldErrorKind::InvalidFormat, Field::Email) => {
                "Please enter a valid email address".to_string()
            }
            (FieldErrorKind::InvalidFormat, Field::PhoneNumber) => {
                "Please enter a valid 10-digit Indian mobile number".to_string()
            }
            (FieldErrorKind::InvalidFormat, field) => format!("{} is not valid", field.label()),
            (FieldErrorKind::TooShort, Field::RequestDetails) => format!(
                "Please provide at least {} characters of detail",
                MIN_DETAILS_LEN
            ),
            (FieldErrorKind::TooShort, field) => format!("{} is too short", field.label()),
        }
    }
}

/// Per-field validation failures, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, FieldErrorKind>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, kind: FieldErrorKind) {
        self.0.insert(field, kind);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldErrorKind> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<FieldErrorKind> {
        self.0.get(&field).copied()
    }

    /// User-facing message for a field, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|kind| kind.message(field))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldErrorKind)> + '_ {
        self.0.iter().map(|(f, k)| (*f, *k))
    }

    /// Field name → message map, as a form would render it.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, kind)| (field.as_str(), kind.message(field)))
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.iter().map(|(field, kind)| kind.message(field)).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Checks one raw input.
pub type Validator = fn(&str) -> Result<(), FieldErrorKind>;

/// Name must not be blank.
pub fn validate_name(value: &str) -> Result<(), FieldErrorKind> {
    required(value).map(|_| ())
}

/// Email must be present and look like `local@domain.tld`.
pub fn validate_email(value: &str) -> Result<(), FieldErrorKind> {
    let value = required(value)?;
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldErrorKind::InvalidFormat)
    }
}

/// Phone must be an Indian mobile number; whitespace anywhere is ignored.
pub fn validate_phone(value: &str) -> Result<(), FieldErrorKind> {
    let value = required(value)?;
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if PHONE_RE.is_match(&compact) {
        Ok(())
    } else {
        Err(FieldErrorKind::InvalidFormat)
    }
}

/// Details must be present and at least [`MIN_DETAILS_LEN`] characters.
pub fn validate_details(value: &str) -> Result<(), FieldErrorKind> {
    let value = required(value)?;
    if value.chars().count() < MIN_DETAILS_LEN {
        Err(FieldErrorKind::TooShort)
    } else {
        Ok(())
    }
}

fn required(value: &str) -> Result<&str, FieldErrorKind> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldErrorKind::MissingField)
    } else {
        Ok(trimmed)
    }
}

/// Ordered table of field validators.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    rules: Vec<(Field, Validator)>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            rules: vec![
                (Field::CustomerName, validate_name as Validator),
                (Field::Email, validate_email),
                (Field::PhoneNumber, validate_phone),
                (Field::RequestDetails, validate_details),
            ],
        }
    }
}

impl ValidationRules {
    /// A table with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a validator for a field. Several validators may share a field;
    /// the first failure is reported.
    pub fn with_rule(mut self, field: Field, validator: Validator) -> Self {
        self.rules.push((field, validator));
        self
    }

    /// Fields that carry at least one rule.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = self.rules.iter().map(|(f, _)| *f).collect();
        fields.sort();
        fields.dedup();
        fields
    }

    /// Validate one field.
    pub fn validate_field(&self, form: &ContactForm, field: Field) -> Result<(), FieldErrorKind> {
        let value = field.value(form);
        self.rules
            .iter()
            .filter(|(f, _)| *f == field)
            .try_for_each(|(_, validator)| validator(value))
    }

    /// Validate every field, collecting all failures.
    pub fn validate(&self, form: &ContactForm) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for (field, validator) in &self.rules {
            if errors.get(*field).is_some() {
                continue;
            }
            if let Err(kind) = validator(field.value(form)) {
                errors.insert(*field, kind);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            customer_name: "Asha Verma".into(),
            email: "asha@example.in".into(),
            phone_number: "9876543210".into(),
            company_name: String::new(),
            request_details: "Need a quote for an RO plant".into(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(ValidationRules::default().validate(&valid_form()).is_ok());
    }

    #[test]
    fn test_name_required() {
        assert_eq!(validate_name("   "), Err(FieldErrorKind::MissingField));
        assert_eq!(validate_name(" Ravi "), Ok(()));
    }

    #[test]
    fn test_email() {
        assert_eq!(validate_email(""), Err(FieldErrorKind::MissingField));
        assert_eq!(validate_email("asha@example.in"), Ok(()));
        assert_eq!(validate_email("  sales@sarathi.co.in "), Ok(()));
        for bad in ["asha.example.in", "asha@", "asha@example", "@example.in", "a b@example.in"] {
            assert_eq!(validate_email(bad), Err(FieldErrorKind::InvalidFormat), "{bad}");
        }
    }

    #[test]
    fn test_phone() {
        assert_eq!(validate_phone(" "), Err(FieldErrorKind::MissingField));
        for good in ["9876543210", "+91 98765 43210", "+919876543210", "+91-9876543210", "6000000000"] {
            assert_eq!(validate_phone(good), Ok(()), "{good}");
        }
        for bad in [
            "1234567890",
            "5876543210",
            "987654321",
            "98765432100",
            "+92 9876543210",
            "+91 1234567890",
            "98765-43210",
            "phone",
        ] {
            assert_eq!(validate_phone(bad), Err(FieldErrorKind::InvalidFormat), "{bad}");
        }
    }

    #[test]
    fn test_details_length() {
        assert_eq!(validate_details("   "), Err(FieldErrorKind::MissingField));
        assert_eq!(validate_details("too short"), Err(FieldErrorKind::TooShort));
        assert_eq!(validate_details("   123456789   "), Err(FieldErrorKind::TooShort));
        assert_eq!(validate_details("1234567890"), Ok(()));
        assert_eq!(validate_details("  1234567890  "), Ok(()));
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let form = ContactForm {
            customer_name: String::new(),
            email: "not-an-email".into(),
            phone_number: "1234567890".into(),
            company_name: String::new(),
            request_details: "short".into(),
        };
        let errors = ValidationRules::default().validate(&form).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::CustomerName), Some(FieldErrorKind::MissingField));
        assert_eq!(errors.get(Field::Email), Some(FieldErrorKind::InvalidFormat));
        assert_eq!(errors.get(Field::PhoneNumber), Some(FieldErrorKind::InvalidFormat));
        assert_eq!(errors.get(Field::RequestDetails), Some(FieldErrorKind::TooShort));
        assert_eq!(errors.get(Field::CompanyName), None);
    }

    #[test]
    fn test_company_is_unchecked() {
        let mut form = valid_form();
        form.company_name = "   ".into();
        assert!(ValidationRules::default().validate(&form).is_ok());
        assert!(ValidationRules::default()
            .validate_field(&form, Field::CompanyName)
            .is_ok());
    }

    #[test]
    fn test_custom_rule_reports_first_failure() {
        fn no_free_mail(value: &str) -> Result<(), FieldErrorKind> {
            if value.trim().ends_with("@freemail.test") {
                Err(FieldErrorKind::InvalidFormat)
            } else {
                Ok(())
            }
        }
        let rules = ValidationRules::default().with_rule(Field::Email, no_free_mail);

        let mut form = valid_form();
        form.email = "buyer@freemail.test".into();
        let errors = rules.validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some(FieldErrorKind::InvalidFormat));

        form.email = String::new();
        assert_eq!(
            rules.validate_field(&form, Field::Email),
            Err(FieldErrorKind::MissingField)
        );
    }

    #[test]
    fn test_fields() {
        let rules = ValidationRules::default().with_rule(Field::Email, validate_email);
        assert_eq!(
            rules.fields(),
            vec![Field::CustomerName, Field::Email, Field::PhoneNumber, Field::RequestDetails]
        );
        assert!(ValidationRules::empty().validate(&ContactForm::default()).is_ok());
    }

    #[test]
    fn test_messages() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::RequestDetails, FieldErrorKind::TooShort);
        errors.insert(Field::CustomerName, FieldErrorKind::MissingField);

        let messages = errors.messages();
        assert_eq!(messages["customerName"], "Name is required");
        assert_eq!(
            messages["requestDetails"],
            "Please provide at least 10 characters of detail"
        );
        assert_eq!(
            errors.to_string(),
            "Name is required; Please provide at least 10 characters of detail"
        );
    }

    #[test]
    fn test_field_errors_serialize_by_field_name() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::PhoneNumber, FieldErrorKind::InvalidFormat);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({"phoneNumber": "invalid-format"})
        );
    }
}
