use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use strum::VariantArray;
use validator::{Validate, ValidationErrors};

use crate::Field;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{8,}$").unwrap());

const MISSING: &str = "missing";
const EMAIL: &str = "email";
const PHONE: &str = "phone";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing field '{0}'")]
    MissingField(Field),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid phone number")]
    InvalidPhone,
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.field_errors();
        let has = |field: Field, code: &str| {
            fields
                .get(field.attribute())
                .is_some_and(|errs| errs.iter().any(|e| e.code == code))
        };

        if let Some(field) = Field::VARIANTS.iter().find(|f| has(**f, MISSING)) {
            return ValidationError::MissingField(*field);
        }

        if has(Field::Email, EMAIL) {
            return ValidationError::InvalidEmail;
        }

        // Only the phone pattern is left.
        ValidationError::InvalidPhone
    }
}

/// Raw contact form values, trimmed but not yet checked.
#[derive(Validate, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    #[validate(length(min = 1, code = "missing"))]
    pub name: String,
    #[validate(length(min = 1, code = "missing"))]
    pub company: String,
    #[validate(
        length(min = 1, code = "missing"),
        regex(path = *RE_EMAIL, code = "email")
    )]
    pub email: String,
    #[validate(
        length(min = 1, code = "missing"),
        regex(path = *RE_PHONE, code = "phone")
    )]
    pub phone: String,
    #[validate(length(min = 1, code = "missing"))]
    pub message: String,
}

impl ContactFields {
    /// Reads every field through `read` and trims the values.
    pub fn collect(mut read: impl FnMut(Field) -> String) -> Self {
        let mut value = |field| read(field).trim().to_owned();

        Self {
            name: value(Field::Name),
            company: value(Field::Company),
            email: value(Field::Email),
            phone: value(Field::Phone),
            message: value(Field::Message),
        }
    }
}

/// A contact request whose five fields passed validation.
///
/// Serializes with the key names expected by the receiving webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "empresa")]
    company: String,
    #[serde(rename = "correo")]
    email: String,
    #[serde(rename = "telefono")]
    phone: String,
    #[serde(rename = "mensaje")]
    message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Checks the five fields and bundles them into a [`ContactSubmission`].
///
/// Missing fields are reported first (in form order), then the email
/// pattern, then the phone pattern.
pub fn validate(fields: ContactFields) -> Result<ContactSubmission, ValidationError> {
    fields.validate()?;

    Ok(ContactSubmission {
        name: fields.name,
        company: fields.company,
        email: fields.email,
        phone: fields.phone,
        message: fields.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ana".to_owned(),
            company: "Acme".to_owned(),
            email: "ana@acme.mx".to_owned(),
            phone: "+52 55 1234 5678".to_owned(),
            message: "Hola".to_owned(),
        }
    }

    #[test]
    fn email_pattern() {
        assert!(RE_EMAIL.is_match("a@b.co"));
        assert!(!RE_EMAIL.is_match("not-an-email"));
        assert!(!RE_EMAIL.is_match("a b@c.d"));
        assert!(!RE_EMAIL.is_match("a@b@c.d"));
        assert!(!RE_EMAIL.is_match("a@bcd"));
    }

    #[test]
    fn phone_pattern() {
        assert!(RE_PHONE.is_match("+1 (555) 123-4567"));
        assert!(RE_PHONE.is_match("12345678"));
        assert!(!RE_PHONE.is_match("123"));
        assert!(!RE_PHONE.is_match("1234567"));
        assert!(!RE_PHONE.is_match("++12345678"));
        assert!(!RE_PHONE.is_match("555-CALL-NOW"));
        assert!(!RE_PHONE.is_match("١٢٣٤٥٦٧٨"));
        assert!(!RE_PHONE.is_match("１２３４５６７８"));
        assert!(RE_PHONE.is_match("5551\u{a0}234\u{2009}567"));
    }

    #[test]
    fn reports_missing_before_patterns() {
        let input = ContactFields {
            email: "nope".to_owned(),
            phone: "1".to_owned(),
            message: String::new(),
            ..fields()
        };

        assert_eq!(
            validate(input).unwrap_err(),
            ValidationError::MissingField(Field::Message)
        );
    }

    #[test]
    fn reports_email_before_phone() {
        let input = ContactFields {
            email: "nope".to_owned(),
            phone: "1".to_owned(),
            ..fields()
        };

        assert_eq!(validate(input).unwrap_err(), ValidationError::InvalidEmail);
    }

    #[test]
    fn collect_trims_values() {
        let input = ContactFields::collect(|field| format!("  {field} \n"));

        assert_eq!(input.name, "nombre");
        assert_eq!(input.message, "mensaje");
    }
}
