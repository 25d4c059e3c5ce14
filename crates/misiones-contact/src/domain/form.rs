//! The contact form and its validation rules.

use std::sync::LazyLock;

use misiones_core::error::FieldViolation;
use misiones_core::relay::ContactMessage;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Form field a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Name of the field in the submitted form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// One rejected field with the message shown under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl From<FieldError> for FieldViolation {
    fn from(error: FieldError) -> Self {
        Self {
            field: error.field.as_str().to_owned(),
            message: error.message.to_owned(),
        }
    }
}

/// Raw form input as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Checks every field and returns all errors at once.
    #[must_use]
    pub fn errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Name,
                message: "El nombre es requerido",
            });
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError {
                field: Field::Email,
                message: "El email es requerido",
            });
        } else if !EMAIL.is_match(email) {
            errors.push(FieldError {
                field: Field::Email,
                message: "El formato del email no es válido",
            });
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: Field::Message,
                message: "El mensaje es requerido",
            });
        }
        errors
    }

    /// Validates the form into a trimmed message ready for delivery.
    ///
    /// # Errors
    ///
    /// Returns every failing field when the form is invalid.
    pub fn validate(&self) -> Result<ContactMessage, Vec<FieldError>> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactMessage {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let msg = form("  Ana ", " ana@example.org ", " Hola\n").validate().unwrap();

        assert_eq!(msg.name, "Ana");
        assert_eq!(msg.email, "ana@example.org");
        assert_eq!(msg.message, "Hola");
    }

    #[test]
    fn test_blank_form_reports_every_field() {
        let errors = form(" ", "", "\t").validate().unwrap_err();

        assert_eq!(
            errors.iter().map(|e| e.message).collect::<Vec<_>>(),
            vec![
                "El nombre es requerido",
                "El email es requerido",
                "El mensaje es requerido"
            ]
        );
    }

    #[test]
    fn test_email_format() {
        for bad in ["ana", "ana@example", "ana @example.org", "a@b@c.org", "@example.org", "ana@.org"] {
            let errors = form("Ana", bad, "Hola").errors();
            assert_eq!(errors.len(), 1, "{bad} should be rejected");
            assert_eq!(errors[0].field, Field::Email);
            assert_eq!(errors[0].message, "El formato del email no es válido");
        }
        for good in ["ana@example.org", "a.b+c@sub.example.com.ar"] {
            assert!(form("Ana", good, "Hola").errors().is_empty(), "{good} should pass");
        }
    }

    #[test]
    fn test_field_error_converts_to_named_violation() {
        let violation = FieldViolation::from(FieldError {
            field: Field::Email,
            message: "El email es requerido",
        });

        assert_eq!(violation.field, "email");
        assert_eq!(violation.message, "El email es requerido");
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let parsed: ContactForm = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();

        assert_eq!(parsed.errors().len(), 2);
    }
}
