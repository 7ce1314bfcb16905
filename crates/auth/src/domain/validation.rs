//! Login Form Validation
//!
//! Pure format checks producing field-level errors for inline display.
//! Passing validation means the form is well-formed, not that the
//! credentials are correct.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::domain::value_object::email::Email;

/// Minimum accepted password length
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Form field a validation error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Email => "email",
            Field::Password => "password",
        })
    }
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check an email field. `None` means the field passed.
pub fn validate_email(value: &str) -> Option<ValidationError> {
    Email::new(value).err()
}

/// Check a password field. `None` means the field passed.
pub fn validate_password(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::new(Field::Password, "Password is required"));
    }
    if value.len() < PASSWORD_MIN_LENGTH {
        return Some(ValidationError::new(
            Field::Password,
            "Password must be at least 6 characters",
        ));
    }
    None
}

/// Validate the whole login form. Email errors come first so the UI
/// renders them in a deterministic order.
pub fn validate_login_form(email: &str, password: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if let Some(err) = validate_email(email) {
        errors.push(err);
    }
    if let Some(err) = validate_password(password) {
        errors.push(err);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reports_both_fields_email_first() {
        let errors = validate_login_form("", "");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, Field::Email);
        assert_eq!(errors[0].message, "Email is required");
        assert_eq!(errors[1].field, Field::Password);
        assert_eq!(errors[1].message, "Password is required");
    }

    #[test]
    fn test_invalid_email_format() {
        for bad in ["userexample.com", "user@", "@example.com", "user@example"] {
            let err = validate_email(bad).expect(bad);
            assert_eq!(err.field, Field::Email);
            assert_eq!(err.message, "Please enter a valid email");
        }
    }

    #[test]
    fn test_valid_email_passes() {
        for good in [
            "user@example.com",
            "user.name@example.co.jp",
            "user+tag@example.com",
        ] {
            assert_eq!(validate_email(good), None, "{good}");
        }
    }

    #[test]
    fn test_short_password_fails() {
        let err = validate_password("12345").unwrap();
        assert_eq!(err.field, Field::Password);
        assert_eq!(err.message, "Password must be at least 6 characters");
    }

    #[test]
    fn test_password_at_minimum_length_passes() {
        assert_eq!(validate_password("123456"), None);
        assert_eq!(validate_password("brie1192"), None);
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate_login_form("admin@example.com", "brie1192").is_empty());
    }
}
