//! Form Validation
//!
//! One shared field-error map for every form (login, register, reset,
//! contact add/edit, profile). Drafts derive `validator::Validate`; the
//! helpers here flatten the result into something the screens can render
//! per field and toast in aggregate.

use std::borrow::Cow;

use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Field → message map preserving field order, so the aggregate toast is
/// deterministic and matches the form's visual order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        self.clear(field);
        self.entries.push((field.to_string(), message.into()));
    }

    /// Drop the error recorded for one field (called as the user types)
    pub fn clear(&mut self, field: &str) {
        self.entries.retain(|(name, _)| name != field);
    }

    /// First error in field order, used for the aggregate notification
    pub fn first_message(&self) -> Option<&str> {
        self.entries.first().map(|(_, message)| message.as_str())
    }
}

/// Canonical field orders, shared by the forms and their tests
pub const CONTACT_FIELDS: &[&str] = &[
    "contact_name",
    "contact_phone",
    "contact_gender",
    "contact_email",
];
pub const LOGIN_FIELDS: &[&str] = &["email", "password"];
pub const REGISTER_FIELDS: &[&str] = &["name", "gender", "phone", "email", "password"];
pub const RESET_FIELDS: &[&str] = &["email", "password"];
pub const PROFILE_FIELDS: &[&str] = &["name", "gender", "phone", "email"];

/// Validate a draft and flatten the outcome in the given field order.
pub fn check<T: Validate>(draft: &T, field_order: &[&str]) -> FieldErrors {
    match draft.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errors) => flatten(&errors, field_order),
    }
}

fn flatten(errors: &ValidationErrors, field_order: &[&str]) -> FieldErrors {
    let by_field = errors.field_errors();
    let mut out = FieldErrors::default();
    for field in field_order.iter().copied() {
        if let Some(list) = by_field.get(field) {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Invalid {}", field));
                out.set(field, message);
            }
        }
    }
    out
}

// ========================
// Shared Rules
// ========================

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Optional email field: empty is fine, anything else must be shaped
/// like an address.
pub fn email_if_present(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(rule("email", "Please enter a valid email address"))
    }
}

/// 10–15 digits, nothing else
pub fn phone_digits(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule("phone", "Phone number is required"));
    }
    if (10..=15).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(rule("phone", "Please enter a valid phone number"))
    }
}

/// Presence then minimum length
pub fn password_rules(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(rule("password", "Password is required"))
    } else if value.len() < 6 {
        Err(rule("password", "Password must be at least 6 characters"))
    } else {
        Ok(())
    }
}

/// Name must survive trimming
pub fn name_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(rule("name", "Full name is required"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactDraft, Gender, LoginForm, RegisterForm, ResetPasswordForm};

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            contact_name: "Ana Diaz".to_string(),
            contact_phone: "5551234567".to_string(),
            contact_gender: Some(Gender::Female),
            user_id: 1,
            ..ContactDraft::default()
        }
    }

    #[test]
    fn valid_contact_draft_passes() {
        assert!(check(&valid_draft(), CONTACT_FIELDS).is_empty());
    }

    #[test]
    fn absent_email_is_allowed() {
        let mut draft = valid_draft();
        draft.contact_email.clear();
        assert!(check(&draft, CONTACT_FIELDS).is_empty());
    }

    #[test]
    fn malformed_email_blocks_submission() {
        let mut draft = valid_draft();
        draft.contact_email = "not-an-email".to_string();
        let errors = check(&draft, CONTACT_FIELDS);
        assert_eq!(
            errors.get("contact_email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn missing_name_phone_gender_each_fail() {
        let mut draft = valid_draft();
        draft.contact_name.clear();
        let errors = check(&draft, CONTACT_FIELDS);
        assert_eq!(errors.get("contact_name"), Some("Name and phone are required"));

        let mut draft = valid_draft();
        draft.contact_phone.clear();
        let errors = check(&draft, CONTACT_FIELDS);
        assert_eq!(errors.get("contact_phone"), Some("Name and phone are required"));

        let mut draft = valid_draft();
        draft.contact_gender = None;
        let errors = check(&draft, CONTACT_FIELDS);
        assert_eq!(errors.get("contact_gender"), Some("Gender is required"));
    }

    #[test]
    fn first_message_follows_field_order() {
        let draft = ContactDraft::empty(1);
        let errors = check(&draft, CONTACT_FIELDS);
        assert_eq!(errors.first_message(), Some("Name and phone are required"));
    }

    #[test]
    fn clearing_a_field_removes_only_that_error() {
        let draft = ContactDraft::empty(1);
        let mut errors = check(&draft, CONTACT_FIELDS);
        errors.clear("contact_name");
        assert_eq!(errors.get("contact_name"), None);
        assert!(errors.get("contact_phone").is_some());
    }

    #[test]
    fn login_rules() {
        let errors = check(&LoginForm::default(), &["email", "password"]);
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "12345".to_string(),
        };
        let errors = check(&form, &["email", "password"]);
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );

        let form = LoginForm {
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
        };
        assert!(check(&form, &["email", "password"]).is_empty());
    }

    #[test]
    fn register_rules() {
        let fields = &["name", "gender", "phone", "email", "password"];
        let errors = check(&RegisterForm::default(), fields);
        assert_eq!(errors.get("name"), Some("Full name is required"));
        assert_eq!(errors.get("gender"), Some("Please select a gender"));
        assert_eq!(errors.get("phone"), Some("Phone number is required"));

        let form = RegisterForm {
            name: "Ana Diaz".to_string(),
            gender: Some(Gender::Female),
            phone: "123".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
        };
        let errors = check(&form, fields);
        assert_eq!(errors.get("phone"), Some("Please enter a valid phone number"));

        let form = RegisterForm {
            phone: "5551234567".to_string(),
            ..form
        };
        assert!(check(&form, fields).is_empty());
    }

    #[test]
    fn reset_password_rules() {
        let form = ResetPasswordForm {
            email: "ana@example.com".to_string(),
            password: "short".to_string(),
        };
        let errors = check(&form, &["email", "password"]);
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn phone_rule_rejects_non_digits_and_bad_lengths() {
        assert!(phone_digits("5551234567").is_ok());
        assert!(phone_digits("555123456789012").is_ok());
        assert!(phone_digits("555-123-4567").is_err());
        assert!(phone_digits("555123456").is_err());
        assert!(phone_digits("5551234567890123").is_err());
    }
}
