//! Form Validation
//!
//! Client-side checks only; the backend validates again.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

pub const MIN_LOGIN_PASSWORD: usize = 6;
pub const MIN_ACCOUNT_PASSWORD: usize = 8;
pub const MIN_FULL_NAME: usize = 2;

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirm_password";
pub const FULL_NAME: &str = "full_name";

/// Field name to message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Drop the message for a field once the user edits it
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    fn add(&mut self, field: &'static str, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

pub fn validate_login(email: &str, password: &str) -> FormErrors {
    let mut errors = FormErrors::default();

    if email.is_empty() {
        errors.add(EMAIL, "Email address is required");
    } else if !is_valid_email(email) {
        errors.add(EMAIL, "Please enter a valid email address");
    }

    if password.is_empty() {
        errors.add(PASSWORD, "Password is required");
    } else if password.chars().count() < MIN_LOGIN_PASSWORD {
        errors.add(PASSWORD, "Password must be at least 6 characters");
    }

    errors
}

/// Full name is optional but must be meaningful when given
pub fn validate_invite_acceptance(full_name: &str, password: &str, confirm_password: &str) -> FormErrors {
    let mut errors = FormErrors::default();

    let name = full_name.trim();
    if !name.is_empty() && name.chars().count() < MIN_FULL_NAME {
        errors.add(FULL_NAME, "Name must be at least 2 characters");
    }

    if password.is_empty() {
        errors.add(PASSWORD, "Password is required");
    } else if password.chars().count() < MIN_ACCOUNT_PASSWORD {
        errors.add(PASSWORD, "Password must be at least 8 characters");
    }

    if confirm_password.is_empty() {
        errors.add(CONFIRM_PASSWORD, "Please confirm your password");
    } else if confirm_password != password {
        errors.add(CONFIRM_PASSWORD, "Passwords do not match");
    }

    errors
}

pub fn validate_member_email(email: &str) -> Result<String, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email".to_string());
    }
    Ok(email.to_string())
}

/// Trimmed name, or an error naming `what` when blank
pub fn validate_name(name: &str, what: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("{what} cannot be empty"));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("analyst@fund.io"));
        assert!(!is_valid_email("analyst@fund"));
        assert!(!is_valid_email("ana lyst@fund.io"));
        assert!(!is_valid_email("@fund.io"));
    }

    #[test]
    fn test_login_required_fields() {
        let errors = validate_login("", "");
        assert_eq!(errors.get(EMAIL), Some("Email address is required"));
        assert_eq!(errors.get(PASSWORD), Some("Password is required"));
    }

    #[test]
    fn test_login_shape_and_length() {
        let errors = validate_login("not-an-email", "12345");
        assert_eq!(errors.get(EMAIL), Some("Please enter a valid email address"));
        assert_eq!(errors.get(PASSWORD), Some("Password must be at least 6 characters"));

        assert!(validate_login("owner@acme.com", "123456").is_empty());
    }

    #[test]
    fn test_invite_acceptance() {
        let errors = validate_invite_acceptance(" J ", "short", "other");
        assert_eq!(errors.get(FULL_NAME), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get(PASSWORD), Some("Password must be at least 8 characters"));
        assert_eq!(errors.get(CONFIRM_PASSWORD), Some("Passwords do not match"));

        assert!(validate_invite_acceptance("", "longenough", "longenough").is_empty());
        let errors = validate_invite_acceptance("Jane", "longenough", "");
        assert_eq!(errors.get(CONFIRM_PASSWORD), Some("Please confirm your password"));
    }

    #[test]
    fn test_clear_field() {
        let mut errors = validate_login("", "123456");
        errors.clear(EMAIL);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_member_email_and_name() {
        assert_eq!(validate_member_email(""), Err("Email is required".to_string()));
        assert_eq!(validate_member_email("x@y"), Err("Please enter a valid email".to_string()));
        assert_eq!(validate_member_email(" new@acme.com "), Ok("new@acme.com".to_string()));

        assert_eq!(validate_name("   ", "Organization name"), Err("Organization name cannot be empty".to_string()));
        assert_eq!(validate_name(" Acme ", "Organization name"), Ok("Acme".to_string()));
    }
}
