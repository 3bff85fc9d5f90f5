//! Field validation
//!
//! Pure, stateless checks mapping a field and its raw value to an error
//! message. An empty message means the value is valid.

mod rules;

use crate::state::FieldName;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Accepted phone number lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneLength {
    /// Exactly 10 digits
    Exact10,
    /// Between 10 and 15 digits inclusive
    #[default]
    Range10To15,
}

impl PhoneLength {
    pub fn accepts(&self, len: usize) -> bool {
        match self {
            Self::Exact10 => len == 10,
            Self::Range10To15 => (10..=15).contains(&len),
        }
    }

    fn error(&self) -> FieldError {
        match self {
            Self::Exact10 => FieldError::PhoneExact { digits: 10 },
            Self::Range10To15 => FieldError::PhoneRange { min: 10, max: 15 },
        }
    }
}

/// Variant-dependent switches for the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub phone_length: PhoneLength,
    /// Require the whole PAN value to be the 10-character code
    pub anchor_pan: bool,
}

/// A failed field check. The `Display` text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("First name must be at least 3 characters and not contain numbers")]
    FirstName,
    #[error("Last name must be at least 3 characters and not contain numbers")]
    LastName,
    #[error("Username must be at least 3 characters")]
    Username,
    #[error("Email address is invalid")]
    Email,
    #[error("Password must contain at least one uppercase, at least one lowercase, at least one number, and at least one special character")]
    Password,
    #[error("Phone number must be exactly {digits} digits")]
    PhoneExact { digits: usize },
    #[error("Phone number must be between {min} and {max} digits")]
    PhoneRange { min: usize, max: usize },
    #[error("Country is required")]
    Country,
    #[error("Region is required")]
    Region,
    #[error("City is required")]
    City,
    #[error("PAN must be a combination of uppercase characters and numbers")]
    Pan,
    #[error("Aadhar number must be exactly 12 digits")]
    Aadhar,
}

/// Check one field's value
pub fn check(field: FieldName, value: &str, rules: &ValidationRules) -> Result<(), FieldError> {
    match field {
        FieldName::FirstName => rules::first_name(value),
        FieldName::LastName => rules::last_name(value),
        FieldName::Username => rules::username(value),
        FieldName::Email => rules::email(value),
        FieldName::Password => rules::password(value),
        FieldName::Phone => rules::phone(value, rules.phone_length),
        FieldName::Country => rules::required(value, FieldError::Country),
        FieldName::Region => rules::required(value, FieldError::Region),
        FieldName::City => rules::required(value, FieldError::City),
        FieldName::Pan => rules::pan(value, rules.anchor_pan),
        FieldName::Aadhar => rules::aadhar(value),
    }
}

/// Validate one field, returning the error message or an empty string
pub fn validate(field: FieldName, value: &str, rules: &ValidationRules) -> String {
    match check(field, value, rules) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Validate by camelCase field name. Names without a rule always pass.
#[allow(dead_code)]
pub fn validate_by_name(name: &str, value: &str, rules: &ValidationRules) -> String {
    match FieldName::from_str(name) {
        Ok(field) => validate(field, value, rules),
        Err(_) => String::new(),
    }
}
