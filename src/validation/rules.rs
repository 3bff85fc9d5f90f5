//! Per-field validation rules

use super::{FieldError, PhoneLength};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Failed to compile email regex"));

static PAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z0-9]{10}").expect("Failed to compile PAN regex"));

static PAN_ANCHORED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{10}$").expect("Failed to compile PAN regex"));

static AADHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("Failed to compile Aadhar regex"));

/// Characters accepted as the password's special character
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

const MIN_NAME_LENGTH: usize = 3;

fn has_ascii_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

fn is_too_short(value: &str) -> bool {
    value.chars().count() < MIN_NAME_LENGTH
}

pub fn first_name(value: &str) -> Result<(), FieldError> {
    if is_too_short(value) || has_ascii_digit(value) {
        return Err(FieldError::FirstName);
    }
    Ok(())
}

pub fn last_name(value: &str) -> Result<(), FieldError> {
    if is_too_short(value) || has_ascii_digit(value) {
        return Err(FieldError::LastName);
    }
    Ok(())
}

pub fn username(value: &str) -> Result<(), FieldError> {
    if is_too_short(value) {
        return Err(FieldError::Username);
    }
    Ok(())
}

/// Loose `something@something.something` check, matched anywhere in the value
pub fn email(value: &str) -> Result<(), FieldError> {
    if !EMAIL_REGEX.is_match(value) {
        return Err(FieldError::Email);
    }
    Ok(())
}

/// Some line of the value must hold a lowercase letter, an uppercase letter,
/// a digit and one of [`PASSWORD_SYMBOLS`].
///
/// Equivalent to the lookahead pattern
/// `(?=.*[a-z])(?=.*[A-Z])(?=.*\d)(?=.*[@$!%*?&])[A-Za-z\d@$!%*?&]`:
/// characters outside the allowed set cannot satisfy any lookahead, so the
/// earliest allowed character on a line sees every class that line contains.
pub fn password(value: &str) -> Result<(), FieldError> {
    let satisfied = value
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .any(|line| {
            line.chars().any(|c| c.is_ascii_lowercase())
                && line.chars().any(|c| c.is_ascii_uppercase())
                && line.chars().any(|c| c.is_ascii_digit())
                && line.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
        });

    if !satisfied {
        return Err(FieldError::Password);
    }
    Ok(())
}

pub fn phone(value: &str, length: PhoneLength) -> Result<(), FieldError> {
    let digits_only = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
    if !digits_only || !length.accepts(value.len()) {
        return Err(length.error());
    }
    Ok(())
}

pub fn required(value: &str, error: FieldError) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(error);
    }
    Ok(())
}

/// Unanchored unless `anchored`: any run of ten uppercase letters or digits passes
pub fn pan(value: &str, anchored: bool) -> Result<(), FieldError> {
    let regex = if anchored {
        &PAN_ANCHORED_REGEX
    } else {
        &PAN_REGEX
    };
    if !regex.is_match(value) {
        return Err(FieldError::Pan);
    }
    Ok(())
}

pub fn aadhar(value: &str) -> Result<(), FieldError> {
    if !AADHAR_REGEX.is_match(value) {
        return Err(FieldError::Aadhar);
    }
    Ok(())
}
