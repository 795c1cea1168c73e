//! Per-country phone number validation.
//!
//! Validation works on the digits-only form of the input, so formatting
//! characters the user typed never affect the outcome.

use thiserror::Error;

use super::countries;

/// Why a phone number was rejected. `Display` is the caption shown under
/// the phone input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Phone number is required")]
    Required,
    #[error("Unsupported country code {0}")]
    UnsupportedCountry(String),
    #[error("Phone number must be at least {min} digits")]
    TooShort { min: usize },
    #[error("{message}")]
    InvalidFormat { code: String, message: String },
}

/// Drops everything that is not an ASCII digit.
pub fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// What the phone input is allowed to hold: digits and whitespace.
pub fn sanitize_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace())
        .collect()
}

pub fn validate(raw_phone: &str, code: &str) -> Result<(), PhoneError> {
    let digits = digits_of(raw_phone);
    if digits.is_empty() {
        return Err(PhoneError::Required);
    }

    let rule = countries::lookup(code)
        .ok_or_else(|| PhoneError::UnsupportedCountry(code.to_string()))?;

    if digits.len() < rule.min_digits {
        return Err(PhoneError::TooShort { min: rule.min_digits });
    }

    if !rule.matches(&digits) {
        let message = match rule.error_msg {
            Some(msg) => msg.to_string(),
            None => format!("Invalid phone number format for {}", code),
        };
        return Err(PhoneError::InvalidFormat {
            code: code.to_string(),
            message,
        });
    }

    Ok(())
}
