//! Client-side input validation.
//!
//! Applied before anything reaches the backend; a failing field blocks
//! submission entirely and is recovered without a network round-trip.

use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failures, surfaced inline and never sent to the backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount outside the accepted range.
    #[error("Amount must be between {min} and {max}, got {amount}")]
    AmountOutOfRange {
        /// The rejected amount.
        amount: Decimal,
        /// Lowest accepted amount.
        min: Decimal,
        /// Highest accepted amount.
        max: Decimal,
    },

    /// Required text field empty after trimming.
    #[error("{field} is required")]
    Required {
        /// Field label.
        field: &'static str,
    },

    /// Name too short after trimming.
    #[error("{field} must be at least 2 characters")]
    TooShort {
        /// Field label.
        field: &'static str,
    },

    /// Name contains something other than letters and spaces.
    #[error("{field} must contain letters only")]
    InvalidName {
        /// Field label.
        field: &'static str,
    },
}

fn min_amount() -> Decimal {
    Decimal::ONE
}

fn max_amount() -> Decimal {
    Decimal::from(1_000_000_u32)
}

/// Validates a payment amount: inclusive `1..=1,000,000`.
pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount < min_amount() || amount > max_amount() {
        return Err(ValidationError::AmountOutOfRange {
            amount,
            min: min_amount(),
            max: max_amount(),
        });
    }
    Ok(())
}

/// Validates a display name: required, at least 2 characters, letters and
/// spaces only. Arabic and Latin scripts both pass `char::is_alphabetic`.
pub fn validate_name(name: &str, field: &'static str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if trimmed.chars().count() < 2 {
        return Err(ValidationError::TooShort { field });
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace())
    {
        return Err(ValidationError::InvalidName { field });
    }
    Ok(())
}
