//! Validation of raw user input before it reaches the ledger core.

use crate::errors::{LedgerError, Result};

/// Parses a user-entered amount, accepting only finite, non-negative numbers.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::validation("amount is required"));
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| LedgerError::validation(format!("`{trimmed}` is not a number")))?;
    if !amount.is_finite() {
        return Err(LedgerError::validation(format!(
            "`{trimmed}` is not a finite amount"
        )));
    }
    if amount < 0.0 {
        return Err(LedgerError::validation("amount must not be negative"));
    }
    // Normalizes "-0" to 0.0.
    Ok(amount.abs())
}

pub fn parse_category(input: &str) -> String {
    input.trim().to_string()
}
