//! CCC (Código Cuenta Cliente), the 20-digit account code that predates IBAN.
//!
//! Layout: entity (4) · office (4) · control (2) · account (10).

use crate::core::DocumentError;
use crate::core::checksum::weighted_mod11;
use crate::core::normalize::{digits_only, require_len};

/// Weights for the first control digit, over entity and office.
pub const BRANCH_WEIGHTS: [u32; 8] = [4, 8, 5, 10, 9, 7, 3, 6];

/// Weights for the second control digit, over the account number.
pub const ACCOUNT_WEIGHTS: [u32; 10] = [1, 2, 4, 8, 5, 10, 9, 7, 3, 6];

/// A CCC is always 20 digits.
pub const LENGTH: usize = 20;

/// Single control digit for a run of digits and its weights.
///
/// A result of 10 is written as 1. `digits` must already be ASCII digits;
/// [`check_ccc`] guarantees that before calling.
pub fn control_digit(digits: &str, weights: &[u32]) -> u32 {
    match (11 - weighted_mod11(digits, weights)) % 11 {
        10 => 1,
        d => d,
    }
}

/// The two control digits for an 8-digit entity+office and a 10-digit account.
pub fn control_pair(branch: &str, account: &str) -> String {
    format!(
        "{}{}",
        control_digit(branch, &BRANCH_WEIGHTS),
        control_digit(account, &ACCOUNT_WEIGHTS)
    )
}

/// Validate a CCC, reporting why it failed.
///
/// Every non-digit character is dropped first, so the usual
/// `"2085 0668 31 3101824285"` grouping is accepted.
pub fn check_ccc(value: &str) -> Result<(), DocumentError> {
    let ccc = digits_only(value);
    require_len(&ccc, LENGTH)?;

    let expected = control_pair(&ccc[..8], &ccc[10..]);
    let found = &ccc[8..10];
    if expected != found {
        return Err(DocumentError::checksum(expected, found));
    }
    Ok(())
}

/// True if `value` is present and a valid CCC.
pub fn is_valid_ccc<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|v| check_ccc(v).is_ok())
}
