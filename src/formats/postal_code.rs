//! Five-digit postal codes whose first two digits name one of 52 provinces.

use std::ops::RangeInclusive;

use crate::core::DocumentError;
use crate::core::normalize::{is_digits, parse_digits, require_len};

const LENGTH: usize = 5;

/// Province prefixes in use: 01 (Álava) through 52 (Melilla).
pub const PROVINCES: RangeInclusive<u64> = 1..=52;

/// Validate a postal code, reporting why it failed.
///
/// The value is taken as-is: no trimming or separator removal.
pub fn check_postal_code(value: &str) -> Result<(), DocumentError> {
    require_len(value, LENGTH)?;
    if !is_digits(value) {
        return Err(DocumentError::Format("postal code must be 5 digits"));
    }
    if value.as_bytes()[0] > b'5' {
        return Err(DocumentError::Format("postal code must start with 0-5"));
    }
    match parse_digits(&value[..2]) {
        Some(province) if PROVINCES.contains(&province) => Ok(()),
        _ => Err(DocumentError::Format("unknown province prefix")),
    }
}

/// True if `value` is present and a valid postal code.
pub fn is_valid_postal_code<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|v| check_postal_code(v).is_ok())
}
