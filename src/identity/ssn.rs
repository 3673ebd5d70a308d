//! Social Security affiliation number (NUSS).
//!
//! Twelve digits: 2-digit province, 8-digit sequential number, and a 2-digit
//! modulo-97 control.

use crate::core::DocumentError;
use crate::core::normalize::{digits_only, parse_digits, require_len};

const LENGTH: usize = 12;

/// Control value for a province code and sequential number.
///
/// Sequential numbers below ten million are offset by the province times
/// ten million; larger ones are concatenated after the province. A 10-digit
/// numeral always fits in a `u64`.
pub fn control(province: u64, sequential: u64) -> u64 {
    let number = if sequential < 10_000_000 {
        sequential + province * 10_000_000
    } else {
        province * 100_000_000 + sequential
    };
    number % 97
}

/// Validate a Social Security number, reporting why it failed.
///
/// Every non-digit character is dropped first, so `"28 1234567840"` and
/// `"28/12345678/40"` are both accepted.
pub fn check_ssn(value: &str) -> Result<(), DocumentError> {
    let ssn = digits_only(value);
    require_len(&ssn, LENGTH)?;

    let field = |range: std::ops::Range<usize>| {
        parse_digits(&ssn[range]).ok_or(DocumentError::Format("NUSS must be 12 digits"))
    };
    let province = field(0..2)?;
    let sequential = field(2..10)?;

    let expected = format!("{:02}", control(province, sequential));
    let found = &ssn[10..];
    if expected != found {
        return Err(DocumentError::checksum(expected, found));
    }
    Ok(())
}

/// True if `value` is present and a valid Social Security number.
pub fn is_valid_ssn<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|v| check_ssn(v).is_ok())
}
