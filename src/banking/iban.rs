//! Spanish IBAN: `ES`, two check digits, and the 20-digit CCC.

use crate::core::DocumentError;
use crate::core::checksum::mod97;
use crate::core::normalize::{alphanumeric_upper, require_len};

/// Spanish IBANs are always 24 characters.
pub const LENGTH: usize = 24;

const COUNTRY: &str = "ES";

/// Remainder of the ISO 13616 rearranged IBAN modulo 97.
///
/// The first four characters are moved to the end and each letter expands
/// to two digits (`A` = 10 … `Z` = 35). The numeral is reduced digit by
/// digit, so it is never materialized.
///
/// No shape check happens here. Callers pass an already normalized IBAN;
/// any non-alphanumeric character counts as zero.
pub fn remainder(iban: &str) -> u32 {
    let split = iban.char_indices().nth(4).map_or(iban.len(), |(i, _)| i);
    let (head, tail) = iban.split_at(split);
    let digits = tail.chars().chain(head.chars()).flat_map(|c| {
        let value = c.to_digit(36).unwrap_or(0);
        let (high, low) = (value / 10, value % 10);
        // letters are always two digits, plain digits one
        (value >= 10).then_some(high).into_iter().chain([low])
    });
    mod97(digits)
}

/// Validate a Spanish IBAN, reporting why it failed.
///
/// Spaces, dashes and any other non-alphanumeric characters are dropped and
/// letters are upper-cased before checking.
pub fn check_iban(value: &str) -> Result<(), DocumentError> {
    let iban = alphanumeric_upper(value);
    require_len(&iban, LENGTH)?;
    if !iban.starts_with(COUNTRY) {
        return Err(DocumentError::Format("IBAN must start with ES"));
    }
    match remainder(&iban) {
        1 => Ok(()),
        other => Err(DocumentError::checksum(1, other)),
    }
}

/// True if `value` is present and a valid Spanish IBAN.
pub fn is_valid_iban<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|v| check_iban(v).is_ok())
}
