//! NIF and NIE: eight-digit numeral plus a modulo-23 control letter.

use crate::core::DocumentError;
use crate::core::normalize::{parse_digits, require_len, trim_upper};

/// Control letters indexed by `number % 23`.
pub const CONTROL_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// NIF and NIE are both nine characters long.
const LENGTH: usize = 9;

/// Control letter for an eight-digit NIF numeral.
pub fn control_letter(number: u64) -> char {
    char::from(CONTROL_LETTERS[(number % 23) as usize])
}

/// Validate a NIF (8 digits + control letter), reporting why it failed.
///
/// Surrounding whitespace and letter case are ignored.
pub fn check_nif(value: &str) -> Result<(), DocumentError> {
    let nif = normalized(value)?;
    let number = parse_digits(&nif[..8])
        .ok_or(DocumentError::Format("NIF must be 8 digits followed by a letter"))?;
    verify_letter(number, nif.as_bytes()[8])
}

/// Validate a NIE (X/Y/Z + 7 digits + control letter), reporting why it failed.
///
/// The prefix letter stands for a leading digit: X→0, Y→1, Z→2.
pub fn check_nie(value: &str) -> Result<(), DocumentError> {
    let nie = normalized(value)?;
    let prefix: u64 = match nie.as_bytes()[0] {
        b'X' => 0,
        b'Y' => 1,
        b'Z' => 2,
        _ => return Err(DocumentError::Format("NIE must start with X, Y or Z")),
    };
    let digits = parse_digits(&nie[1..8])
        .ok_or(DocumentError::Format("NIE must have 7 digits after the prefix letter"))?;
    verify_letter(prefix * 10_000_000 + digits, nie.as_bytes()[8])
}

/// True if `value` is present and a valid NIF.
pub fn is_valid_nif<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|v| check_nif(v).is_ok())
}

/// True if `value` is present and a valid NIE.
pub fn is_valid_nie<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|v| check_nie(v).is_ok())
}

/// Trim, upper-case and require nine ASCII characters.
fn normalized(value: &str) -> Result<String, DocumentError> {
    let candidate = trim_upper(value);
    require_len(&candidate, LENGTH)?;
    Ok(candidate)
}

fn verify_letter(number: u64, found: u8) -> Result<(), DocumentError> {
    if !found.is_ascii_uppercase() {
        return Err(DocumentError::Format("control character must be a letter"));
    }
    let expected = control_letter(number);
    if char::from(found) != expected {
        return Err(DocumentError::checksum(expected, char::from(found)));
    }
    Ok(())
}
