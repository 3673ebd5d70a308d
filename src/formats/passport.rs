//! Passport numbers: three letters followed by six digits.

use crate::core::DocumentError;
use crate::core::normalize::{is_digits, require_len, trim_upper};

const LENGTH: usize = 9;

/// Validate a passport number, reporting why it failed.
///
/// Surrounding whitespace and letter case are ignored.
pub fn check_passport(value: &str) -> Result<(), DocumentError> {
    let passport = trim_upper(value);
    require_len(&passport, LENGTH)?;
    if !passport.bytes().take(3).all(|b| b.is_ascii_uppercase()) {
        return Err(DocumentError::Format("passport must start with 3 letters"));
    }
    if !is_digits(&passport[3..]) {
        return Err(DocumentError::Format("passport must end with 6 digits"));
    }
    Ok(())
}

/// True if `value` is present and a valid passport number.
pub fn is_valid_passport<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|v| check_passport(v).is_ok())
}
