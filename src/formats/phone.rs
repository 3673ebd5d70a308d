//! Nine-digit national phone numbers (mobile 6/7, landline 8/9).

use crate::core::DocumentError;
use crate::core::normalize::{digits_only, require_len};

const LENGTH: usize = 9;

/// Validate a phone number, reporting why it failed.
///
/// Every non-digit character is dropped first. An international `+34`
/// prefix is not stripped and makes the number too long.
pub fn check_phone(value: &str) -> Result<(), DocumentError> {
    let phone = digits_only(value);
    require_len(&phone, LENGTH)?;
    match phone.as_bytes()[0] {
        b'6'..=b'9' => Ok(()),
        _ => Err(DocumentError::Format("phone number must start with 6, 7, 8 or 9")),
    }
}

/// True if `value` is present and a valid phone number.
pub fn is_valid_phone<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|v| check_phone(v).is_ok())
}
