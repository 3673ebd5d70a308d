//! Vehicle plates in the national format used since 2000: `1234 BCD`.

use crate::core::DocumentError;
use crate::core::normalize::{alphanumeric_upper, is_digits, require_len};

/// Letters allowed in the plate suffix: consonants without Ñ and Q.
pub const PLATE_LETTERS: &[u8] = b"BCDFGHJKLMNPRSTVWXYZ";

const LENGTH: usize = 7;

/// Validate a license plate, reporting why it failed.
///
/// Spaces, dashes and other separators are dropped and letters upper-cased.
pub fn check_license_plate(value: &str) -> Result<(), DocumentError> {
    let plate = alphanumeric_upper(value);
    require_len(&plate, LENGTH)?;
    if !is_digits(&plate[..4]) {
        return Err(DocumentError::Format("plate must start with 4 digits"));
    }
    if !plate.bytes().skip(4).all(|b| PLATE_LETTERS.contains(&b)) {
        return Err(DocumentError::Format("plate must end with 3 consonants"));
    }
    Ok(())
}

/// True if `value` is present and a valid license plate.
pub fn is_valid_license_plate<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|v| check_license_plate(v).is_ok())
}
