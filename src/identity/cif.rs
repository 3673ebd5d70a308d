//! CIF: entity type letter, seven digits, and a digit-or-letter control.

use crate::core::DocumentError;
use crate::core::checksum::digit_sum;
use crate::core::normalize::{is_digits, require_len, trim_upper};

/// Entity types whose control character is the control digit.
pub const NUMERIC_CONTROL_TYPES: &[u8] = b"ABEHJUVPQSW";

/// Entity types whose control character is a letter from [`CONTROL_LETTERS`].
pub const LETTER_CONTROL_TYPES: &[u8] = b"CDFGKLMNRT";

/// Control letters indexed by control digit.
pub const CONTROL_LETTERS: &[u8; 10] = b"JABCDEFGHI";

const LENGTH: usize = 9;

/// How the control character of a CIF is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// The control digit itself (`0`–`9`).
    Digit,
    /// A letter `J`, `A`–`I` selected by the control digit.
    Letter,
}

impl ControlKind {
    /// Control convention for an entity type letter, if it has one.
    pub fn for_entity(entity: u8) -> Option<Self> {
        if NUMERIC_CONTROL_TYPES.contains(&entity) {
            Some(Self::Digit)
        } else if LETTER_CONTROL_TYPES.contains(&entity) {
            Some(Self::Letter)
        } else {
            None
        }
    }

    fn render(self, control_digit: u32) -> char {
        match self {
            Self::Digit => char::from(b'0' + control_digit as u8),
            Self::Letter => char::from(CONTROL_LETTERS[control_digit as usize]),
        }
    }
}

/// Control digit for the seven-digit body of a CIF.
///
/// Digits at even positions are doubled and reduced to their digit sum,
/// digits at odd positions are added as-is.
pub fn control_digit(body: &str) -> u32 {
    let sum: u32 = body
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { digit_sum(d * 2) } else { d })
        .sum();
    (10 - sum % 10) % 10
}

/// Validate a CIF, reporting why it failed.
///
/// Surrounding whitespace and letter case are ignored.
pub fn check_cif(value: &str) -> Result<(), DocumentError> {
    let cif = trim_upper(value);
    require_len(&cif, LENGTH)?;

    let bytes = cif.as_bytes();
    let entity = bytes[0];
    if !(b'A'..=b'W').contains(&entity) {
        return Err(DocumentError::Format("CIF must start with an entity letter A-W"));
    }
    let body = &cif[1..8];
    if !is_digits(body) {
        return Err(DocumentError::Format("CIF must have 7 digits after the entity letter"));
    }
    let found = bytes[8];
    if !(found.is_ascii_digit() || (b'A'..=b'J').contains(&found)) {
        return Err(DocumentError::Format("CIF control must be a digit or a letter A-J"));
    }

    let kind = ControlKind::for_entity(entity)
        .ok_or(DocumentError::Format("unsupported CIF entity letter"))?;
    let expected = kind.render(control_digit(body));
    if char::from(found) != expected {
        return Err(DocumentError::checksum(expected, char::from(found)));
    }
    Ok(())
}

/// True if `value` is present and a valid CIF.
pub fn is_valid_cif<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value.into().is_some_and(|v| check_cif(v).is_ok())
}
