//! Personal and corporate identifiers: NIF, NIE, CIF and Social Security numbers.
//!
//! # Example
//!
//! ```rust
//! use validate_spa::identity::*;
//!
//! assert!(is_valid_nif("12345678Z"));
//! assert!(is_valid_nie(" x1234567l "));
//! assert!(is_valid_cif("A58818501"));
//! assert!(is_valid_tax_number("A58818501"));
//! assert!(!is_valid_personal_id("A58818501"));
//! assert!(is_valid_ssn("08 78948069 29"));
//! ```

pub mod cif;
pub mod nif;
mod ssn;

pub use cif::{check_cif, is_valid_cif};
pub use nif::{check_nie, check_nif, is_valid_nie, is_valid_nif};
pub use ssn::{check_ssn, is_valid_ssn};

use crate::core::DocumentError;
use crate::core::normalize::trim_upper;

/// Validate a NIF, NIE or CIF.
///
/// NIF, NIE and CIF shapes are told apart by their first character, so the
/// error returned is the one from the scheme that character selects.
pub fn check_tax_number(value: &str) -> Result<(), DocumentError> {
    match leading(value) {
        Some('X' | 'Y' | 'Z') => check_nie(value),
        Some('A'..='W') => check_cif(value),
        Some(_) => check_nif(value),
        None => Err(DocumentError::Missing),
    }
}

/// Validate a NIF or NIE. Company identifiers (CIF) are rejected.
pub fn check_personal_id(value: &str) -> Result<(), DocumentError> {
    match leading(value) {
        Some('X' | 'Y' | 'Z') => check_nie(value),
        Some(_) => check_nif(value),
        None => Err(DocumentError::Missing),
    }
}

/// True if `value` is a valid NIF, NIE or CIF.
pub fn is_valid_tax_number<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value
        .into()
        .is_some_and(|v| is_valid_nif(v) || is_valid_nie(v) || is_valid_cif(v))
}

/// True if `value` is a valid NIF or NIE.
pub fn is_valid_personal_id<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value
        .into()
        .is_some_and(|v| is_valid_nif(v) || is_valid_nie(v))
}

fn leading(value: &str) -> Option<char> {
    trim_upper(value).chars().next()
}
