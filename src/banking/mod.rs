//! Bank account identifiers: Spanish IBAN and the legacy CCC.
//!
//! # Example
//!
//! ```rust
//! use validate_spa::banking::*;
//!
//! assert!(is_valid_iban("ES91 2100 0418 4502 0005 1332"));
//! assert!(is_valid_ccc("2085 0668 31 3101824285"));
//! assert!(check_iban("ES9121000418450200051333").is_err());
//! ```

pub mod ccc;
pub mod iban;

pub use ccc::{check_ccc, is_valid_ccc};
pub use iban::{check_iban, is_valid_iban};
