//! # validate-spa
//!
//! Offline validation of Spanish document numbers: NIF, NIE, CIF, Social
//! Security numbers, IBAN, CCC, postal codes, phone numbers, license plates
//! and passports.
//!
//! Every document type has two entry points:
//!
//! - `is_valid_*(value)` takes an optional string and answers yes or no.
//!   Absent input, bad shape and checksum mismatch are all just `false`.
//! - `check_*(value)` returns a [`DocumentError`] explaining the rejection.
//!
//! Input may be loosely formatted: each validator trims, upper-cases and
//! drops separators as the document type allows. Nothing is looked up
//! against external registries.
//!
//! ## Quick Start
//!
//! ```rust
//! use validate_spa::identity::{is_valid_nif, is_valid_tax_number};
//! use validate_spa::banking::is_valid_iban;
//!
//! assert!(is_valid_nif(" 12345678z "));
//! assert!(!is_valid_nif("12345678A"));
//! assert!(is_valid_tax_number("X1234567L"));
//! assert!(is_valid_iban("ES91 2100 0418 4502 0005 1332"));
//! assert!(!is_valid_iban(None));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Document identifiers, errors, messages, checksum helpers |
//! | `identity` | NIF, NIE, CIF, composites, Social Security number |
//! | `banking` | IBAN, CCC |
//! | `formats` | Postal code, phone, license plate, passport |
//! | `rules` (default) | Rule-name registry over all of the above |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "identity")]
pub mod identity;

#[cfg(feature = "banking")]
pub mod banking;

#[cfg(feature = "formats")]
pub mod formats;

#[cfg(feature = "rules")]
pub mod rules;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
