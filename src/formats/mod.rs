//! Structural checks without control digits: postal codes, phone numbers,
//! license plates and passports.
//!
//! # Example
//!
//! ```rust
//! use validate_spa::formats::*;
//!
//! assert!(is_valid_postal_code("28001"));
//! assert!(!is_valid_postal_code("98020"));
//! assert!(is_valid_phone("612 345 678"));
//! assert!(is_valid_license_plate("1234 BCD"));
//! assert!(is_valid_passport("XYZ987654"));
//! ```

mod license_plate;
mod passport;
mod phone;
mod postal_code;

pub use license_plate::{PLATE_LETTERS, check_license_plate, is_valid_license_plate};
pub use passport::{check_passport, is_valid_passport};
pub use phone::{check_phone, is_valid_phone};
pub use postal_code::{PROVINCES, check_postal_code, is_valid_postal_code};
