//! Rule registry: maps each [`DocumentType`] to its predicate.
//!
//! Host frameworks iterate [`validators`] to register every rule under its
//! name, and use [`DocumentType::message`] for the rejection text.
//!
//! ```rust
//! use validate_spa::{DocumentType, Locale, rules};
//!
//! for (name, validator) in rules::validators() {
//!     assert!(name.starts_with("spanish_"));
//!     let _ = validator(Some("12345678Z"));
//! }
//!
//! let rule: DocumentType = "spanish_cif".parse().unwrap();
//! assert!(rule.is_valid("A58818501"));
//! assert!(!rule.is_valid(None));
//! assert_eq!(rule.message(Locale::Spanish), "No es un CIF español válido.");
//! ```

use crate::banking::{check_ccc, check_iban, is_valid_ccc, is_valid_iban};
use crate::core::{DocumentError, DocumentType};
use crate::formats::{
    check_license_plate, check_passport, check_phone, check_postal_code, is_valid_license_plate,
    is_valid_passport, is_valid_phone, is_valid_postal_code,
};
use crate::identity::{
    check_cif, check_nie, check_nif, check_personal_id, check_ssn, check_tax_number,
    is_valid_cif, is_valid_nie, is_valid_nif, is_valid_personal_id, is_valid_ssn,
    is_valid_tax_number,
};

/// A document predicate: absent input is always invalid.
pub type Validator = fn(Option<&str>) -> bool;

impl DocumentType {
    /// The predicate registered under this rule name.
    pub fn validator(&self) -> Validator {
        match self {
            Self::TaxNumber => |v| is_valid_tax_number(v),
            Self::PersonalId => |v| is_valid_personal_id(v),
            Self::Nif => |v| is_valid_nif(v),
            Self::Nie => |v| is_valid_nie(v),
            Self::Cif => |v| is_valid_cif(v),
            Self::Ssn => |v| is_valid_ssn(v),
            Self::Iban => |v| is_valid_iban(v),
            Self::PostalCode => |v| is_valid_postal_code(v),
            Self::Phone => |v| is_valid_phone(v),
            Self::LicensePlate => |v| is_valid_license_plate(v),
            Self::Ccc => |v| is_valid_ccc(v),
            Self::Passport => |v| is_valid_passport(v),
        }
    }

    /// Run this rule's predicate.
    pub fn is_valid<'a>(&self, value: impl Into<Option<&'a str>>) -> bool {
        (self.validator())(value.into())
    }

    /// Run this rule's diagnostic check.
    ///
    /// Rejections are logged at debug level with the rule name and reason.
    /// The value itself is never logged.
    pub fn check<'a>(&self, value: impl Into<Option<&'a str>>) -> Result<(), DocumentError> {
        let Some(value) = value.into() else {
            tracing::debug!(rule = self.rule_name(), "no value given");
            return Err(DocumentError::Missing);
        };
        let result = match self {
            Self::TaxNumber => check_tax_number(value),
            Self::PersonalId => check_personal_id(value),
            Self::Nif => check_nif(value),
            Self::Nie => check_nie(value),
            Self::Cif => check_cif(value),
            Self::Ssn => check_ssn(value),
            Self::Iban => check_iban(value),
            Self::PostalCode => check_postal_code(value),
            Self::Phone => check_phone(value),
            Self::LicensePlate => check_license_plate(value),
            Self::Ccc => check_ccc(value),
            Self::Passport => check_passport(value),
        };
        if let Err(error) = &result {
            tracing::debug!(rule = self.rule_name(), %error, "document rejected");
        }
        result
    }
}

/// Every rule name paired with its predicate, in [`DocumentType::ALL`] order.
pub fn validators() -> impl Iterator<Item = (&'static str, Validator)> {
    DocumentType::ALL
        .into_iter()
        .map(|doc| (doc.rule_name(), doc.validator()))
}

/// Look up a predicate by rule name (`"spanish_nif"` or `"nif"`).
pub fn validator_for(name: &str) -> Result<Validator, DocumentError> {
    name.parse::<DocumentType>().map(|doc| doc.validator())
}
