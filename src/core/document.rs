use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DocumentError;

/// Spanish document types, one per validation rule.
///
/// Serializes as the stable rule name (e.g. `"spanish_nif"`) that host
/// frameworks register the predicate under and key messages by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentType {
    /// NIF, NIE or CIF.
    #[serde(rename = "spanish_tax_number")]
    TaxNumber,
    /// NIF or NIE.
    #[serde(rename = "spanish_personal_id")]
    PersonalId,
    /// Número de Identificación Fiscal (citizens).
    #[serde(rename = "spanish_nif")]
    Nif,
    /// Número de Identidad de Extranjero (foreign residents).
    #[serde(rename = "spanish_nie")]
    Nie,
    /// Código de Identificación Fiscal (legal entities).
    #[serde(rename = "spanish_cif")]
    Cif,
    /// Social Security affiliation number (NUSS).
    #[serde(rename = "spanish_ssn")]
    Ssn,
    /// Spanish IBAN (`ES` + 22 characters).
    #[serde(rename = "spanish_iban")]
    Iban,
    /// Five-digit postal code.
    #[serde(rename = "spanish_postal_code")]
    PostalCode,
    /// Nine-digit national phone number.
    #[serde(rename = "spanish_phone")]
    Phone,
    /// Current-format vehicle plate (`1234 BCD`).
    #[serde(rename = "spanish_license_plate")]
    LicensePlate,
    /// Código Cuenta Cliente, the legacy 20-digit account code.
    #[serde(rename = "spanish_ccc")]
    Ccc,
    /// Passport number (`AAA123456`).
    #[serde(rename = "spanish_passport")]
    Passport,
}

impl DocumentType {
    /// Every document type, composites first.
    pub const ALL: [Self; 12] = [
        Self::TaxNumber,
        Self::PersonalId,
        Self::Nif,
        Self::Nie,
        Self::Cif,
        Self::Ssn,
        Self::Iban,
        Self::PostalCode,
        Self::Phone,
        Self::LicensePlate,
        Self::Ccc,
        Self::Passport,
    ];

    /// Stable rule name used for registration and message lookup.
    pub fn rule_name(&self) -> &'static str {
        match self {
            Self::TaxNumber => "spanish_tax_number",
            Self::PersonalId => "spanish_personal_id",
            Self::Nif => "spanish_nif",
            Self::Nie => "spanish_nie",
            Self::Cif => "spanish_cif",
            Self::Ssn => "spanish_ssn",
            Self::Iban => "spanish_iban",
            Self::PostalCode => "spanish_postal_code",
            Self::Phone => "spanish_phone",
            Self::LicensePlate => "spanish_license_plate",
            Self::Ccc => "spanish_ccc",
            Self::Passport => "spanish_passport",
        }
    }

    /// Rule name without the `spanish_` prefix (e.g. `"nif"`).
    pub fn short_name(&self) -> &'static str {
        let name = self.rule_name();
        name.strip_prefix("spanish_").unwrap_or(name)
    }

    /// Parse from a rule name, with or without the `spanish_` prefix.
    pub fn from_rule_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|doc| {
            doc.rule_name().eq_ignore_ascii_case(name)
                || doc.short_name().eq_ignore_ascii_case(name)
        })
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.rule_name())
    }
}

impl FromStr for DocumentType {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rule_name(s).ok_or_else(|| DocumentError::UnknownRule(s.to_string()))
    }
}
