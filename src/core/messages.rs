//! English and Spanish rejection messages, keyed by rule name.
//!
//! Host frameworks map a `false` predicate result to one of these strings.
//! Loading translations from files and templating are left to the host.

use serde::{Deserialize, Serialize};

use super::document::DocumentType;

/// Message language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// English.
    #[default]
    #[serde(rename = "en")]
    English,
    /// Spanish.
    #[serde(rename = "es")]
    Spanish,
}

impl Locale {
    /// ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    /// Parse a language tag such as `"es"`, `"es-ES"` or `"en_GB"`.
    ///
    /// Only the primary language subtag is considered.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::English),
            "es" => Some(Self::Spanish),
            _ => None,
        }
    }
}

impl DocumentType {
    /// Rejection message for this rule in the given language.
    pub fn message(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => english(*self),
            Locale::Spanish => spanish(*self),
        }
    }
}

fn english(doc: DocumentType) -> &'static str {
    match doc {
        DocumentType::TaxNumber => "This is not a valid Spanish NIF,NIE o CIF.",
        DocumentType::PersonalId => "This is not a valid Spanish NIF o NIE.",
        DocumentType::Nif => "This is not a valid Spanish NIF.",
        DocumentType::Nie => "This is not a valid Spanish NIE.",
        DocumentType::Cif => "This is not a valid Spanish CIF.",
        DocumentType::Ssn => "This is not a valid Spanish Social Security Number.",
        DocumentType::Iban => "This is not a valid Spanish IBAN.",
        DocumentType::PostalCode => "This is not valid Spanish Postal Code.",
        DocumentType::Phone => "This is not valid Spanish Phone.",
        DocumentType::LicensePlate => "This is not valid Spanish License Plate.",
        DocumentType::Ccc => "This is not valid Spanish CCC.",
        DocumentType::Passport => "This is not valid Spanish Passport.",
    }
}

fn spanish(doc: DocumentType) -> &'static str {
    match doc {
        DocumentType::TaxNumber => "No es un NIF,NIE o CIF válido.",
        DocumentType::PersonalId => "No es un NIF,NIE válido.",
        DocumentType::Nif => "No es un NIF español válido.",
        DocumentType::Nie => "No es un NIE español válido.",
        DocumentType::Cif => "No es un CIF español válido.",
        DocumentType::Ssn => "No es un Número de la Seguridad Social válido.",
        DocumentType::Iban => "No es un IBAN español válido.",
        DocumentType::PostalCode => "No es un código postal español válido.",
        DocumentType::Phone => "No es un número de teléfono español válido.",
        DocumentType::LicensePlate => "No es una matrícula española válida.",
        DocumentType::Ccc => "No es un CCC español válido.",
        DocumentType::Passport => "No es un pasaporte español válido.",
    }
}
