#![cfg(feature = "rules")]

use validate_spa::{DocumentError, DocumentType, Locale, rules};

#[test]
fn rule_names_match_message_keys() {
    let names: Vec<_> = rules::validators().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec![
            "spanish_tax_number",
            "spanish_personal_id",
            "spanish_nif",
            "spanish_nie",
            "spanish_cif",
            "spanish_ssn",
            "spanish_iban",
            "spanish_postal_code",
            "spanish_phone",
            "spanish_license_plate",
            "spanish_ccc",
            "spanish_passport",
        ]
    );
}

#[test]
fn registered_predicates_accept_known_good_values() {
    let samples = [
        (DocumentType::TaxNumber, "E58818501"),
        (DocumentType::PersonalId, "X1234567L"),
        (DocumentType::Nif, "12345678Z"),
        (DocumentType::Nie, "Z1234567R"),
        (DocumentType::Cif, "A58818501"),
        (DocumentType::Ssn, "087894806929"),
        (DocumentType::Iban, "ES91 2100 0418 4502 0005 1332"),
        (DocumentType::PostalCode, "08001"),
        (DocumentType::Phone, "912345678"),
        (DocumentType::LicensePlate, "1234 BCD"),
        (DocumentType::Ccc, "20850668313101824285"),
        (DocumentType::Passport, "XYZ987654"),
    ];
    for (doc, value) in samples {
        let validator = rules::validator_for(doc.rule_name()).unwrap();
        assert!(validator(Some(value)), "{doc} rejected {value}");
        assert!(!validator(None), "{doc} accepted None");
    }
}

#[test]
fn serde_uses_rule_names() {
    let json = serde_json::to_string(&DocumentType::LicensePlate).unwrap();
    assert_eq!(json, "\"spanish_license_plate\"");

    let parsed: Vec<DocumentType> =
        serde_json::from_str(r#"["spanish_nif", "spanish_iban"]"#).unwrap();
    assert_eq!(parsed, vec![DocumentType::Nif, DocumentType::Iban]);

    assert!(serde_json::from_str::<DocumentType>("\"nif\"").is_err());
}

#[test]
fn locale_serde() {
    assert_eq!(serde_json::to_string(&Locale::Spanish).unwrap(), "\"es\"");
    let locale: Locale = serde_json::from_str("\"en\"").unwrap();
    assert_eq!(locale, Locale::English);
}

#[test]
fn messages_in_both_languages() {
    insta::assert_snapshot!(
        DocumentType::Iban.message(Locale::English),
        @"This is not a valid Spanish IBAN."
    );
    insta::assert_snapshot!(
        DocumentType::LicensePlate.message(Locale::Spanish),
        @"No es una matrícula española válida."
    );
}

#[test]
fn error_display() {
    let err = DocumentType::Nif.check("12345678A").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"control mismatch: expected 'Z', found 'A'");

    let err = DocumentType::Ccc.check("1234").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"expected 20 characters, found 4");

    let err = "spanish_dni".parse::<DocumentType>().unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unknown validation rule 'spanish_dni'");
}

#[test]
fn check_absent_is_missing() {
    assert_eq!(DocumentType::Passport.check(None), Err(DocumentError::Missing));
}
