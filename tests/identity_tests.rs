#![cfg(feature = "identity")]

use validate_spa::DocumentError;
use validate_spa::identity::*;

// ---------------------------------------------------------------------------
// NIF
// ---------------------------------------------------------------------------

#[test]
fn nif_valid() {
    assert!(is_valid_nif("12345678Z"));
    assert!(is_valid_nif(Some("00000000T")));
}

#[test]
fn nif_case_and_whitespace_insensitive() {
    assert_eq!(is_valid_nif(" 12345678z "), is_valid_nif("12345678Z"));
    assert_eq!(check_nif(" 12345678a "), check_nif("12345678A"));
}

#[test]
fn nif_rejects() {
    for nif in ["1234567", "123456789A", "12345678A", "X12345678Z", "ABCDEFGHI"] {
        assert!(!is_valid_nif(nif), "NIF {nif} should be invalid");
    }
}

#[test]
fn nif_every_letter_for_one_number() {
    let valid: Vec<char> = ('A'..='Z')
        .filter(|l| is_valid_nif(format!("12345678{l}").as_str()))
        .collect();
    assert_eq!(valid, vec!['Z']);
}

// ---------------------------------------------------------------------------
// NIE
// ---------------------------------------------------------------------------

#[test]
fn nie_valid() {
    assert!(is_valid_nie("X1234567L"));
    assert!(is_valid_nie("Y1234567X"));
    assert!(is_valid_nie("Z1234567R"));
}

#[test]
fn nie_rejects() {
    for nie in ["X1234567A", "12345678Z", "X123456", "X12345678A", "A1234567L", "Y1234567R"] {
        assert!(!is_valid_nie(nie), "NIE {nie} should be invalid");
    }
}

#[test]
fn nie_prefix_maps_to_leading_digit() {
    // Y1234567 is checked as 11234567, Z1234567 as 21234567
    assert_eq!(nif::control_letter(11_234_567), 'X');
    assert_eq!(nif::control_letter(21_234_567), 'R');
}

// ---------------------------------------------------------------------------
// CIF
// ---------------------------------------------------------------------------

#[test]
fn cif_valid() {
    assert!(is_valid_cif("A58818501"));
    assert!(is_valid_cif("E58818501"));
    assert!(is_valid_cif("N0032484H"));
}

#[test]
fn cif_rejects() {
    let invalid = [
        "P5700001E", "X12345678", "A1234567", "A123456789", "A12345678", "A 1234567A",
        "A1234567J", "P1234567A", "J7654321K", "V1234567B", "C12345678", "C1234567A",
        "F12345670", "K12345670", "R12345670", "12345678A", "ABCDEFGHIJ", "!ABCDE#FG",
    ];
    for cif in invalid {
        assert!(!is_valid_cif(cif), "CIF {cif} should be invalid");
    }
}

#[test]
fn cif_letter_control_follows_table() {
    // control digit of 1234567 is 4 → CONTROL_LETTERS[4] = 'D'
    assert_eq!(cif::control_digit("1234567"), 4);
    for entity in ['C', 'D', 'F', 'G', 'K', 'L', 'M', 'N', 'R', 'T'] {
        assert!(is_valid_cif(format!("{entity}1234567D").as_str()), "{entity}");
    }
    for entity in ['A', 'B', 'E', 'H', 'J', 'U', 'V', 'P', 'Q', 'S', 'W'] {
        assert!(is_valid_cif(format!("{entity}12345674").as_str()), "{entity}");
    }
}

#[test]
fn cif_error_reason() {
    assert_eq!(
        check_cif("G12345674"),
        Err(DocumentError::Checksum {
            expected: "D".into(),
            found: "4".into()
        })
    );
}

// ---------------------------------------------------------------------------
// Composites
// ---------------------------------------------------------------------------

#[test]
fn tax_number_valid() {
    for value in ["12345678Z", "X1234567L", "E58818501"] {
        assert!(is_valid_tax_number(value), "{value} should be a tax number");
    }
}

#[test]
fn personal_id_rejects() {
    for value in ["A58818501", "123456789A", "X4234567L"] {
        assert!(!is_valid_personal_id(value), "{value} should not be a personal id");
    }
}

#[test]
fn composites_reject_absent() {
    assert!(!is_valid_tax_number(None));
    assert!(!is_valid_personal_id(None));
}

// ---------------------------------------------------------------------------
// Social Security number
// ---------------------------------------------------------------------------

#[test]
fn ssn_valid() {
    assert!(is_valid_ssn("087894806929"));
    assert!(is_valid_ssn("08 78948069 29"));
}

#[test]
fn ssn_rejects() {
    let invalid = [
        "280123456780", "12345678", "1234567890123", "000123456789", "990123456701",
        "28abc4567812", "2801234567  ", "28012345678A",
    ];
    for ssn in invalid {
        assert!(!is_valid_ssn(ssn), "SSN {ssn} should be invalid");
    }
}

#[test]
fn ssn_ten_digit_numeral_no_overflow() {
    // 99 ‖ 99999999 = 9_999_999_999 does not fit in a u32
    let control = 9_999_999_999u64 % 97;
    assert!(is_valid_ssn(format!("9999999999{control:02}").as_str()));
}
