//! Input normalization shared by the document validators.
//!
//! Each document type tolerates a different kind of noise, so every helper
//! returns a fresh `String` and the validators pick the one that fits.

use super::error::DocumentError;

/// Trim surrounding whitespace and upper-case ASCII letters.
///
/// Non-ASCII characters are left untouched and will fail any shape check.
pub fn trim_upper(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}

/// Keep only ASCII digits, dropping spaces, dashes, dots and everything else.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Keep only ASCII letters and digits, upper-casing the letters.
pub fn alphanumeric_upper(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// True if `s` is non-empty and made only of ASCII digits.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a run of ASCII digits into an integer.
///
/// Returns `None` for an empty or non-digit input, or if the value does not
/// fit in a `u64` (more than 19 digits).
pub fn parse_digits(s: &str) -> Option<u64> {
    if !is_digits(s) {
        return None;
    }
    s.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}

/// Require a normalized candidate of exactly `len` ASCII characters.
pub fn require_len(candidate: &str, len: usize) -> Result<(), DocumentError> {
    if candidate.is_empty() {
        return Err(DocumentError::Missing);
    }
    if candidate.chars().count() != len {
        return Err(DocumentError::length(len, candidate));
    }
    if !candidate.is_ascii() {
        return Err(DocumentError::Format("unexpected non-ASCII character"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_upper_only_touches_ascii() {
        assert_eq!(trim_upper("  x1234567l\t"), "X1234567L");
        assert_eq!(trim_upper("ñ"), "ñ");
    }

    #[test]
    fn digits_only_strips_separators() {
        assert_eq!(digits_only("28 1234-5678/40"), "281234567840");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn alphanumeric_upper_strips_and_folds() {
        assert_eq!(alphanumeric_upper("es91 2100-0418"), "ES9121000418");
        assert_eq!(alphanumeric_upper("1234 ÑBC"), "1234BC");
    }

    #[test]
    fn is_digits_rejects_empty() {
        assert!(is_digits("0123"));
        assert!(!is_digits(""));
        assert!(!is_digits("12a"));
    }

    #[test]
    fn parse_digits_handles_leading_zeros_and_overflow() {
        assert_eq!(parse_digits("00012"), Some(12));
        assert_eq!(parse_digits("9999999999"), Some(9_999_999_999));
        assert_eq!(parse_digits("99999999999999999999"), None);
        assert_eq!(parse_digits("1 2"), None);
    }

    #[test]
    fn require_len_reasons() {
        assert_eq!(require_len("", 5), Err(DocumentError::Missing));
        assert_eq!(require_len("12345", 5), Ok(()));
        assert_eq!(
            require_len("1234", 5),
            Err(DocumentError::Length {
                expected: 5,
                found: 4
            })
        );
        assert_eq!(
            require_len("1234Ñ", 5),
            Err(DocumentError::Format("unexpected non-ASCII character"))
        );
    }
}
