#![no_main]

use libfuzzer_sys::fuzz_target;
use validate_spa::DocumentType;
use validate_spa::identity::*;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic: rejection is fine, panics are bugs.
        for doc in DocumentType::ALL {
            assert_eq!(doc.check(s).is_ok(), doc.is_valid(s));
        }
        assert_eq!(
            is_valid_tax_number(s),
            is_valid_nif(s) || is_valid_nie(s) || is_valid_cif(s)
        );
        assert_eq!(is_valid_personal_id(s), is_valid_nif(s) || is_valid_nie(s));
    }
});
