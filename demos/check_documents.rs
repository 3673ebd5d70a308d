use validate_spa::{DocumentType, Locale};

fn main() {
    println!("=== Spanish Document Validation ===\n");

    let inputs = [
        (DocumentType::Nif, "12345678Z"),
        (DocumentType::Nif, "12345678A"),
        (DocumentType::Nie, "x1234567l"),
        (DocumentType::Cif, "A58818501"),
        (DocumentType::Cif, "P5700001E"),
        (DocumentType::Ssn, "08 78948069 29"),
        (DocumentType::Iban, "ES91 2100 0418 4502 0005 1332"),
        (DocumentType::Ccc, "2085 0668 31 3101824285"),
        (DocumentType::PostalCode, "98020"),
        (DocumentType::Phone, "+34 612 345 678"),
        (DocumentType::LicensePlate, "1234 BCD"),
        (DocumentType::Passport, "XYZ987654"),
        (DocumentType::TaxNumber, "X1234567L"),
        (DocumentType::PersonalId, "A58818501"),
    ];

    for (doc, value) in &inputs {
        match doc.check(*value) {
            Ok(()) => println!("  {doc:<22} {value:<32} => valid"),
            Err(e) => println!(
                "  {doc:<22} {value:<32} => INVALID: {e} ({})",
                doc.message(Locale::Spanish)
            ),
        }
    }

    println!("\n=== Registered Rules ===\n");
    for (name, validator) in validate_spa::rules::validators() {
        println!("  {name:<22} accepts None: {}", validator(None));
    }
}
