//! Registration number validation.

/// Decides whether a registration number is acceptable for entry.
///
/// The ledger treats any `false` as a hard rejection. Implementations may
/// check plate formats, consult an external registry, or anything in
/// between.
pub trait RegistrationValidator: Send + Sync {
    fn validate(&self, country: &str, registration_no: &str) -> bool;
}

/// Format-based validator.
///
/// Accepts a country code of 1 to 3 ASCII uppercase letters and a
/// registration number of 2 to 10 ASCII uppercase letters or digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlateFormatValidator;

impl RegistrationValidator for PlateFormatValidator {
    fn validate(&self, country: &str, registration_no: &str) -> bool {
        let country_ok = (1..=3).contains(&country.len())
            && country.bytes().all(|b| b.is_ascii_uppercase());

        let registration_ok = (2..=10).contains(&registration_no.len())
            && registration_no
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());

        country_ok && registration_ok
    }
}
