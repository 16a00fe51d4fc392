//! Field validators for the registration form. Spanish identity documents
//! carry a control letter computed from the numeric part modulo 23; a wrong
//! letter is the most common data-entry mistake, so it is checked here before
//! anything is submitted.

use regex::Regex;

/// Control letters for DNI/NIE numbers, indexed by `number % 23`.
const CONTROL_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

/// Accepts an optional leading `+` followed by 6 to 15 digits, with spaces
/// allowed between groups.
pub fn valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    Regex::new(r"^\+?[0-9]{6,15}$").map_or(false, |re| re.is_match(&compact))
}

/// DNI: eight digits plus the control letter, e.g. `12345678Z`.
pub fn valid_dni(value: &str) -> bool {
    let value = value.trim().to_uppercase();
    if !Regex::new(r"^[0-9]{8}[A-Z]$").map_or(false, |re| re.is_match(&value)) {
        return false;
    }

    let number: u32 = match value[..8].parse() {
        Ok(number) => number,
        Err(_) => return false,
    };
    control_letter(number) == value.as_bytes()[8]
}

/// NIE: `X`, `Y` or `Z`, seven digits and the control letter. The prefix maps
/// to a leading digit before the checksum, e.g. `X1234567L`.
pub fn valid_nie(value: &str) -> bool {
    let value = value.trim().to_uppercase();
    if !Regex::new(r"^[XYZ][0-9]{7}[A-Z]$").map_or(false, |re| re.is_match(&value)) {
        return false;
    }

    let prefix = match value.as_bytes()[0] {
        b'X' => 0,
        b'Y' => 1,
        b'Z' => 2,
        _ => return false,
    };
    let number: u32 = match value[1..8].parse::<u32>() {
        Ok(number) => prefix * 10_000_000 + number,
        Err(_) => return false,
    };
    control_letter(number) == value.as_bytes()[8]
}

/// Passports have no universal checksum; require 5 to 12 alphanumerics.
pub fn valid_passport(value: &str) -> bool {
    let value = value.trim().to_uppercase();
    Regex::new(r"^[A-Z0-9]{5,12}$").map_or(false, |re| re.is_match(&value))
}

fn control_letter(number: u32) -> u8 {
    CONTROL_LETTERS[(number % 23) as usize]
}

#[cfg(test)]
mod tests {
    use super::{valid_dni, valid_email, valid_nie, valid_passport, valid_phone};

    #[test]
    fn email_accepts_plain_addresses_only() {
        assert!(valid_email("ana@example.com"));
        assert!(valid_email("ana.garcia@alb.carrascalejo.dev"));
        assert!(!valid_email("ana@example"));
        assert!(!valid_email("ana example@x.com"));
        assert!(!valid_email("@example.com"));
    }

    #[test]
    fn phone_accepts_prefixed_and_grouped_digits() {
        assert!(valid_phone("+34 612 345 678"));
        assert!(valid_phone("612345678"));
        assert!(!valid_phone("12345"));
        assert!(!valid_phone("+34-612-345-678"));
    }

    #[test]
    fn dni_checksum() {
        assert!(valid_dni("12345678Z"));
        assert!(valid_dni("12345678z"));
        assert!(!valid_dni("12345678A"));
        assert!(!valid_dni("1234567Z"));
        assert!(!valid_dni("ABCDEFGHZ"));
    }

    #[test]
    fn nie_checksum_maps_the_prefix() {
        assert!(valid_nie("X1234567L"));
        assert!(valid_nie("Z1234567R"));
        assert!(!valid_nie("X1234567T"));
        assert!(!valid_nie("W1234567L"));
    }

    #[test]
    fn passport_is_loosely_shaped() {
        assert!(valid_passport("AA123456"));
        assert!(valid_passport("x1234567"));
        assert!(!valid_passport("1234"));
        assert!(!valid_passport("A 123456"));
    }
}
