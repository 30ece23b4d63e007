// File: vaultmask-core/src/validators.rs
//! Programmatic validation functions for vault entries.
//!
//! Vault values are supplied by the caller, so nothing here rejects an entry
//! outright; these checks only let the configuration layer warn when a value
//! does not look like its declared category (a phone number filed as an SSN,
//! an email without a domain).
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{PiiCategory, PiiEntry};

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email shape pattern is valid")
});

/// Checks an SSN against the structural rules of issued numbers.
///
/// Expects "XXX-XX-XXXX" or nine bare digits. Area 000, 666 and 900-999,
/// group 00 and serial 0000 have never been issued.
pub fn is_issuable_ssn(ssn: &str) -> bool {
    let digits: String = ssn.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    if digits.len() != 9 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let Ok(area) = digits[0..3].parse::<u16>() else { return false; };
    let Ok(group) = digits[3..5].parse::<u8>() else { return false; };
    let Ok(serial) = digits[5..9].parse::<u16>() else { return false; };

    let invalid_area = area == 0 || area == 666 || area >= 900;
    !(invalid_area || group == 0 || serial == 0)
}

/// Loose shape check: something@domain.tld without whitespace.
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}

/// Phone numbers are accepted in any punctuation as long as they carry
/// between 7 and 15 digits (E.164 upper bound).
pub fn looks_like_phone(value: &str) -> bool {
    let digit_count = value.chars().filter(|c| c.is_ascii_digit()).count();
    (7..=15).contains(&digit_count)
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || "+-().".contains(c))
}

/// Returns a human-readable reason when an entry's value does not fit its
/// category, or `None` when it looks plausible.
pub fn category_mismatch(entry: &PiiEntry) -> Option<String> {
    match entry.category {
        PiiCategory::Email if !looks_like_email(&entry.value) => {
            Some("value does not look like an email address; domain expansion will be skipped".to_string())
        }
        PiiCategory::Phone if !looks_like_phone(&entry.value) => {
            Some("value does not look like a phone number".to_string())
        }
        PiiCategory::Ssn if !is_issuable_ssn(&entry.value) => {
            Some("value is not a structurally valid SSN".to_string())
        }
        _ => None,
    }
}
