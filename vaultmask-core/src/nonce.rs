// vaultmask-core/src/nonce.rs
//! Synthetic replacement values ("nonces").
//!
//! Nonces look like the data they replace, so an LLM can reason about the
//! redacted text naturally, but they come from reserved or obviously
//! fictional ranges: `555-01XX` phone numbers, never-issued `900-XX-####`
//! SSNs, `example.*` mail domains. Values are driven by per-category counters
//! in the session, so generation is deterministic apart from the random
//! suffix used to break collisions.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use rand::Rng;

use crate::config::PiiCategory;
use crate::session::RedactionSession;

const FIRST_NAMES: [&str; 12] = [
    "Avery", "Blair", "Casey", "Devon", "Emery", "Finley", "Harper", "Jordan", "Kendall", "Morgan",
    "Reese", "Sawyer",
];

const LAST_NAMES: [&str; 10] = [
    "Abernathy", "Calloway", "Delacroix", "Ellsworth", "Fairbanks", "Hollister", "Kingsley",
    "Lockhart", "Merriweather", "Pemberton",
];

const EMAIL_DOMAINS: [&str; 3] = ["example.com", "example.net", "example.org"];

const STREETS: [&str; 6] = [
    "Maple Avenue", "Oak Street", "Cedar Lane", "Birch Road", "Willow Court", "Elm Drive",
];

const CITIES: [&str; 5] = ["Springfield", "Riverton", "Fairview", "Greenville", "Lakewood"];

const SUFFIX_LEN: usize = 4;

/// Counter values tried before settling for a base that spells a vault value.
const MAX_BASE_ATTEMPTS: usize = 1_000;

/// Produces the next unused nonce for `category` and marks it used in the
/// session. The caller records the PII mapping.
///
/// Bases that canonicalize to a reserved vault value, whole or word by word,
/// are skipped: a nonce must never reveal another protected value.
pub fn generate_nonce(category: PiiCategory, session: &mut RedactionSession) -> String {
    let mut base = base_nonce(category, session.next_counter(category));
    for _ in 1..MAX_BASE_ATTEMPTS {
        if !session.resembles_reserved_pii(&base) {
            break;
        }
        debug!("Skipping {} nonce that matches a vault value.", category);
        base = base_nonce(category, session.next_counter(category));
    }

    let mut rng = rand::rng();
    let mut nonce = base.clone();
    if session.resembles_reserved_pii(&base) {
        warn!("Every {} stand-in tried matches a vault value; adding a suffix.", category);
        nonce = format!("{}_{}", base, random_suffix(&mut rng));
    }
    while session.is_nonce_used(&nonce) {
        nonce = format!("{}_{}", base, random_suffix(&mut rng));
    }
    if nonce != base {
        debug!("Nonce '{}' unavailable; issued '{}' instead.", base, nonce);
    }

    session.mark_used(&nonce);
    nonce
}

/// The collision-free-by-construction value for the `counter`-th nonce.
fn base_nonce(category: PiiCategory, counter: u32) -> String {
    let n = counter as usize;
    match category {
        PiiCategory::Name => format!(
            "{} {}",
            FIRST_NAMES[n % FIRST_NAMES.len()],
            LAST_NAMES[(n / FIRST_NAMES.len()) % LAST_NAMES.len()]
        ),
        PiiCategory::Email => format!(
            "{}{}@{}",
            FIRST_NAMES[n % FIRST_NAMES.len()].to_lowercase(),
            n + 1,
            EMAIL_DOMAINS[n % EMAIL_DOMAINS.len()]
        ),
        PiiCategory::Phone => format!("555-01{:02}", n % 100),
        PiiCategory::Ssn => {
            let serial = n + 1;
            format!("900-{:02}-{:04}", (serial / 10_000) % 100, serial % 10_000)
        }
        PiiCategory::Address => format!(
            "{} {}, {}",
            100 + n,
            STREETS[n % STREETS.len()],
            CITIES[(n / STREETS.len()) % CITIES.len()]
        ),
        PiiCategory::Custom => format!("[REDACTED-{:03}]", n + 1),
    }
}

fn random_suffix<R: Rng>(rng: &mut R) -> String {
    (0..SUFFIX_LEN)
        .map(|_| char::from_digit(rng.random_range(0..36u32), 36).unwrap_or('0'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::collections::HashSet;

    #[test]
    fn phone_nonces_stay_in_reserved_block() {
        let shape = Regex::new(r"^555-01\d\d(_[0-9a-z]{4})*$").unwrap();
        let mut session = RedactionSession::new();
        for _ in 0..250 {
            let nonce = generate_nonce(PiiCategory::Phone, &mut session);
            assert!(shape.is_match(&nonce), "bad phone nonce {nonce}");
            assert!(nonce.starts_with("555-01"));
        }
    }

    #[test]
    fn ssn_nonces_are_never_issued_numbers() {
        let shape = Regex::new(r"^900-\d\d-\d{4}$").unwrap();
        let mut session = RedactionSession::new();
        for _ in 0..50 {
            let nonce = generate_nonce(PiiCategory::Ssn, &mut session);
            assert!(shape.is_match(&nonce), "bad ssn nonce {nonce}");
            assert!(!crate::validators::is_issuable_ssn(&nonce));
        }
    }

    #[test]
    fn names_vary_in_both_dimensions() {
        let mut session = RedactionSession::new();
        let first = generate_nonce(PiiCategory::Name, &mut session);
        let second = generate_nonce(PiiCategory::Name, &mut session);
        assert_eq!(first, "Avery Abernathy");
        assert_eq!(second, "Blair Abernathy");
        assert_eq!(base_nonce(PiiCategory::Name, 12), "Avery Calloway");
    }

    #[test]
    fn category_shapes() {
        assert_eq!(base_nonce(PiiCategory::Email, 0), "avery1@example.com");
        assert_eq!(base_nonce(PiiCategory::Address, 0), "100 Maple Avenue, Springfield");
        assert_eq!(base_nonce(PiiCategory::Custom, 6), "[REDACTED-007]");
        assert_eq!(base_nonce(PiiCategory::Phone, 7), "555-0107");
        assert_eq!(base_nonce(PiiCategory::Ssn, 0), "900-00-0001");
    }

    #[test]
    fn collisions_get_a_random_suffix() {
        let mut session = RedactionSession::new();
        session.reserve("555-0100");
        let nonce = generate_nonce(PiiCategory::Phone, &mut session);
        let shape = Regex::new(r"^555-0100_[0-9a-z]{4}$").unwrap();
        assert!(shape.is_match(&nonce), "got {nonce}");
        assert!(session.is_nonce_used(&nonce));
    }

    #[test]
    fn nonces_are_unique_within_a_session() {
        let mut session = RedactionSession::new();
        let mut seen = HashSet::new();
        for category in PiiCategory::ALL {
            for _ in 0..150 {
                assert!(seen.insert(generate_nonce(category, &mut session)));
            }
        }
    }

    #[test]
    fn bases_matching_vault_values_are_skipped() {
        let mut session = RedactionSession::new();
        session.reserve_pii("averyabernathy");
        session.reserve_pii("blair");
        let nonce = generate_nonce(PiiCategory::Name, &mut session);
        assert_eq!(nonce, "Casey Abernathy");
        assert_eq!(session.counter(PiiCategory::Name), 3);
    }
}
