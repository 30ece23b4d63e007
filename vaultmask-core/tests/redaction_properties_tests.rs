// vaultmask-core/tests/redaction_properties_tests.rs
//! End-to-end behaviour of the redact -> external round trip -> restore flow.

use regex::Regex;

use vaultmask_core::{
    canonical_form, prepare_pii_entries, redact, restore, PiiCategory, PiiEntry, RedactionPipeline,
    RedactionSession, VaultConfig, VaultmaskError, NO_SESSION_WARNING, NO_VAULT_WARNING,
};

fn sample_entries() -> Vec<PiiEntry> {
    vec![
        PiiEntry::new(PiiCategory::Name, "Margaret Hamilton"),
        PiiEntry::new(PiiCategory::Email, "m.hamilton@draperlab.org"),
        PiiEntry::new(PiiCategory::Phone, "617-555-0199"),
        PiiEntry::new(PiiCategory::Ssn, "219-09-9999"),
        PiiEntry::new(PiiCategory::Address, "77 Massachusetts Ave"),
        PiiEntry::new(PiiCategory::Custom, "Apollo Guidance Computer"),
    ]
}

#[test]
fn round_trip_restores_the_original_text() {
    let prepared = prepare_pii_entries(&sample_entries());
    let text = "Margaret Hamilton (m.hamilton@draperlab.org, 617-555-0199) lives at \
                77 Massachusetts Ave. SSN 219-09-9999. Hamilton led the Apollo Guidance Computer work; \
                write to Margaret at draperlab.org.";
    let mut session = RedactionSession::new();

    let redacted = redact(text, &prepared, &mut session).unwrap();
    for secret in ["Margaret", "Hamilton", "hamilton", "draperlab", "617-555", "219-09", "Massachusetts", "Apollo"] {
        assert!(!redacted.contains(secret), "{secret} leaked into {redacted}");
    }
    assert_eq!(restore(&redacted, &session), text);
}

#[test]
fn nonces_are_stable_within_text_and_across_calls() {
    let prepared = prepare_pii_entries(&sample_entries());
    let mut session = RedactionSession::new();

    let first = redact("Ping 617-555-0199 then 617.555.0199", &prepared, &mut session).unwrap();
    let second = redact("Also (617) 555 0199", &prepared, &mut session).unwrap();

    assert_eq!(first, "Ping 555-0100 then 555-0100");
    assert_eq!(second, "Also (555-0100)");
}

#[test]
fn fullwidth_and_cyrillic_names_are_detected() {
    let prepared = prepare_pii_entries(&[PiiEntry::new(PiiCategory::Name, "John")]);
    for text in ["Hi \u{FF2A}ohn!", "Hi J\u{043E}hn!", "Hi \u{FF2A}\u{FF4F}\u{FF48}\u{FF4E}!"] {
        let mut session = RedactionSession::new();
        let redacted = redact(text, &prepared, &mut session).unwrap();
        assert_eq!(redacted, "Hi Avery Abernathy!", "input {text:?}");
    }
}

#[test]
fn word_boundaries_protect_longer_words() {
    let prepared = prepare_pii_entries(&[PiiEntry::new(PiiCategory::Name, "John")]);
    let mut session = RedactionSession::new();
    let redacted = redact("Contact Johnson about John", &prepared, &mut session).unwrap();
    assert_eq!(redacted, "Contact Johnson about Avery Abernathy");
}

#[test]
fn empty_vault_never_returns_the_input() {
    let mut session = RedactionSession::new();
    let secret = "Margaret Hamilton";
    assert!(matches!(redact(secret, &[], &mut session), Err(VaultmaskError::Unconfigured)));

    let mut pipeline = RedactionPipeline::new(VaultConfig::default()).unwrap();
    let out = pipeline.redact(secret);
    assert_eq!(out, NO_VAULT_WARNING);
    assert!(!out.contains(secret));
    assert_eq!(pipeline.restore("anything"), NO_SESSION_WARNING);
}

#[test]
fn reserved_ranges_hold_for_many_values() {
    let phone = Regex::new(r"^555-01\d\d$").unwrap();
    let ssn = Regex::new(r"^900-\d\d-\d{4}$").unwrap();

    let entries: Vec<PiiEntry> = (0..40)
        .flat_map(|i| {
            vec![
                PiiEntry::new(PiiCategory::Phone, format!("612-555-{:04}", 1000 + i)),
                PiiEntry::new(PiiCategory::Ssn, format!("123-45-{:04}", 1000 + i)),
            ]
        })
        .collect();
    let text: String = entries.iter().map(|e| e.value.clone()).collect::<Vec<_>>().join(" ; ");

    let mut pipeline = RedactionPipeline::new(VaultConfig::from_entries(entries)).unwrap();
    pipeline.redact(&text);
    let session = pipeline.active_session().unwrap();
    assert_eq!(session.len(), 80);
    for (nonce, original) in session.pairs() {
        if original.starts_with("612") {
            assert!(phone.is_match(nonce), "phone nonce {nonce}");
        } else {
            assert!(ssn.is_match(nonce), "ssn nonce {nonce}");
        }
    }
}

#[test]
fn canonical_form_is_idempotent_on_mixed_input() {
    let inputs = [
        "M\u{0430}rg\u{0430}ret  H\u{0430}milton",
        "\u{FF4D}.\u{FF48}\u{FF41}\u{FF4D}ilton@draperlab.org",
        "77 Massachusetts\u{00A0}Ave\u{200B}",
    ];
    for input in inputs {
        let once = canonical_form(input);
        assert_eq!(canonical_form(&once), once);
    }
    assert_eq!(canonical_form(inputs[0]), "margarethamilton");
}
