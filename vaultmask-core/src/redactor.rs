// vaultmask-core/src/redactor.rs
//! Applies matches to produce redacted text, and reverses the substitution.
//!
//! `redact` is the only place a session is mutated. `restore` trusts that its
//! input carries nonces issued by the same session and does no re-matching.
//!
//! License: MIT OR APACHE 2.0

use daachorse::{DoubleArrayAhoCorasick, DoubleArrayAhoCorasickBuilder, MatchKind};
use log::{debug, warn};

use crate::errors::VaultmaskError;
use crate::matcher::find_pii_matches;
use crate::nonce::generate_nonce;
use crate::preparer::CanonicalPiiEntry;
use crate::redaction_match::{log_substitution_debug, PiiMatch};
use crate::session::RedactionSession;

/// Replaces every occurrence of a prepared entry in `text` with its nonce.
///
/// Fails with [`VaultmaskError::Unconfigured`] when `prepared` is empty so
/// that an empty vault can never be mistaken for "nothing to redact".
pub fn redact(
    text: &str,
    prepared: &[CanonicalPiiEntry],
    session: &mut RedactionSession,
) -> Result<String, VaultmaskError> {
    if prepared.is_empty() {
        return Err(VaultmaskError::Unconfigured);
    }
    reserve_vault_values(prepared, session);
    let matches = find_pii_matches(text, prepared);
    Ok(apply_matches(text, &matches, session))
}

/// Marks every prepared value as off limits for nonce generation.
pub(crate) fn reserve_vault_values(prepared: &[CanonicalPiiEntry], session: &mut RedactionSession) {
    for entry in prepared {
        session.reserve_pii(entry.canonical());
    }
}

/// Splices nonces into `text` for already-located matches, left to right.
/// `matches` must be sorted by `original_start`.
pub fn apply_matches(text: &str, matches: &[PiiMatch], session: &mut RedactionSession) -> String {
    let mut redacted = String::with_capacity(text.len());
    let mut cursor = 0usize;

    for m in matches {
        if m.original_start < cursor {
            // Two candidates drawn from one source chunk (e.g. a ligature).
            if m.original_end <= cursor {
                debug!("Skipping match at {} inside previous span ending at {}.", m.original_start, cursor);
                continue;
            }
            // The covered bytes were already replaced; the tail must not leak.
            debug!("Match at {} overlaps previous span ending at {}; replacing its tail.", m.original_start, cursor);
            redacted.push_str(&nonce_for_match(m, session));
            cursor = m.original_end;
            continue;
        }
        redacted.push_str(&text[cursor..m.original_start]);
        redacted.push_str(&nonce_for_match(m, session));
        cursor = m.original_end;
    }

    redacted.push_str(&text[cursor..]);
    redacted
}

/// The session's nonce for this match's canonical value, generating and
/// recording one on first sight.
pub(crate) fn nonce_for_match(m: &PiiMatch, session: &mut RedactionSession) -> String {
    if let Some(existing) = session.nonce_for(m.pii.canonical()) {
        return existing.to_string();
    }
    let nonce = generate_nonce(m.pii.category(), session);
    session.record(m.pii.canonical(), &nonce, m.pii.value());
    log_substitution_debug(module_path!(), m.pii.category(), &m.original_text, &nonce);
    nonce
}

/// Replaces every nonce known to `session` with its original value.
///
/// Longer nonces win over shorter ones that are their prefix, so
/// `555-0100_k2x9` is never half-restored through `555-0100`.
pub fn restore(text: &str, session: &RedactionSession) -> String {
    if text.is_empty() || session.is_empty() {
        return text.to_string();
    }

    let mut pairs: Vec<(&str, &str)> = session.pairs().collect();
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

    let automaton: Result<DoubleArrayAhoCorasick<usize>, _> = DoubleArrayAhoCorasickBuilder::new()
        .match_kind(MatchKind::LeftmostLongest)
        .build(pairs.iter().map(|(nonce, _)| *nonce));

    match automaton {
        Ok(pma) => {
            let mut restored = String::with_capacity(text.len());
            let mut cursor = 0usize;
            for m in pma.leftmost_find_iter(text) {
                restored.push_str(&text[cursor..m.start()]);
                restored.push_str(pairs[m.value()].1);
                cursor = m.end();
            }
            restored.push_str(&text[cursor..]);
            restored
        }
        Err(e) => {
            warn!("Falling back to sequential nonce replacement: {}", e);
            pairs
                .iter()
                .fold(text.to_string(), |acc, (nonce, original)| acc.replace(nonce, original))
        }
    }
}
