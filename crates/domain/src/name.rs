//! Canonical domain names.
//!
//! Every component keys cache lookups and verdicts by the canonical
//! form produced here, so normalization happens exactly once per
//! input: on the way in, never on stored data.

/// Normalize a raw query name to its canonical form: lowercase, with
/// exactly one trailing root dot stripped if present.
///
/// Total and idempotent; an empty input yields an empty output.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.strip_suffix('.').unwrap_or(raw);
    trimmed.to_ascii_lowercase()
}

/// True when `raw` is already in canonical form.
pub fn is_canonical(raw: &str) -> bool {
    !raw.ends_with('.') && !raw.bytes().any(|b| b.is_ascii_uppercase())
}
