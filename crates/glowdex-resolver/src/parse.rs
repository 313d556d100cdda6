//! Low-level string scanning for the embedded quantity token.
//!
//! Product names embed their size or volume directly in the text
//! (`"Crema Hidratante 50ml"`, `"Jabón 90 gr"`). This module finds that
//! token with manual byte scanning rather than `regex`, keeping the
//! matching rules explicit and the crate dependency-light.

/// Recognized unit spellings, tried in order at each candidate position,
/// paired with their canonical form. `gr` is a legacy spelling of grams
/// and must be tried before `g`.
const UNITS: &[(&str, &str)] = &[
    ("ml", "ml"),
    ("gr", "g"),
    ("kg", "kg"),
    ("oz", "oz"),
    ("g", "g"),
];

/// Finds the first `<digits><optional spaces><unit>` occurrence in
/// `fragment` and returns it as `"<digits> <unit>"` with the unit
/// canonicalized (`gr` → `g`).
///
/// The unit must end at a token boundary, so prose words that merely
/// start with a unit spelling (`"500 gramos"`) never match. Only the
/// first occurrence is used; multi-size text takes the first as
/// canonical, a deliberate precision trade-off.
///
/// Returns `None` when no quantity token is present.
#[must_use]
pub fn extract_volume(fragment: &str) -> Option<String> {
    let lower = fragment.to_lowercase();
    let bytes = lower.as_bytes();
    let len = bytes.len();
    let mut i = 0usize;

    while i < len {
        if bytes[i].is_ascii_digit() {
            let num_start = i;
            while i < len && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let num_end = i;

            let mut scan = i;
            while scan < len && bytes[scan] == b' ' {
                scan += 1;
            }

            if let Some(unit) = match_unit(&lower[scan..]) {
                return Some(format!("{} {unit}", &lower[num_start..num_end]));
            }
            // No unit after this run; keep scanning from the next byte.
        } else {
            i += 1;
        }
    }

    None
}

/// Matches a unit spelling at the start of `s`, requiring a token
/// boundary right after it. Input must be pre-lowercased.
fn match_unit(s: &str) -> Option<&'static str> {
    for (spelling, canonical) in UNITS {
        if let Some(rest) = s.strip_prefix(spelling) {
            if rest.bytes().next().is_none_or(|b| !b.is_ascii_alphanumeric()) {
                return Some(canonical);
            }
        }
    }
    None
}
