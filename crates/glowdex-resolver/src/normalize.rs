//! Text canonicalization underneath every identity decision.
//!
//! Store feeds disagree on casing, accents, and punctuation for the same
//! physical product, so every comparison in this crate happens on the
//! output of [`normalize`]: lowercase ASCII letters, digits, and single
//! spaces, nothing else. Keeping the alphabet this small is also what
//! guarantees the `__` key delimiter can never collide with segment
//! content.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize free text: lowercase, strip diacritics (NFD decomposition,
/// drop combining marks), replace anything outside `[a-z0-9]` with a
/// space, collapse whitespace runs, trim.
///
/// Pure and total — any input produces a (possibly empty) string.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.to_lowercase().nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            // Whitespace and punctuation alike collapse into one separator.
            pending_space = true;
        }
    }

    out
}

/// Remove a leading brand-name prefix from a product name.
///
/// Both inputs are normalized first; the brand is stripped only when the
/// name starts with `normalized(brand) + " "`. A brand occurring mid-name
/// is never stripped: a false-positive strip corrupts the canonical key
/// worse than a missed strip.
#[must_use]
pub fn strip_brand(name: &str, brand: Option<&str>) -> String {
    let name = normalize(name);
    let Some(brand) = brand else {
        return name;
    };
    let brand = normalize(brand);
    if brand.is_empty() {
        return name;
    }

    match name.strip_prefix(&format!("{brand} ")) {
        Some(remainder) => remainder.to_string(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // normalize
    // -----------------------------------------------------------------------

    #[test]
    fn lowercases() {
        assert_eq!(normalize("SKINCARE"), "skincare");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Skíncare"), "skincare");
        assert_eq!(normalize("máscara de pestañas"), "mascara de pestanas");
    }

    #[test]
    fn case_and_accent_forms_converge() {
        assert_eq!(normalize("Skíncare"), normalize("SKINCARE"));
    }

    #[test]
    fn punctuation_becomes_a_single_space() {
        assert_eq!(normalize("labial - rojo (mate)"), "labial rojo mate");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(normalize("  crema \t hidratante \n 50ml  "), "crema hidratante 50ml");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(normalize("Nº 5 / 100ml"), "n 5 100ml");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn symbol_only_input_is_empty() {
        assert_eq!(normalize("¡¿!?***"), "");
    }

    // -----------------------------------------------------------------------
    // strip_brand
    // -----------------------------------------------------------------------

    #[test]
    fn strips_leading_brand() {
        assert_eq!(strip_brand("MAC Labial Rojo", Some("MAC")), "labial rojo");
    }

    #[test]
    fn strip_is_accent_and_case_insensitive() {
        assert_eq!(strip_brand("L'Oréal Crema Día", Some("l'oreal")), "crema dia");
    }

    #[test]
    fn brand_mid_name_is_never_stripped() {
        assert_eq!(
            strip_brand("Labial MAC Rojo", Some("MAC")),
            "labial mac rojo"
        );
    }

    #[test]
    fn name_equal_to_brand_is_kept() {
        // No trailing space after the prefix, so nothing is stripped.
        assert_eq!(strip_brand("MAC", Some("MAC")), "mac");
    }

    #[test]
    fn missing_brand_never_strips() {
        assert_eq!(strip_brand("MAC Labial Rojo", None), "mac labial rojo");
    }

    #[test]
    fn empty_brand_never_strips() {
        assert_eq!(strip_brand("MAC Labial Rojo", Some("   ")), "mac labial rojo");
    }

    #[test]
    fn unrelated_brand_leaves_name_untouched() {
        assert_eq!(strip_brand("Labial Rojo", Some("MAC")), "labial rojo");
    }
}
