use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Reduces a value to the canonical form every match runs against:
/// diacritics folded to ASCII, case dropped, and everything that is not an
/// ASCII letter or digit removed.
///
/// `"Nicolás Maduro"` becomes `"nicolasmaduro"`. Idempotent.
pub fn precompute(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Trims surrounding whitespace and collapses internal runs to a single
/// space.
pub fn chomp(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turns an inverted individual name like `"MADURO MOROS, Nicolas"` into
/// `"Nicolas MADURO MOROS"`.
///
/// Only names of individuals with exactly one comma are reordered, so
/// corporate names such as `"ACME, LTD."` pass through untouched when they
/// are not typed as individuals, and multi-comma names are left alone.
pub fn reorder_sdn_name(name: &str, sdn_type: &str) -> String {
    if !sdn_type.eq_ignore_ascii_case("individual") || name.matches(',').count() != 1 {
        return name.to_owned();
    }
    let Some((last, first)) = name.split_once(',') else {
        return name.to_owned();
    };
    format!("{} {}", first.trim(), last.trim())
}
