use unicode_normalization::UnicodeNormalization;

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

/// Canonical comparison key for a country name or a guess.
///
/// Lower-cases, decomposes (NFD) and drops the combining diacritical marks, so
/// "Côte d'Ivoire" and "COTE D'IVOIRE" share a key. Punctuation is kept: the
/// alias table relies on parentheses and commas surviving.
#[must_use]
pub fn normalise(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[must_use]
pub fn normalise_optional(name: Option<&str>) -> String {
    name.map(normalise).unwrap_or_default()
}
