// Text normalization for duplicate detection and for display

const STRIPPED_PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ';', ':', '\'', '"'];

/// Comparison key: lowercase, trimmed, single-spaced, without `. , ! ? ; : ' "`.
///
/// Diacritics are kept, so "cafe" and "café" stay distinct.
pub fn normalize_for_comparison(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Display form: trimmed, first character uppercased, the rest lowercased.
pub fn canonicalize_for_display(text: &str) -> String {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => trimmed.to_string(),
    }
}
