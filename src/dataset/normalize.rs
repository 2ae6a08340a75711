// src/dataset/normalize.rs

/// Raw location codes that the listing source uses in place of a city name.
const LOCATION_ALIASES: &[(&str, &str)] = &[("Kpr", "Tri-Cities")];

/// Word-title casing: a letter is upper-cased when it follows a non-letter
/// (or starts the string), every other letter is lower-cased.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;

    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

/// Title-cases a location and resolves known aliases.
pub fn canonical_location(raw: &str) -> String {
    let titled = title_case(raw.trim());

    LOCATION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == titled)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(titled)
}
