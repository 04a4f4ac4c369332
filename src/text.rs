use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Identifiers the bank prepends or appends to merchant names
///
/// Each one is removed once, case-sensitively, in this order. `DK ` must come after `MCDK `.
pub const NOISE_TOKENS: &[&str] = &[
    "MCDK ", "DK ", "NETS*", "PAY*", "Klarna*", "A/S", "Aps",
];

/// Mis-decoded apostrophe found in some exports
const GRAVE_GLYPH: char = 'À';

/// Cleans the free-text description of a statement line
#[derive(Debug, Clone, Copy)]
pub struct TextCleaner<'a> {
    noise_tokens: &'a [&'a str],
}

impl Default for TextCleaner<'static> {
    fn default() -> Self {
        Self::new(NOISE_TOKENS)
    }
}

impl<'a> TextCleaner<'a> {
    pub fn new(noise_tokens: &'a [&'a str]) -> Self {
        Self { noise_tokens }
    }

    pub fn clean(&self, raw: &str) -> String {
        let text = collapse_whitespace(raw);
        let text = strip_tokens(&text, self.noise_tokens);
        let text = repair_grave_glyph(&text);
        let text = normalize_quotes(&text);
        title_case(&text)
    }
}

/// Trims the text and turns every run of whitespace into a single space
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn strip_tokens(s: &str, tokens: &[&str]) -> String {
    tokens
        .iter()
        .fold(s.to_owned(), |text, token| text.replacen(token, "", 1))
        .trim()
        .to_owned()
}

pub fn repair_grave_glyph(s: &str) -> String {
    s.replacen(GRAVE_GLYPH, "'", 1)
}

/// `""` becomes `"`, surrounding quotes are dropped and the rest become apostrophes
pub fn normalize_quotes(s: &str) -> String {
    let collapsed = s.replace("\"\"", "\"");
    let unwrapped = collapsed.strip_prefix('"').unwrap_or(&collapsed);
    let unwrapped = unwrapped.strip_suffix('"').unwrap_or(unwrapped);
    unwrapped.replace('"', "'")
}

/// Title-cases text written entirely in upper case, leaves anything else alone
///
/// Digits and punctuation have no case, so `NETTO 1234` counts as upper case.
pub fn title_case(s: &str) -> String {
    static WORD_START_REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\b\w").expect("regex"));

    let trimmed = s.trim();
    if trimmed != trimmed.to_uppercase() {
        return s.to_owned();
    }
    WORD_START_REGEX
        .replace_all(&s.to_lowercase(), |caps: &Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}
