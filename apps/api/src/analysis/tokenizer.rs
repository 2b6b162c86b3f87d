//! Tokenizer — splits description text into meaningful lowercase words.

use std::sync::OnceLock;

use regex::Regex;

/// Tokens must be strictly longer than this many characters.
pub const MIN_TOKEN_CHARS: usize = 4;

/// Dutch and English stopwords excluded from term frequencies.
pub const STOPWORDS: &[&str] = &[
    "en", "de", "het", "een", "voor", "met", "van", "is", "op", "te", "worden", "we", "are",
    "with", "for", "you", "will", "your", "that", "this", "have", "been", "over", "niet", "aan",
];

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Joins descriptions with a single space and lowercases the result.
pub fn corpus_text<'a, I>(descriptions: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    descriptions
        .into_iter()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Returns the word tokens of `text` that are longer than [`MIN_TOKEN_CHARS`]
/// and not stopwords, in order of appearance.
///
/// A token is a maximal run of word characters (letters, digits, underscore).
/// The input is expected to be lowercased already (see [`corpus_text`]).
pub fn tokenize(text: &str) -> Vec<&str> {
    static WORD: OnceLock<Regex> = OnceLock::new();
    let re = WORD.get_or_init(|| Regex::new(r"\w+").unwrap());

    re.find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > MIN_TOKEN_CHARS && !is_stopword(w))
        .collect()
}
