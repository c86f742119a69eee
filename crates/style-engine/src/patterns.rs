//! Token patterns shared by the lexical matchers

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Words for spelling checks: letters plus embedded apostrophes
    pub static ref WORD_PATTERN: Regex = Regex::new(r"\b[A-Za-z']+\b").unwrap();

    /// Purely alphabetic tokens for the capitalization heuristic
    pub static ref ALPHA_TOKEN_PATTERN: Regex = Regex::new(r"\b[A-Za-z]+\b").unwrap();
}

/// Case-insensitive whole-word regex source for a literal phrase
pub fn whole_word_pattern(phrase: &str) -> String {
    format!(r"(?i)\b{}\b", regex::escape(phrase.trim()))
}

/// True when every letter is uppercase (tokens are ASCII alphabetic)
pub fn is_all_caps(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_uppercase())
}

pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// Carry the leading capital of `source` over to a suggested spelling
pub fn match_leading_case(source: &str, suggestion: &str) -> String {
    let starts_upper = source.chars().next().map_or(false, |c| c.is_uppercase());
    if !starts_upper {
        return suggestion.to_string();
    }
    if is_all_caps(source) && source.len() > 1 {
        return suggestion.to_uppercase();
    }
    let mut chars = suggestion.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
