//! Gloss tokenization for overlap measures

use std::collections::HashSet;
use std::sync::OnceLock;

/// English and Romanian function words ignored when comparing glosses
pub const STOP_WORDS: &[&str] = &[
    // English
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
    "can", "of", "in", "to", "for", "with", "on", "at", "by", "from", "as", "into", "through",
    "during", "before", "after", "above", "below", "between", "under", "again", "further",
    "then", "once", "here", "there", "when", "where", "why", "how", "all", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "just", "and", "but", "if", "or", "because", "while", "although", "this",
    "that", "these", "those", "it", "its", "i", "you", "he", "she", "we", "they", "what",
    "which", "who", "whom", "whose",
    // Romanian
    "un", "o", "una", "este", "sunt", "era", "fost", "fi", "fiind", "avea", "au", "de", "la",
    "cu", "pe", "pentru", "din", "ca", "prin", "despre", "spre", "intre", "sub", "peste",
    "dupa", "inainte", "aici", "acolo", "cand", "unde", "cum", "toti", "toate", "fiecare",
    "mai", "cel", "cea", "cei", "cele", "alt", "alta", "alti", "alte", "nici", "numai", "doar",
    "si", "dar", "daca", "sau", "aceasta", "acest", "aceste", "acestea", "el", "ea", "ei",
    "ele", "noi", "voi", "ce", "care", "cine", "cui",
];

/// Shortest token kept, in characters
pub const MIN_TOKEN_CHARS: usize = 3;

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

pub fn is_stop_word(word: &str) -> bool {
    stop_words().contains(word)
}

/// Lowercased letter runs of at least [`MIN_TOKEN_CHARS`] characters, stop
/// words removed
pub fn gloss_tokens(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_lowercase)
        .filter(|word| !is_stop_word(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_stop_words_dropped() {
        let tokens = gloss_tokens("The dog is an animal, kept by people for the hunt.");
        let mut sorted: Vec<&str> = tokens.iter().map(String::as_str).collect();
        sorted.sort();
        assert_eq!(sorted, vec!["animal", "dog", "hunt", "kept", "people"]);
    }

    #[test]
    fn test_romanian_text() {
        let tokens = gloss_tokens("Mamifer carnivor din familia canidelor, care latră");
        assert!(tokens.contains("mamifer"));
        assert!(tokens.contains("latră"));
        assert!(!tokens.contains("din"));
        assert!(!tokens.contains("care"));
    }

    #[test]
    fn test_empty_text() {
        assert!(gloss_tokens("").is_empty());
        assert!(gloss_tokens("a, b; 42").is_empty());
    }
}
