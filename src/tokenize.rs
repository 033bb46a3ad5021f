//! Text to word tokenization: maximal word-character runs, lowercased.

use regex::Regex;
use std::sync::OnceLock;

use crate::stopwords::StopwordFilter;

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"))
}

/// Split text into runs of word characters (letters, digits, underscore), lowercased.
/// Punctuation and whitespace never appear in the output.
pub fn tokenize(text: &str) -> Vec<String> {
    word_regex()
        .find_iter(text)
        .map(|m| {
            // lowercasing can introduce combining marks ("İ" -> "i\u{307}")
            m.as_str()
                .to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect()
        })
        .collect()
}

/// [`tokenize`], then drop every stopword. Source order is kept.
pub fn filtered_tokens(text: &str, stopwords: &StopwordFilter) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|word| !stopwords.is_stopword(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let tokens = tokenize("\"Mr. Darcy,\" said she -- 'is not handsome!'");
        assert_eq!(tokens, vec!["mr", "darcy", "said", "she", "is", "not", "handsome"]);
    }

    #[test]
    fn test_tokenize_keeps_digits_and_underscores() {
        let tokens = tokenize("Chapter 12: snake_case x2");
        assert_eq!(tokens, vec!["chapter", "12", "snake_case", "x2"]);
    }

    #[test]
    fn test_tokenize_splits_contractions() {
        assert_eq!(tokenize("Don't"), vec!["don", "t"]);
    }

    #[test]
    fn test_tokens_are_pure_word_runs() {
        let text = "Emma Woodhouse, handsome, clever, and rich; with a comfortable home\n\t& happy disposition...";
        for token in tokenize(text) {
            assert!(!token.is_empty());
            assert!(token.chars().all(|c| c.is_alphanumeric() || c == '_'), "{token:?}");
        }
    }

    #[test]
    fn test_tokenize_splits_on_connectors_and_marks() {
        assert_eq!(tokenize("a\u{203F}b"), vec!["a", "b"]);
        assert_eq!(tokenize("cafe\u{0301} au lait"), vec!["cafe", "au", "lait"]);
        assert_eq!(tokenize("Café Noël"), vec!["café", "noël"]);
        assert_eq!(tokenize("İstanbul"), vec!["istanbul"]);
    }

    #[test]
    fn test_non_ascii_tokens_are_pure_word_runs() {
        let text = "na\u{0308}ive\u{200D}co\u{2040}op \u{FE4F}mot\u{0301}s İI ½ x\u{203F}y";
        for token in tokenize(text) {
            assert!(!token.is_empty());
            assert!(token.chars().all(|c| c.is_alphanumeric() || c == '_'), "{token:?}");
        }
    }

    #[test]
    fn test_tokenize_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,.;:!? -- ").is_empty());
    }

    #[test]
    fn test_filtered_tokens_example() {
        let stopwords = StopwordFilter::english();
        let tokens = filtered_tokens("The quick the Fox the fox", &stopwords);
        assert_eq!(tokens, vec!["quick", "fox", "fox"]);
    }

    #[test]
    fn test_filtered_tokens_drop_modals() {
        let stopwords = StopwordFilter::english();
        let tokens = filtered_tokens("She Would walk, but she MUST ride", &stopwords);
        assert_eq!(tokens, vec!["walk", "ride"]);
    }
}
