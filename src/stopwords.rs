//! English stopwords (NLTK list) plus the modal verbs that carry no signal when comparing novels.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Modal verbs added on top of the NLTK English list.
const MODALS: &[&str] = &["would", "could", "may", "might", "must"];

/// Lowercase stopword set. Lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The English list unioned with [`MODALS`].
    pub fn english() -> Self {
        let mut stopwords: HashSet<String> =
            get(LANGUAGE::English).iter().map(|s| s.to_string()).collect();
        stopwords.extend(MODALS.iter().map(|s| s.to_string()));
        Self { stopwords }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.stopwords.iter().map(String::as_str)
    }
}
