//! Word frequency distribution over filtered tokens.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fetch::Page;
use crate::stopwords::StopwordFilter;
use crate::tokenize;

/// Word -> occurrence count. Remembers the order in which words were first seen,
/// which breaks ties in [`FreqDist::most_common`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreqDist {
    counts: HashMap<String, u32>,
    /// Distinct words in first-encounter order.
    order: Vec<String>,
}

impl FreqDist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dist = Self::new();
        for token in tokens {
            dist.add(token.into());
        }
        dist
    }

    pub fn add(&mut self, word: String) {
        match self.counts.get_mut(&word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.clone(), 1);
                self.order.push(word);
            }
        }
    }

    /// Count for `word`, 0 when absent.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens counted.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Up to `n` (word, count) pairs, count descending. Equal counts keep first-encounter order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .order
            .iter()
            .map(|word| (word.as_str(), self.counts[word]))
            .collect();
        // stable sort keeps first-encounter order among ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// (word, count) pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.order.iter().map(|word| (word.as_str(), self.counts[word]))
    }
}

/// Frequency distribution of a page's visible text after tokenizing and stopword removal.
pub fn word_freq(page: &Page, stopwords: &StopwordFilter) -> FreqDist {
    let tokens = tokenize::filtered_tokens(&page.text, stopwords);
    let dist = FreqDist::from_tokens(tokens);
    debug!(
        url = %page.url,
        tokens = dist.total(),
        distinct = dist.len(),
        "frequency distribution built"
    );
    dist
}
