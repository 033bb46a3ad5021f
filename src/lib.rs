//! Compare the most common words of two web pages and chart them side by side.
//!
//! Pipeline: fetch -> visible text -> tokenize -> drop stopwords -> count -> merge top words -> plot.

pub mod chart;
pub mod compare;
pub mod config;
pub mod fetch;
pub mod freq;
pub mod stopwords;
pub mod tokenize;

pub use compare::{compare_dists, compare_freq, compare_urls, Comparison, ComparisonRow};
pub use config::Config;
pub use fetch::Page;
pub use freq::{word_freq, FreqDist};
pub use stopwords::StopwordFilter;
