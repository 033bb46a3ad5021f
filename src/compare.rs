//! Side-by-side comparison of the most common words on two pages.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chart;
use crate::config::Config;
use crate::fetch;
use crate::freq::{self, FreqDist};
use crate::stopwords::StopwordFilter;

/// One word and its raw count in each source (0 when absent there).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub word: String,
    pub counts: [u32; 2],
}

/// Combined table over the union of both sources' top words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Series labels, one per source.
    pub titles: [String; 2],
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|row| row.word.as_str())
    }

    /// Largest count on either side, 0 for an empty table.
    pub fn max_count(&self) -> u32 {
        self.rows
            .iter()
            .flat_map(|row| row.counts)
            .max()
            .unwrap_or(0)
    }
}

/// Union of the `top_n` most common words of `one` then `two`, with both counts per word.
/// Words from `one` come first in rank order; words only in `two`'s top list follow.
pub fn compare_dists(one: &FreqDist, two: &FreqDist, titles: [String; 2], top_n: usize) -> Comparison {
    let mut words: Vec<&str> = one.most_common(top_n).into_iter().map(|(w, _)| w).collect();
    for (word, _) in two.most_common(top_n) {
        if !words.contains(&word) {
            words.push(word);
        }
    }

    let rows = words
        .into_iter()
        .map(|word| ComparisonRow {
            word: word.to_string(),
            counts: [one.count(word), two.count(word)],
        })
        .collect();

    Comparison { titles, rows }
}

/// Fetch both URLs once each, build their distributions, and compare them.
pub fn compare_urls(url1: &str, url2: &str, top_n: usize) -> Result<Comparison> {
    let pages = fetch::fetch(&[url1, url2])?;
    let stopwords = StopwordFilter::english();
    let [one, two] = [&pages[0], &pages[1]].map(|page| freq::word_freq(page, &stopwords));

    let comparison = compare_dists(
        &one,
        &two,
        [pages[0].title.clone(), pages[1].title.clone()],
        top_n,
    );
    info!(
        words = comparison.rows.len(),
        first = %comparison.titles[0],
        second = %comparison.titles[1],
        "comparison table built"
    );
    Ok(comparison)
}

/// Full run: compare the two pages, then write the chart and the table to disk.
pub fn compare_freq(url1: &str, url2: &str, config: &Config) -> Result<Comparison> {
    let comparison = compare_urls(url1, url2, config.top_n)?;

    let svg = chart::render_svg(&comparison, config.chart_size)?;
    write_output(Path::new(&config.chart_path), &svg)?;

    let json = chart::to_json(&comparison)?;
    write_output(Path::new(&config.table_path), &json)?;

    Ok(comparison)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "output written");
    Ok(())
}
