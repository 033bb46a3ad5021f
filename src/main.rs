//! Word frequency comparison of "Emma" and "Pride and Prejudice".

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use word_freq_compare::compare_freq;
use word_freq_compare::config::{Config, EMMA_URL, PRIDE_AND_PREJUDICE_URL};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    setup_logging();

    let config = Config::default();
    let comparison = compare_freq(EMMA_URL, PRIDE_AND_PREJUDICE_URL, &config)?;

    info!("{:<16} {:>8} {:>8}", "word", "first", "second");
    for row in &comparison.rows {
        info!("{:<16} {:>8} {:>8}", row.word, row.counts[0], row.counts[1]);
    }
    info!(
        "Compared {} words of {:?} and {:?}, chart saved to {}",
        comparison.rows.len(),
        comparison.titles[0],
        comparison.titles[1],
        config.chart_path
    );
    Ok(())
}
