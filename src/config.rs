//! Fixed run parameters. There are no flags or config files; everything lives here.

/// Project Gutenberg HTML edition of "Pride and Prejudice".
pub const PRIDE_AND_PREJUDICE_URL: &str = "https://www.gutenberg.org/files/1342/1342-h/1342-h.htm";
/// Project Gutenberg HTML edition of "Emma".
pub const EMMA_URL: &str = "https://www.gutenberg.org/files/158/158-h/158-h.htm";

/// Most common words taken from each side before the union.
pub const TOP_N: usize = 25;

const CHART_WIDTH: u32 = 1600;
const CHART_HEIGHT: u32 = 800;
const CHART_PATH: &str = "word_frequency.svg";
const TABLE_PATH: &str = "word_frequency.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub top_n: usize,
    /// Chart size in pixels (width, height).
    pub chart_size: (u32, u32),
    pub chart_path: String,
    pub table_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_n: TOP_N,
            chart_size: (CHART_WIDTH, CHART_HEIGHT),
            chart_path: CHART_PATH.to_string(),
            table_path: TABLE_PATH.to_string(),
        }
    }
}
