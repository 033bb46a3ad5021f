//! Fetch a page over HTTP and reduce it to its title and visible text.

use anyhow::{anyhow, Context, Result};
use scraper::{Html, Node, Selector};
use tracing::{debug, info};
use url::Url;

/// Elements whose text content is never shown to a reader.
const HIDDEN_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// A fetched and parsed page.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    /// Trimmed `<title>` text, or the URL when the page has none.
    pub title: String,
    /// Concatenated visible text nodes.
    pub text: String,
}

impl Page {
    /// Parse an HTML document already in memory.
    pub fn from_html(url: &str, html: &str) -> Result<Self> {
        let document = Html::parse_document(html);

        let title_selector =
            Selector::parse("title").map_err(|e| anyhow!("invalid title selector: {e:?}"))?;
        let title = document
            .select(&title_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| url.to_string());

        Ok(Self {
            url: url.to_string(),
            title,
            text: visible_text(&document),
        })
    }
}

/// Text of every node outside [`HIDDEN_ELEMENTS`], joined without separators.
fn visible_text(document: &Html) -> String {
    let mut text = String::new();
    for node in document.root_element().descendants() {
        let Node::Text(chunk) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            text.push_str(chunk);
        }
    }
    text
}

/// Fetch a single page (async). The body is decoded as UTF-8 whatever the server declares.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<Page> {
    let parsed = Url::parse(url).with_context(|| format!("invalid URL {url}"))?;
    info!(url, "fetching page");
    let response = client
        .get(parsed)
        .send()
        .await
        .with_context(|| format!("fetching {url}"))?
        .error_for_status()
        .with_context(|| format!("fetching {url}"))?;
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("reading body of {url}"))?;
    debug!(url, bytes = bytes.len(), "page downloaded");

    let html = String::from_utf8_lossy(&bytes);
    Page::from_html(url, &html)
}

/// Fetch pages one after another, in the order given.
pub async fn fetch_pages(urls: &[&str]) -> Result<Vec<Page>> {
    let client = reqwest::Client::new();
    let mut pages = Vec::with_capacity(urls.len());
    for url in urls {
        pages.push(fetch_page(&client, url).await?);
    }
    Ok(pages)
}

/// Blocking wrapper around [`fetch_pages`].
pub fn fetch(urls: &[&str]) -> Result<Vec<Page>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(fetch_pages(urls))
}
