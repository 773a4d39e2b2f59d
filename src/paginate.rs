use reqwest::Client;
use scraper::Html;
use tokio::task::spawn_blocking;

use crate::parse::create_selector;
use crate::request::request_page_html;
use crate::{Error, Result};

/// Splits a thread url of the form `<base>/page-<n>` into the base url and
/// the starting page number.
pub(crate) fn split_start_url(url: &str) -> Result<(String, usize)> {
    let (base, page) = url
        .rsplit_once("/page-")
        .ok_or_else(|| Error::MissingPageSuffix(url.into()))?;
    let first_page = page
        .parse()
        .map_err(|_| Error::MissingPageSuffix(url.into()))?;
    Ok((base.to_string(), first_page))
}

/// Fetches the starting page and scans its paginator for the highest page
/// number. A thread without a paginator is a single-page thread.
pub(crate) async fn resolve_last_page(
    client: &Client,
    url: &str,
    first_page: usize,
) -> Result<usize> {
    let html = request_page_html(client, url).await?;
    let last = spawn_blocking(move || last_page_from_html(&html)).await??;
    Ok(last.unwrap_or(first_page))
}

/// Maximum integer among the paginator's link texts, ignoring the
/// "Next"-style controls.
fn last_page_from_html(html: &str) -> Result<Option<usize>> {
    let doc = Html::parse_document(html);
    let nav_selector = create_selector("ul.pageNav-main a")?;

    Ok(doc
        .select(&nav_selector)
        .filter_map(|a| a.text().collect::<String>().trim().parse().ok())
        .max())
}
