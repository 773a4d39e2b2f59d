use chrono::Local;
use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;
use url::Url;

use crate::{warn_time, Error, Result, NAME_STRIDE};

/// A coral name paired with the url of its sale image. Produced per page and
/// consumed right away by the downloader and the recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLink {
    pub name: String,
    pub url: String,
}

impl ImageLink {
    /// Final non-empty path segment of the image url, used as the local
    /// filename for both the downloaded file and the recorded row.
    pub fn file_name(&self) -> Option<String> {
        let parsed = Url::parse(&self.url).ok()?;
        let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
        Some(segment.to_string())
    }
}

/// Everything one message block contributes to a page.
struct BlockYield {
    image_urls: Vec<String>,
    names: Vec<String>,
}

/// Parses the page on a blocking thread and extracts every (name, image url)
/// pair posted by `poster` whose image `data-url` contains `image_loc`.
pub(crate) async fn scrape_page(
    html: String,
    page_url: Url,
    poster: String,
    image_loc: String,
) -> Result<Vec<ImageLink>> {
    let links =
        spawn_blocking(move || extract_image_links(&html, &page_url, &poster, &image_loc))
            .await??;
    Ok(links)
}

/// Walks the message blocks attributed to `poster`, collecting matching image
/// urls and bold text runs page-wide, then pairs them positionally. If the
/// name and image counts disagree the whole page yields nothing, so a post
/// with decorative bold text can't mislabel its neighbours.
fn extract_image_links(
    html: &str,
    page_url: &Url,
    poster: &str,
    image_loc: &str,
) -> Result<Vec<ImageLink>> {
    let doc = Html::parse_document(html);

    let message_selector = create_selector("div.message-userContent.lbContainer.js-lbContainer")?;
    let img_selector = create_selector("img")?;
    let bold_selector = create_selector("b")?;

    let mut images = Vec::new();
    let mut names = Vec::new();
    let mut skipped_blocks = 0usize;

    for block in doc.select(&message_selector) {
        // The lightbox caption leads with the author; match it as a literal
        // prefix, never as a pattern.
        let caption = block.value().attr("data-lb-caption-desc").unwrap_or_default();
        if !caption.starts_with(poster) {
            continue;
        }

        match scan_block(block, &img_selector, &bold_selector, page_url, image_loc) {
            Some(found) => {
                images.extend(found.image_urls);
                names.extend(found.names);
            }
            None => skipped_blocks += 1,
        }
    }

    if skipped_blocks > 0 {
        warn_time!("skipped {} message blocks with unresolvable images", skipped_blocks);
    }

    // Only every sixth bold run is a coral name, starting with the first.
    let names_trimmed: Vec<String> = names.into_iter().step_by(NAME_STRIDE).collect();

    if names_trimmed.len() != images.len() {
        warn_time!(
            "images and names are not the same length ({} vs {}), no image links this page",
            images.len(),
            names_trimmed.len()
        );
        return Ok(Vec::new());
    }

    Ok(names_trimmed
        .into_iter()
        .zip(images)
        .map(|(name, url)| ImageLink { name, url })
        .collect())
}

/// Collects one block's matching image urls and all of its bold runs.
/// Returns `None` when a matching image can't be resolved to a url, so the
/// caller can count the dropped block instead of aborting the page.
fn scan_block(
    block: ElementRef,
    img_selector: &Selector,
    bold_selector: &Selector,
    page_url: &Url,
    image_loc: &str,
) -> Option<BlockYield> {
    let mut image_urls = Vec::new();
    for img in block.select(img_selector) {
        let matches_loc = img
            .value()
            .attr("data-url")
            .is_some_and(|data_url| data_url.contains(image_loc));
        if !matches_loc {
            continue;
        }
        let src = img.value().attr("src")?;
        let resolved = page_url.join(src).ok()?;
        image_urls.push(resolved.to_string());
    }

    let names = block
        .select(bold_selector)
        .map(|b| b.text().collect::<String>())
        .collect();

    Some(BlockYield { image_urls, names })
}

#[inline]
pub(crate) fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}
