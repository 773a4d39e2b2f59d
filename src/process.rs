use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use reqwest::Client;
use tokio::{fs, time};
use url::Url;

use crate::download::download_images;
use crate::paginate::{resolve_last_page, split_start_url};
use crate::parse::scrape_page;
use crate::record::Recorder;
use crate::request::{build_client, request_page_html};
use crate::validate::is_url_valid;
use crate::{info_time, warn_time, Error, Result, PAUSE_PAGE_INTERVAL, PAUSE_SECS};

/// Everything one run needs: the thread inputs and where the downloaded
/// images and the name rows land.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: String,
    pub poster: String,
    pub image_loc: String,
    pub image_dir: PathBuf,
    pub names_file: PathBuf,
}

/// Walks the thread from the starting page to its last page, scraping each
/// page in order. A page that can't be fetched is skipped; only startup
/// validation and local io failures end the run.
pub async fn run(cfg: RunConfig) -> Result<()> {
    let client = build_client()?;

    if !is_url_valid(&client, &cfg.url).await {
        return Err(Error::InvalidStartUrl(cfg.url));
    }
    let (base_url, first_page) = split_start_url(&cfg.url)?;
    let last_page = resolve_last_page(&client, &cfg.url, first_page).await?;

    fs::create_dir_all(&cfg.image_dir).await?;
    let mut recorder = Recorder::open(&cfg.names_file).await?;

    info_time!("Beginning scrape at page {}", first_page);
    for page in first_page..=last_page {
        if should_pause(page) {
            info_time!("pausing for {} seconds at page {}", PAUSE_SECS, page);
            time::sleep(Duration::from_secs(PAUSE_SECS)).await;
        }

        let page_url = format!("{base_url}/page-{page}");
        if !is_url_valid(&client, &page_url).await {
            warn_time!("page {} has invalid url", page);
            continue;
        }
        scrape_one_page(&client, page, &page_url, &cfg, &mut recorder).await?;
    }
    info_time!("End of scrape.");

    Ok(())
}

/// Fetch, parse, download and record a single page. Network trouble on the
/// page fetch degrades to a warning; the io errors bubble up.
async fn scrape_one_page(
    client: &Client,
    page: usize,
    page_url: &str,
    cfg: &RunConfig,
    recorder: &mut Recorder,
) -> Result<()> {
    let html = match request_page_html(client, page_url).await {
        Ok(html) => html,
        Err(err) => {
            warn_time!("failed to fetch page {}: {}", page, err);
            return Ok(());
        }
    };

    let parsed_url = Url::parse(page_url)?;
    let links = scrape_page(html, parsed_url, cfg.poster.clone(), cfg.image_loc.clone()).await?;
    if links.is_empty() {
        info_time!("page {} has no image links", page);
        return Ok(());
    }

    download_images(client, &links, &cfg.image_dir).await?;
    recorder.append(&links).await?;

    Ok(())
}

/// The polite pause fires before every page whose number divides by the
/// configured interval, so a run over pages 1..=45 pauses at 20 and 40.
fn should_pause(page: usize) -> bool {
    page % PAUSE_PAGE_INTERVAL == 0
}
