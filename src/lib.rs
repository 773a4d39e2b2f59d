//! Sequential scraper for forum live-sale threads.
//!
//! Walks a thread page by page, pulls the images a single poster attached to
//! their sale posts together with the bolded coral names, downloads the
//! images and appends `name|filename` rows to a shared file.

pub mod cli;
mod download;
pub mod error;
mod macros;
mod paginate;
mod parse;
pub mod process;
mod record;
mod request;
mod validate;

pub use error::{Error, Result};

const IMAGE_DIR: &str = "scraped_images";
const NAMES_FILE: &str = "coral_names_files.csv";
/// Pause before every page whose number is divisible by this.
const PAUSE_PAGE_INTERVAL: usize = 20;
const PAUSE_SECS: u64 = 30;
/// A sale post renders six bold runs; only the first is the coral name.
const NAME_STRIDE: usize = 6;
const REQUEST_TIMEOUT_SECS: u64 = 30;
