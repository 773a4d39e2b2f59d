use std::path::PathBuf;

use clap::Parser;

use crate::process::RunConfig;
use crate::{IMAGE_DIR, NAMES_FILE};

/// Scrapes the images a poster attached to a forum thread, together with the
/// bolded coral names, into a local corpus.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Url from which to scrape, ending in "/page-<n>".
    #[arg(short, long)]
    pub url: String,

    /// Author name of the posts to scrape.
    #[arg(short, long)]
    pub poster: String,

    /// Substring of the image data-url identifying relevant images.
    #[arg(short, long)]
    pub image_loc: String,

    /// Display the parsed inputs, then quit without scraping.
    #[arg(short, long)]
    pub quit: bool,
}

impl Cli {
    /// Diagnostic dump used by the `--quit` flag.
    pub fn print_inputs(&self) {
        println!("Input Arguments:");
        println!("  quit      : {}", self.quit);
        println!("  url       : {}", self.url);
        println!("  poster    : {}", self.poster);
        println!("  image_loc : {}", self.image_loc);
    }

    pub fn into_config(self) -> RunConfig {
        RunConfig {
            url: self.url,
            poster: self.poster,
            image_loc: self.image_loc,
            image_dir: PathBuf::from(IMAGE_DIR),
            names_file: PathBuf::from(NAMES_FILE),
        }
    }
}
