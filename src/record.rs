use std::path::Path;

use chrono::Local;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::parse::ImageLink;
use crate::{warn_time, Result};

/// Append-only sink for `name|filename` rows. Opened once per run and held
/// until the run ends; reopening the same path keeps accumulating rows.
pub(crate) struct Recorder {
    file: File,
}

impl Recorder {
    pub(crate) async fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        Ok(Self { file })
    }

    /// Writes one row per link, deriving the filename the same way the
    /// downloader names the file on disk.
    pub(crate) async fn append(&mut self, links: &[ImageLink]) -> Result<()> {
        for link in links {
            let Some(file_name) = link.file_name() else {
                warn_time!("no usable filename in image url {}, skipping row", link.url);
                continue;
            };
            let row = format!("{}|{}\n", link.name, file_name);
            self.file.write_all(row.as_bytes()).await?;
        }
        self.file.flush().await?;
        Ok(())
    }
}
