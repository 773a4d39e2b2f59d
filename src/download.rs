use std::path::Path;

use chrono::Local;
use reqwest::Client;
use tokio::fs;

use crate::parse::ImageLink;
use crate::{warn_time, Result};

/// Downloads every image in `links` into `image_dir`, named by the final
/// path segment of its url. A name collision overwrites the earlier file.
/// One bad download is logged and skipped so it can't end the run; a failed
/// local write still aborts.
pub(crate) async fn download_images(
    client: &Client,
    links: &[ImageLink],
    image_dir: &Path,
) -> Result<()> {
    for link in links {
        let Some(file_name) = link.file_name() else {
            warn_time!("no usable filename in image url {}, skipping", link.url);
            continue;
        };
        let bytes = match fetch_image(client, &link.url).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn_time!("failed to download {}: {}", link.url, err);
                continue;
            }
        };
        fs::write(image_dir.join(file_name), &bytes).await?;
    }
    Ok(())
}

async fn fetch_image(client: &Client, url: &str) -> Result<Vec<u8>> {
    let res = client.get(url).send().await?.error_for_status()?;
    let bytes = res.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn link(name: &str, url: String) -> ImageLink {
        ImageLink {
            name: name.into(),
            url,
        }
    }

    #[tokio::test]
    async fn writes_the_fetched_bytes_under_the_url_filename() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/x/img1.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpeg bytes".to_vec()))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let links = vec![link("Acropora sp.", format!("{}/x/img1.jpg", server.uri()))];
        download_images(&Client::new(), &links, dir.path())
            .await
            .unwrap();

        let saved = std::fs::read(dir.path().join("img1.jpg")).unwrap();
        assert_eq!(saved, b"jpeg bytes");
    }

    #[tokio::test]
    async fn a_failed_download_skips_only_that_image() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/x/missing.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/x/img2.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let links = vec![
            link("Gone", format!("{}/x/missing.jpg", server.uri())),
            link("Here", format!("{}/x/img2.jpg", server.uri())),
        ];
        download_images(&Client::new(), &links, dir.path())
            .await
            .unwrap();

        assert!(!dir.path().join("missing.jpg").exists());
        assert_eq!(std::fs::read(dir.path().join("img2.jpg")).unwrap(), b"ok");
    }
}
