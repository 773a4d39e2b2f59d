use std::time::Duration;

use reqwest::Client;

use crate::{Result, REQUEST_TIMEOUT_SECS};

/// Builds the client shared by the whole run. Every request gets a bounded
/// timeout so a stalled page can't hang the sequential loop forever.
pub(crate) fn build_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Requests a page and returns a `Result<String>` containing the HTML.
pub(crate) async fn request_page_html(client: &Client, url: &str) -> Result<String> {
    let res = client.get(url).send().await?;
    let html = res.text().await?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_the_page_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thread/page-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>hi</html>"))
            .mount(&server)
            .await;

        let client = build_client().unwrap();
        let url = format!("{}/thread/page-1", server.uri());
        let html = request_page_html(&client, &url).await.unwrap();
        assert_eq!(html, "<html>hi</html>");
    }
}
