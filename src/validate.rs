use reqwest::Client;
use url::Url;

/// Checks that `url` parses with a scheme and an authority and that a live
/// request against it answers with a success status. Network failures count
/// as invalid rather than propagating.
pub(crate) async fn is_url_valid(client: &Client, url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    if parsed.host_str().is_none() {
        return false;
    }

    match client.get(parsed).send().await {
        Ok(res) => res.status().is_success(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> Client {
        Client::new()
    }

    #[tokio::test]
    async fn rejects_malformed_urls_without_touching_the_network() {
        assert!(!is_url_valid(&client(), "not a url").await);
        assert!(!is_url_valid(&client(), "/thread/page-1").await);
        assert!(!is_url_valid(&client(), "mailto:someone@example.com").await);
    }

    #[tokio::test]
    async fn accepts_a_reachable_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thread/page-1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let url = format!("{}/thread/page-1", server.uri());
        assert!(is_url_valid(&client(), &url).await);
    }

    #[tokio::test]
    async fn rejects_a_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/gone", server.uri());
        assert!(!is_url_valid(&client(), &url).await);
    }

    #[tokio::test]
    async fn rejects_an_unreachable_host() {
        let server = MockServer::start().await;
        let url = format!("{}/thread/page-1", server.uri());
        drop(server);

        assert!(!is_url_valid(&client(), &url).await);
    }
}
