//! Mackie file explorer listing source

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::config::CheckerConfig;
use crate::driver::error::CheckError;
use crate::driver::listing::Listing;
use crate::driver::source::ListingSource;

/// Listing source backed by a single HTTP GET
pub struct HttpListingSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpListingSource {
    /// Creates a source for the configured endpoint, user agent and timeout
    pub fn new(config: &CheckerConfig) -> Result<Self, CheckError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch_listing(&self) -> Result<Listing, CheckError> {
        debug!("Fetching driver listing: {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await.map_err(|e| {
            warn!("Listing request failed: {}", e);
            CheckError::Network(e)
        })?;

        let status = response.status();

        if !status.is_success() {
            warn!("File explorer returned status {}: {}", status, self.endpoint);
            return Err(CheckError::Status(status));
        }

        // Read the body separately so a timeout mid-body stays a network error
        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read listing body: {}", e);
            CheckError::Network(e)
        })?;

        let listing: Listing = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse listing response: {}", e);
            CheckError::InvalidResponse(e.to_string())
        })?;

        debug!("Listing contains {} items", listing.content.len());

        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::USER_AGENT;
    use crate::driver::listing::ListingItem;
    use mockito::{Matcher, Server};
    use std::io::Write;
    use std::time::Duration;

    fn config_for(url: String) -> CheckerConfig {
        CheckerConfig {
            endpoint: url,
            ..CheckerConfig::default()
        }
    }

    fn listing_source(url: String) -> HttpListingSource {
        HttpListingSource::new(&config_for(url)).unwrap()
    }

    #[tokio::test]
    async fn fetch_listing_returns_items_in_response_order() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/file-explorer.json")
            .match_query(Matcher::UrlEncoded("folder".into(), "19783".into()))
            .match_header("user-agent", USER_AGENT)
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"content": [
                    {"label": "Mackie_USB_Driver_v4_48_0.zip", "link": "https://x/48.zip"},
                    {"label": "Mackie_USB_Driver_v4_50_0.zip", "link": "https://x/50.zip"}
                ]}"#,
            )
            .create_async()
            .await;

        let source = HttpListingSource::new(&config_for(format!(
            "{}/file-explorer.json?folder=19783",
            server.url()
        )))
        .unwrap();
        let listing = source.fetch_listing().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            listing.content,
            vec![
                ListingItem::new("Mackie_USB_Driver_v4_48_0.zip", "https://x/48.zip"),
                ListingItem::new("Mackie_USB_Driver_v4_50_0.zip", "https://x/50.zip"),
            ]
        );
    }

    #[tokio::test]
    async fn fetch_listing_returns_empty_when_content_missing() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/listing")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"folder": 19783}"#)
            .create_async()
            .await;

        let source = listing_source(format!("{}/listing", server.url()));
        let listing = source.fetch_listing().await.unwrap();

        mock.assert_async().await;
        assert!(listing.content.is_empty());
    }

    #[tokio::test]
    async fn fetch_listing_returns_status_error_for_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/listing")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let source = listing_source(format!("{}/listing", server.url()));
        let result = source.fetch_listing().await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(CheckError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
        ));
    }

    #[tokio::test]
    async fn fetch_listing_returns_status_error_for_not_found() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/listing")
            .with_status(404)
            .create_async()
            .await;

        let source = listing_source(format!("{}/listing", server.url()));
        let result = source.fetch_listing().await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(CheckError::Status(reqwest::StatusCode::NOT_FOUND))
        ));
    }

    #[tokio::test]
    async fn fetch_listing_returns_invalid_response_for_malformed_json() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/listing")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let source = listing_source(format!("{}/listing", server.url()));
        let result = source.fetch_listing().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(CheckError::InvalidResponse(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn fetch_listing_returns_timeout_when_server_stalls() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/listing")
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_secs(2));
                w.write_all(br#"{"content": []}"#)
            })
            .create_async()
            .await;

        let config = CheckerConfig {
            timeout: Duration::from_millis(200),
            ..config_for(format!("{}/listing", server.url()))
        };
        let source = HttpListingSource::new(&config).unwrap();
        let result = source.fetch_listing().await;

        match result {
            Err(err) => assert!(err.is_timeout(), "expected timeout, got {err}"),
            Ok(listing) => panic!("expected timeout, got {listing:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_listing_returns_network_error_when_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = listing_source(format!("http://{addr}/listing"));
        let result = source.fetch_listing().await;

        assert!(matches!(result, Err(CheckError::Network(_))));
    }
}
