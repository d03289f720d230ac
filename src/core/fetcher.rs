use crate::config::SearchConfig;
use crate::core::PageFetcher;
use crate::domain::model::ListingPage;
use crate::utils::error::{OpportunityError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// One GET per call, browser-like `User-Agent`, bounded by a timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        Self::new(config.user_agent(), config.timeout())
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<ListingPage> {
        tracing::debug!("Requesting listing page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| OpportunityError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("Listing page response status: {}", status);
        if status.is_client_error() || status.is_server_error() {
            return Err(OpportunityError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let markup = response
            .text()
            .await
            .map_err(|source| OpportunityError::Transport {
                url: url.to_string(),
                source,
            })?;
        tracing::debug!("Received {} bytes of markup", markup.len());

        Ok(ListingPage {
            url: url.to_string(),
            markup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use httpmock::prelude::*;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(DEFAULT_USER_AGENT, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/oportunidades/")
                .header("user-agent", DEFAULT_USER_AGENT);
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body("<ul class=\"list\"></ul>");
        });

        let page = fetcher().fetch(&server.url("/oportunidades/")).await.unwrap();

        page_mock.assert();
        assert_eq!(page.markup, "<ul class=\"list\"></ul>");
        assert!(page.url.ends_with("/oportunidades/"));
    }

    #[tokio::test]
    async fn test_fetch_http_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let err = fetcher().fetch(&server.url("/missing")).await.unwrap_err();
        assert!(matches!(err, OpportunityError::HttpStatus { status: 404, .. }));
    }

    #[test]
    fn test_fetch_connection_refused_is_transport_error() {
        // 埠 1 沒有服務在監聽
        let err = tokio_test::block_on(fetcher().fetch("http://127.0.0.1:1/")).unwrap_err();
        assert!(matches!(err, OpportunityError::Transport { .. }));
    }
}
