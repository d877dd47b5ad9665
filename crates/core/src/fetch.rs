//! Page fetching.
//!
//! Providers receive pages through the [`Fetcher`] trait. [`HttpFetcher`]
//! downloads them over HTTP; [`FileFetcher`] serves a saved page from disk
//! for every URL, which makes offline runs and tests possible.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{Result, WeatherError};

/// HTTP client configuration for fetching pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; idokep-rs/0.1)".to_string(),
        }
    }
}

/// Source of page bodies for a provider.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Returns the HTML body served at `url`.
    async fn fetch_html(&self, url: &Url) -> Result<String>;
}

/// Fetches pages over HTTP with a shared client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(WeatherError::HttpError)?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    /// Performs a GET request; non-success statuses are errors.
    async fn fetch_html(&self, url: &Url) -> Result<String> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(WeatherError::InvalidUrl(format!(
                "URL must use http:// or https://, got {}",
                url
            )));
        }

        debug!(url = %url, "fetching page");

        let response = self
            .client
            .get(url.clone())
            .header("User-Agent", &self.config.user_agent)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "hu-HU,hu;q=0.9,en;q=0.8")
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout { timeout: self.config.timeout }
                } else {
                    WeatherError::HttpError(e)
                }
            })?;

        let content = response.text().await?;

        Ok(content)
    }
}

/// Serves one saved page for every URL.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch_html(&self, url: &Url) -> Result<String> {
        debug!(url = %url, path = %self.path.display(), "serving page from file");

        tokio::fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => WeatherError::FileNotFound(self.path.clone()),
            _ => WeatherError::ReadError(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("idokep"));
    }

    #[tokio::test]
    async fn test_fetch_non_http_url() {
        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let url = Url::parse("file:///etc/hosts").unwrap();
        let result = fetcher.fetch_html(&url).await;

        assert!(matches!(result, Err(WeatherError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_file_fetcher_not_found() {
        let fetcher = FileFetcher::new("/nonexistent/path/page.html");
        let url = Url::parse("https://www.idokep.hu/idojaras/Budapest").unwrap();
        let result = fetcher.fetch_html(&url).await;

        assert!(matches!(result, Err(WeatherError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_file_fetcher_serves_saved_page() {
        let fetcher = FileFetcher::new("../../tests/fixtures/idokep_current.html");
        let url = Url::parse("https://www.idokep.hu/idojaras/Budapest").unwrap();
        let html = fetcher.fetch_html(&url).await.expect("should read fixture");

        assert!(html.contains("current-temperature"));
    }

    #[tokio::test]
    async fn test_file_fetcher_directory_is_read_error() {
        let fetcher = FileFetcher::new("../../tests/fixtures");
        let url = Url::parse("https://www.idokep.hu/idojaras/Budapest").unwrap();
        let result = fetcher.fetch_html(&url).await;

        assert!(matches!(result, Err(WeatherError::ReadError(_))));
    }
}
