//! Weather provider interface and the idokep.hu implementation.
//!
//! The aggregator talks to every weather source through [`WeatherProvider`].
//! [`IdokepProvider`] builds page URLs, fetches one page per call, and runs
//! the matching extraction routine on it. Parsing happens after the fetch
//! completes, so the parsed document never lives across an await point.
//!
//! # Example
//!
//! ```rust,no_run
//! use idokep_core::{IdokepProvider, WeatherProvider};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = IdokepProvider::http()?;
//! let current = provider.get_current("Budapest").await?;
//! println!("{}°C", current.temperature);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tracing::debug;
use url::Url;

use crate::extract::{extract_current, extract_days, extract_hours};
use crate::fetch::{FetchConfig, Fetcher, HttpFetcher};
use crate::parse::Document;
use crate::types::{CurrentWeather, DayForecast, HourForecast};
use crate::{Result, WeatherError};

/// Site root used when no other base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.idokep.hu";

/// A source of current conditions and forecasts for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Short identifier used for registration and logging.
    fn name(&self) -> &'static str;

    async fn get_current(&self, city: &str) -> Result<CurrentWeather>;

    async fn get_days(&self, city: &str) -> Result<Vec<DayForecast>>;

    async fn get_hours(&self, city: &str) -> Result<Vec<HourForecast>>;
}

/// Configuration for [`IdokepProvider`].
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use idokep_core::ProviderConfig;
///
/// let config = ProviderConfig::builder()
///     .today(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
///     .build();
/// assert_eq!(config.base_url.as_str(), "https://www.idokep.hu/");
/// ```
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Site root; page paths are appended to it.
    pub base_url: Url,
    /// Date used to anchor forecast columns (default: the local date at call time).
    pub today: Option<NaiveDate>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), today: None }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

impl ProviderConfig {
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::new()
    }

    /// The pinned date, or today's local date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Builder for ProviderConfig.
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ProviderConfig::default() }
    }

    /// Sets the site root.
    pub fn base_url(mut self, value: Url) -> Self {
        self.config.base_url = value;
        self
    }

    /// Pins the date used for forecast date inference.
    pub fn today(mut self, value: NaiveDate) -> Self {
        self.config.today = Some(value);
        self
    }

    /// Builds the config.
    pub fn build(self) -> ProviderConfig {
        self.config
    }
}

impl Default for ProviderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Weather provider backed by idokep.hu pages.
pub struct IdokepProvider<F = HttpFetcher> {
    fetcher: F,
    config: ProviderConfig,
}

impl IdokepProvider<HttpFetcher> {
    /// Provider fetching over HTTP with default settings.
    pub fn http() -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(FetchConfig::default())?, ProviderConfig::default()))
    }
}

impl<F: Fetcher> IdokepProvider<F> {
    pub fn new(fetcher: F, config: ProviderConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// URL of the current-conditions page for `city`.
    pub fn current_url(&self, city: &str) -> Result<Url> {
        page_url(&self.config.base_url, "idojaras", city)
    }

    /// URL of the forecast page for `city`.
    pub fn forecast_url(&self, city: &str) -> Result<Url> {
        page_url(&self.config.base_url, "elorejelzes", city)
    }

    /// Parses `html` as a current-conditions page.
    pub fn current_from_html(&self, html: &str) -> Result<CurrentWeather> {
        extract_current(&Document::parse(html)?, &self.config.base_url)
    }

    /// Parses `html` as a forecast page and reads its day columns.
    pub fn days_from_html(&self, html: &str) -> Result<Vec<DayForecast>> {
        extract_days(&Document::parse(html)?, &self.config.base_url, self.config.today())
    }

    /// Parses `html` as a forecast page and reads its hourly cards.
    pub fn hours_from_html(&self, html: &str) -> Result<Vec<HourForecast>> {
        extract_hours(&Document::parse(html)?, &self.config.base_url)
    }
}

/// Builds `{base}/{section}/{city}` with the city as one percent-encoded segment.
fn page_url(base: &Url, section: &str, city: &str) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| WeatherError::InvalidUrl(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .push(section)
        .push(city);
    Ok(url)
}

#[async_trait]
impl<F: Fetcher> WeatherProvider for IdokepProvider<F> {
    fn name(&self) -> &'static str {
        "idokep"
    }

    async fn get_current(&self, city: &str) -> Result<CurrentWeather> {
        let url = self.current_url(city)?;
        let html = self.fetcher.fetch_html(&url).await?;
        debug!(city, bytes = html.len(), "received current conditions page");
        self.current_from_html(&html)
    }

    async fn get_days(&self, city: &str) -> Result<Vec<DayForecast>> {
        let url = self.forecast_url(city)?;
        let html = self.fetcher.fetch_html(&url).await?;
        debug!(city, bytes = html.len(), "received forecast page");
        self.days_from_html(&html)
    }

    async fn get_hours(&self, city: &str) -> Result<Vec<HourForecast>> {
        let url = self.forecast_url(city)?;
        let html = self.fetcher.fetch_html(&url).await?;
        debug!(city, bytes = html.len(), "received forecast page");
        self.hours_from_html(&html)
    }
}

/// Weather providers available to the aggregator, keyed by name.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<&'static str, Box<dyn WeatherProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a provider, replacing any previous one with the same name.
    pub fn register(&mut self, provider: Box<dyn WeatherProvider>) {
        let name = provider.name();
        if self.providers.insert(name, provider).is_some() {
            debug!(provider = name, "replaced registered provider");
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn WeatherProvider> {
        self.providers.get(name).map(|p| p.as_ref())
    }

    /// Registered provider names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn WeatherProvider> {
        self.providers.values().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
