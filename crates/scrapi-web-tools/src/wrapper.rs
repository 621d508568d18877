//! Wrapper for the ScraperAPI page fetch endpoint

use crate::error::Result;
use crate::params::scrape_params;
use crate::request::ScrapeRequest;
use crate::transport::HttpTransport;
use scrapi_core::{ApiKey, ScrapiConfig};
use std::sync::Arc;
use tracing::instrument;

/// Fetches a single URL through ScraperAPI.
///
/// Holds the credential for its whole lifetime; cloning shares the HTTP
/// clients.
///
/// # Example
///
/// ```rust,no_run
/// use scrapi_web_tools::{ScrapeRequest, ScraperApiWrapper};
///
/// # fn main() -> scrapi_web_tools::Result<()> {
/// // Reads SCRAPERAPI_API_KEY
/// let wrapper = ScraperApiWrapper::new(None)?;
/// let html = wrapper.scrape(&ScrapeRequest::new("https://example.com"))?;
/// println!("{}", html);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScraperApiWrapper {
    api_key: ApiKey,
    base_url: String,
    transport: Arc<HttpTransport>,
}

impl ScraperApiWrapper {
    /// Create a wrapper from an explicit key, falling back to `SCRAPERAPI_API_KEY`
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let config = ScrapiConfig {
            api_key,
            ..ScrapiConfig::default()
        };
        Self::from_config(&config)
    }

    /// Create a wrapper from loaded configuration
    pub fn from_config(config: &ScrapiConfig) -> Result<Self> {
        config.validate()?;
        let api_key = config.api_key()?;
        let transport = Arc::new(HttpTransport::from_config(config)?);
        Ok(Self::from_parts(api_key, config.base_url.clone(), transport))
    }

    pub(crate) fn from_parts(
        api_key: ApiKey,
        base_url: String,
        transport: Arc<HttpTransport>,
    ) -> Self {
        Self {
            api_key,
            base_url,
            transport,
        }
    }

    /// Send requests to a different endpoint (a gateway or a test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Scrape a webpage, blocking the current thread.
    ///
    /// Returns the response body unchanged on any 2xx status.
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub fn scrape(&self, request: &ScrapeRequest) -> Result<String> {
        let params = scrape_params(&self.api_key, request);
        self.transport.get_blocking(&self.base_url, &params)
    }

    /// Scrape a webpage asynchronously.
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn scrape_async(&self, request: &ScrapeRequest) -> Result<String> {
        let params = scrape_params(&self.api_key, request);
        self.transport.get(&self.base_url, &params).await
    }
}
