//! Wrapper for the ScraperAPI structured search endpoints

use crate::error::Result;
use crate::params::{
    AMAZON_SEARCH_PATH, GOOGLE_SEARCH_PATH, QueryParams, amazon_search_params, endpoint_url,
    google_search_params,
};
use crate::request::{AmazonSearchRequest, GoogleSearchRequest};
use crate::transport::HttpTransport;
use scrapi_core::{ApiKey, ScrapiConfig};
use std::sync::Arc;
use tracing::instrument;

/// Runs Google and Amazon searches through ScraperAPI's structured endpoints,
/// which answer in JSON (default) or CSV.
#[derive(Debug, Clone)]
pub struct ScraperApiStructuredWrapper {
    api_key: ApiKey,
    base_url: String,
    transport: Arc<HttpTransport>,
}

impl ScraperApiStructuredWrapper {
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
        Ok(Self::from_parts(
            api_key,
            config.structured_base_url.clone(),
            transport,
        ))
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

    /// Send requests to a different structured base URL
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

    fn make_request(&self, path: &str, params: &QueryParams) -> Result<String> {
        let url = endpoint_url(&self.base_url, path);
        self.transport.get_blocking(&url, params)
    }

    async fn make_request_async(&self, path: &str, params: &QueryParams) -> Result<String> {
        let url = endpoint_url(&self.base_url, path);
        self.transport.get(&url, params).await
    }

    /// Perform a Google search, blocking the current thread.
    #[instrument(skip(self, request))]
    pub fn google_search(&self, request: &GoogleSearchRequest) -> Result<String> {
        let params = google_search_params(&self.api_key, request);
        self.make_request(GOOGLE_SEARCH_PATH, &params)
    }

    /// Perform a Google search asynchronously.
    #[instrument(skip(self, request))]
    pub async fn google_search_async(&self, request: &GoogleSearchRequest) -> Result<String> {
        let params = google_search_params(&self.api_key, request);
        self.make_request_async(GOOGLE_SEARCH_PATH, &params).await
    }

    /// Perform an Amazon search, blocking the current thread.
    ///
    /// `country_code` is sent as `country`.
    #[instrument(skip(self, request))]
    pub fn amazon_search(&self, request: &AmazonSearchRequest) -> Result<String> {
        let params = amazon_search_params(&self.api_key, request);
        self.make_request(AMAZON_SEARCH_PATH, &params)
    }

    /// Perform an Amazon search asynchronously.
    #[instrument(skip(self, request))]
    pub async fn amazon_search_async(&self, request: &AmazonSearchRequest) -> Result<String> {
        let params = amazon_search_params(&self.api_key, request);
        self.make_request_async(AMAZON_SEARCH_PATH, &params).await
    }
}
