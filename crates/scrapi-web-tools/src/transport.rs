//! HTTP dispatch for ScraperAPI requests.
//!
//! Both modes take an already-built [`QueryParams`]; they differ only in how
//! the single GET is awaited. No retries are attempted.

use crate::error::{Result, ScraperApiError};
use crate::params::QueryParams;
use scrapi_core::ScrapiConfig;
use scrapi_telemetry::request_span;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{Instrument, debug};

const DEFAULT_USER_AGENT: &str = concat!("scrapi/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP clients for one or more wrappers.
///
/// The blocking client is built on first blocking use, so async-only callers
/// never start its background runtime.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    blocking: OnceLock<reqwest::blocking::Client>,
    timeout: Option<Duration>,
    user_agent: String,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>, user_agent: Option<String>) -> Result<Self> {
        let user_agent = user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let mut builder = reqwest::Client::builder().user_agent(user_agent.clone());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ScraperApiError::Client)?;

        Ok(Self {
            client,
            blocking: OnceLock::new(),
            timeout,
            user_agent,
        })
    }

    pub fn from_config(config: &ScrapiConfig) -> Result<Self> {
        Self::new(config.timeout(), config.user_agent.clone())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn blocking_client(&self) -> Result<&reqwest::blocking::Client> {
        if let Some(client) = self.blocking.get() {
            return Ok(client);
        }

        // blocking::ClientBuilder defaults to a 30s timeout; always set ours
        let client = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout)
            .build()
            .map_err(ScraperApiError::Client)?;

        Ok(self.blocking.get_or_init(|| client))
    }

    /// GET `endpoint?params` on the caller's thread.
    ///
    /// Must not be called from inside an async runtime.
    pub fn get_blocking(&self, endpoint: &str, params: &QueryParams) -> Result<String> {
        let span = request_span(endpoint, true);
        let _guard = span.enter();
        debug!(params = ?params, "Sending blocking ScraperAPI request");

        let response = self
            .blocking_client()?
            .get(endpoint)
            .query(params.pairs())
            .send()
            .map_err(|e| ScraperApiError::transport(endpoint, e))?;

        let status = response.status();
        debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(ScraperApiError::status(endpoint, status));
        }

        response
            .text()
            .map_err(|e| ScraperApiError::transport(endpoint, e))
    }

    /// GET `endpoint?params`, suspending only while the request is in flight
    pub async fn get(&self, endpoint: &str, params: &QueryParams) -> Result<String> {
        let span = request_span(endpoint, false);

        async {
            debug!(params = ?params, "Sending ScraperAPI request");

            let response = self
                .client
                .get(endpoint)
                .query(params.pairs())
                .send()
                .await
                .map_err(|e| ScraperApiError::transport(endpoint, e))?;

            let status = response.status();
            debug!("Response status: {}", status);
            if !status.is_success() {
                return Err(ScraperApiError::status(endpoint, status));
            }

            response
                .text()
                .await
                .map_err(|e| ScraperApiError::transport(endpoint, e))
        }
        .instrument(span)
        .await
    }
}
