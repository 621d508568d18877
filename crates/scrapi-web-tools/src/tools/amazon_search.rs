//! Amazon product search tool

use super::{arg_names, into_observation, parse_input, record_call};
use crate::error::Result;
use crate::request::AmazonSearchRequest;
use crate::structured::ScraperApiStructuredWrapper;
use async_trait::async_trait;
use scrapi_core::{Result as CoreResult, Tool, ToolContext, ToolResponse, generate_schema};
use scrapi_telemetry::ToolOutcome;
use serde_json::Value;
use std::sync::Arc;

/// Amazon product search through ScraperAPI's structured endpoint.
pub struct ScraperApiAmazonSearchTool {
    name: String,
    description: String,
    wrapper: ScraperApiStructuredWrapper,
}

impl ScraperApiAmazonSearchTool {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self::with_wrapper(ScraperApiStructuredWrapper::new(api_key)?))
    }

    pub fn with_wrapper(wrapper: ScraperApiStructuredWrapper) -> Self {
        Self {
            name: "scraperapi_amazon_search".to_string(),
            description: "A tool for performing Amazon searches using ScraperAPI. Useful for extracting structured data from Amazon search results. Input should be a query and optional parameters for the search request.".to_string(),
            wrapper,
        }
    }

    pub fn with_config(mut self, name: String, description: String) -> Self {
        self.name = name;
        self.description = description;
        self
    }

    pub fn wrapper(&self) -> &ScraperApiStructuredWrapper {
        &self.wrapper
    }

    /// Run a Amazon search with typed input, blocking. Never fails.
    ///
    /// # Panics
    ///
    /// Panics when called from inside a Tokio runtime, since the blocking
    /// HTTP client cannot run there. Use [`Self::run_async`] in async code.
    pub fn run(&self, input: &AmazonSearchRequest) -> String {
        into_observation(&self.name, self.wrapper.amazon_search(input)).0
    }

    pub async fn run_async(&self, input: &AmazonSearchRequest) -> String {
        into_observation(&self.name, self.wrapper.amazon_search_async(input).await).0
    }

    /// Validate JSON arguments and search, blocking.
    ///
    /// # Panics
    ///
    /// Same as [`Self::run`]: must not be called from inside a Tokio runtime.
    pub fn invoke(&self, args: Value) -> CoreResult<String> {
        let input: AmazonSearchRequest = parse_input(&self.name, args)?;
        Ok(self.run(&input))
    }

    pub async fn invoke_async(&self, args: Value) -> CoreResult<String> {
        let input: AmazonSearchRequest = parse_input(&self.name, args)?;
        Ok(self.run_async(&input).await)
    }
}

#[async_trait]
impl Tool for ScraperApiAmazonSearchTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        generate_schema::<AmazonSearchRequest>()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> CoreResult<ToolResponse> {
        let names = arg_names(&params);
        let input: AmazonSearchRequest = match parse_input(&self.name, params) {
            Ok(input) => input,
            Err(e) => {
                record_call(&self.name, ctx.as_ref(), names, ToolOutcome::Rejected);
                return Err(e);
            }
        };

        let (text, outcome) =
            into_observation(&self.name, self.wrapper.amazon_search_async(&input).await);
        record_call(&self.name, ctx.as_ref(), names, outcome);

        Ok(ToolResponse::text(text))
    }
}
