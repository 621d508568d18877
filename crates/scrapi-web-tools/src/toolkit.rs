//! All ScraperAPI tools behind one credential and one HTTP transport

use crate::error::Result;
use crate::structured::ScraperApiStructuredWrapper;
use crate::tools::{ScraperApiAmazonSearchTool, ScraperApiGoogleSearchTool, ScraperApiTool};
use crate::transport::HttpTransport;
use crate::wrapper::ScraperApiWrapper;
use async_trait::async_trait;
use scrapi_core::{ScrapiConfig, Tool, ToolDeclaration, Toolset};
use std::sync::Arc;
use tracing::info;

/// Bundles the page fetch, Google search and Amazon search tools.
///
/// # Example
///
/// ```rust,no_run
/// use scrapi_core::ScrapiConfig;
/// use scrapi_web_tools::ScraperApiToolkit;
///
/// # fn main() -> anyhow::Result<()> {
/// let config = ScrapiConfig::load()?;
/// let toolkit = ScraperApiToolkit::from_config(&config)?;
/// for declaration in toolkit.declarations() {
///     println!("{}", declaration.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ScraperApiToolkit {
    scrape: Arc<ScraperApiTool>,
    google_search: Arc<ScraperApiGoogleSearchTool>,
    amazon_search: Arc<ScraperApiAmazonSearchTool>,
}

impl ScraperApiToolkit {
    /// Build from an explicit key, falling back to `SCRAPERAPI_API_KEY`
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let config = ScrapiConfig {
            api_key,
            ..ScrapiConfig::default()
        };
        Self::from_config(&config)
    }

    pub fn from_config(config: &ScrapiConfig) -> Result<Self> {
        config.validate()?;
        let api_key = config.api_key()?;
        let transport = Arc::new(HttpTransport::from_config(config)?);

        let page = ScraperApiWrapper::from_parts(
            api_key.clone(),
            config.base_url.clone(),
            transport.clone(),
        );
        let structured = ScraperApiStructuredWrapper::from_parts(
            api_key,
            config.structured_base_url.clone(),
            transport,
        );

        info!(
            base_url = %config.base_url,
            structured_base_url = %config.structured_base_url,
            "Initialized ScraperAPI toolkit"
        );

        Ok(Self {
            scrape: Arc::new(ScraperApiTool::with_wrapper(page)),
            google_search: Arc::new(ScraperApiGoogleSearchTool::with_wrapper(structured.clone())),
            amazon_search: Arc::new(ScraperApiAmazonSearchTool::with_wrapper(structured)),
        })
    }

    pub fn scrape(&self) -> &ScraperApiTool {
        &self.scrape
    }

    pub fn google_search(&self) -> &ScraperApiGoogleSearchTool {
        &self.google_search
    }

    pub fn amazon_search(&self) -> &ScraperApiAmazonSearchTool {
        &self.amazon_search
    }

    pub fn tools(&self) -> Vec<Arc<dyn Tool>> {
        vec![
            self.scrape.clone() as Arc<dyn Tool>,
            self.google_search.clone() as Arc<dyn Tool>,
            self.amazon_search.clone() as Arc<dyn Tool>,
        ]
    }

    /// Function declarations to hand to a model
    pub fn declarations(&self) -> Vec<ToolDeclaration> {
        self.tools().iter().map(|t| t.declaration()).collect()
    }
}

#[async_trait]
impl Toolset for ScraperApiToolkit {
    fn name(&self) -> &str {
        "scraperapi"
    }

    async fn get_tools(&self) -> scrapi_core::Result<Vec<Arc<dyn Tool>>> {
        Ok(self.tools())
    }
}
