//! Page fetch tool

use super::{arg_names, into_observation, parse_input, record_call};
use crate::error::Result;
use crate::request::ScrapeRequest;
use crate::wrapper::ScraperApiWrapper;
use async_trait::async_trait;
use scrapi_core::{Result as CoreResult, Tool, ToolContext, ToolResponse, generate_schema};
use scrapi_telemetry::ToolOutcome;
use serde_json::Value;
use std::sync::Arc;

/// ScraperAPI tool for web scraping.
///
/// Fetches one URL and returns the page as HTML (default), plain text or
/// markdown. Failures are returned as `"Error: ..."` text rather than raised.
///
/// ## Setup
///
/// Set `SCRAPERAPI_API_KEY`, or pass the key explicitly.
///
/// ## Example
///
/// ```rust,no_run
/// use scrapi_web_tools::ScraperApiTool;
/// use serde_json::json;
///
/// # fn main() -> anyhow::Result<()> {
/// let tool = ScraperApiTool::new(None)?;
/// let text = tool.invoke(json!({
///     "url": "https://www.example.com",
///     "output_format": "text"
/// }))?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
pub struct ScraperApiTool {
    name: String,
    description: String,
    wrapper: ScraperApiWrapper,
}

impl ScraperApiTool {
    /// Create the tool with a key, falling back to `SCRAPERAPI_API_KEY`
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self::with_wrapper(ScraperApiWrapper::new(api_key)?))
    }

    pub fn with_wrapper(wrapper: ScraperApiWrapper) -> Self {
        Self {
            name: "scraperapi".to_string(),
            description: "A tool for scraping web content. Useful for extracting information from websites. Input should be a URL and optional parameters for the scraping request.".to_string(),
            wrapper,
        }
    }

    /// Override the name and description published to the model
    pub fn with_config(mut self, name: String, description: String) -> Self {
        self.name = name;
        self.description = description;
        self
    }

    pub fn wrapper(&self) -> &ScraperApiWrapper {
        &self.wrapper
    }

    /// Scrape with typed input, blocking. Never fails.
    ///
    /// # Panics
    ///
    /// Panics when called from inside a Tokio runtime, since the blocking
    /// HTTP client cannot run there. Use [`Self::run_async`] in async code.
    pub fn run(&self, input: &ScrapeRequest) -> String {
        into_observation(&self.name, self.wrapper.scrape(input)).0
    }

    /// Scrape with typed input asynchronously. Never fails.
    pub async fn run_async(&self, input: &ScrapeRequest) -> String {
        into_observation(&self.name, self.wrapper.scrape_async(input).await).0
    }

    /// Validate JSON arguments and scrape, blocking.
    ///
    /// Only argument validation can fail; request failures come back as
    /// `"Error: ..."` text.
    ///
    /// # Panics
    ///
    /// Same as [`Self::run`]: must not be called from inside a Tokio runtime.
    pub fn invoke(&self, args: Value) -> CoreResult<String> {
        let input: ScrapeRequest = parse_input(&self.name, args)?;
        Ok(self.run(&input))
    }

    /// Validate JSON arguments and scrape asynchronously.
    pub async fn invoke_async(&self, args: Value) -> CoreResult<String> {
        let input: ScrapeRequest = parse_input(&self.name, args)?;
        Ok(self.run_async(&input).await)
    }
}

#[async_trait]
impl Tool for ScraperApiTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        generate_schema::<ScrapeRequest>()
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, params: Value) -> CoreResult<ToolResponse> {
        let names = arg_names(&params);
        let input: ScrapeRequest = match parse_input(&self.name, params) {
            Ok(input) => input,
            Err(e) => {
                record_call(&self.name, ctx.as_ref(), names, ToolOutcome::Rejected);
                return Err(e);
            }
        };

        let (text, outcome) = into_observation(&self.name, self.wrapper.scrape_async(&input).await);
        record_call(&self.name, ctx.as_ref(), names, outcome);

        Ok(ToolResponse::text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use scrapi_core::DefaultToolContext;
    use serde_json::json;

    fn tool(server_url: &str) -> ScraperApiTool {
        let wrapper = ScraperApiWrapper::new(Some("test_api_key".to_string()))
            .unwrap()
            .with_base_url(format!("{}/", server_url));
        ScraperApiTool::with_wrapper(wrapper)
    }

    #[test]
    fn test_tool_properties() {
        let tool = ScraperApiTool::new(Some("k".to_string())).unwrap();
        assert_eq!(tool.name(), "scraperapi");
        assert!(tool.description().starts_with("A tool for scraping web content."));
    }

    #[test]
    fn test_custom_config() {
        let tool = ScraperApiTool::new(Some("k".to_string()))
            .unwrap()
            .with_config("page_reader".to_string(), "Reads pages".to_string());
        assert_eq!(tool.name(), "page_reader");
        assert_eq!(tool.description(), "Reads pages");
    }

    #[test]
    fn test_schema_generation() {
        let tool = ScraperApiTool::new(Some("k".to_string())).unwrap();
        let schema = tool.schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["url"]));
        assert_eq!(
            schema["properties"]["output_format"]["enum"],
            json!(["text", "markdown"])
        );
        assert_eq!(
            schema["properties"]["device_type"]["enum"],
            json!(["desktop", "mobile"])
        );
        assert_eq!(schema["properties"]["premium"]["type"], "boolean");
        assert_eq!(
            schema["properties"]["url"]["description"],
            "The URL of the webpage to scrape"
        );
    }

    #[test]
    fn test_invoke_returns_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("url".into(), "https://example.com".into()),
                Matcher::UrlEncoded("output_format".into(), "text".into()),
                Matcher::UrlEncoded("render".into(), "true".into()),
            ]))
            .with_status(200)
            .with_body("Example Domain")
            .create();

        let result = tool(&server.url())
            .invoke(json!({
                "url": "https://example.com",
                "output_format": "text",
                "render": true
            }))
            .unwrap();

        assert_eq!(result, "Example Domain");
        mock.assert();
    }

    #[test]
    fn test_invoke_converts_http_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(404)
            .create();

        let result = tool(&server.url())
            .invoke(json!({"url": "http://example.com/404"}))
            .unwrap();

        assert_eq!(
            result,
            format!("Error: 404 Client Error: Not Found for url: {}/", server.url())
        );
    }

    #[test]
    fn test_invoke_rejects_before_sending() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", Matcher::Any).expect(0).create();

        let err = tool(&server.url())
            .invoke(json!({"url": "https://example.com", "output_format": "pdf"}))
            .unwrap_err();

        assert!(err.is_invalid_input());
        mock.assert();
    }

    #[test]
    fn test_invoke_forwards_scheme_less_url() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::Exact(
                "api_key=test_api_key&url=www.example.com".to_string(),
            ))
            .with_status(200)
            .with_body("<html>www</html>")
            .expect(1)
            .create();

        let result = tool(&server.url())
            .invoke(json!({"url": "www.example.com"}))
            .unwrap();

        assert_eq!(result, "<html>www</html>");
        mock.assert();
    }

    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        url
    }

    #[test]
    fn test_invoke_converts_connection_failure() {
        let endpoint = closed_port_url();
        let result = tool(&endpoint)
            .invoke(json!({"url": "https://example.com"}))
            .unwrap();

        assert!(
            result.starts_with(&format!("Error: Request to {}/ failed: ", endpoint)),
            "{result}"
        );
        assert!(!result.contains("test_api_key"));
    }

    #[tokio::test]
    async fn test_invoke_async_converts_connection_failure() {
        let endpoint = closed_port_url();
        let result = tool(&endpoint)
            .invoke_async(json!({"url": "https://example.com"}))
            .await
            .unwrap();

        assert!(
            result.starts_with(&format!("Error: Request to {}/ failed: ", endpoint)),
            "{result}"
        );
        assert!(!result.contains("test_api_key"));
    }

    #[tokio::test]
    #[should_panic]
    async fn test_blocking_run_inside_runtime_panics() {
        tool(&closed_port_url()).run(&ScrapeRequest::new("https://example.com"));
    }

    #[tokio::test]
    async fn test_execute_wraps_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>Async Success</html>")
            .create_async()
            .await;

        let ctx = Arc::new(DefaultToolContext::new(
            "call-123".to_string(),
            "inv-456".to_string(),
        ));
        let response = tool(&server.url())
            .execute(ctx, json!({"url": "http://example.com"}))
            .await
            .unwrap();

        assert_eq!(response.as_text(), Some("<html>Async Success</html>"));
    }

    #[tokio::test]
    async fn test_invoke_async_converts_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let result = tool(&server.url())
            .invoke_async(json!({"url": "http://example.com"}))
            .await
            .unwrap();

        assert!(result.starts_with("Error: 503 Server Error: Service Unavailable"));
    }
}
