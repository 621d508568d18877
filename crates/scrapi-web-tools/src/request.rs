//! Typed arguments for each ScraperAPI operation
//!
//! These structs are both the Wrapper method arguments and the tool input
//! shapes: the JSON schema a tool publishes is generated from them, and
//! incoming tool arguments are deserialized into them and then checked with
//! [`ValidateInput::validate`] before any request is built.

use schemars::JsonSchema;
use serde::Deserialize;

/// Post-deserialization checks that the type system cannot express
pub trait ValidateInput {
    /// Returns a human-readable rejection reason for invalid input
    fn validate(&self) -> Result<(), String>;
}

/// Output format of a fetched page; absent means raw markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    Text,
    Markdown,
}

impl PageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageFormat::Text => "text",
            PageFormat::Markdown => "markdown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Mobile,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
        }
    }
}

/// Output format of the structured search endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StructuredFormat {
    Json,
    Csv,
}

impl StructuredFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            StructuredFormat::Json => "json",
            StructuredFormat::Csv => "csv",
        }
    }
}

/// Arguments for fetching one web page.
///
/// # Example
///
/// ```
/// use scrapi_web_tools::{PageFormat, ScrapeRequest};
///
/// let request = ScrapeRequest {
///     output_format: Some(PageFormat::Markdown),
///     render: Some(true),
///     ..ScrapeRequest::new("https://example.com")
/// };
/// assert_eq!(request.url, "https://example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScrapeRequest {
    /// The URL of the webpage to scrape
    pub url: String,
    /// The output format, can be 'text' or 'markdown'. If not specified, returns HTML.
    pub output_format: Option<PageFormat>,
    /// The country code to use for the request (e.g., 'us', 'uk', 'ca')
    pub country_code: Option<String>,
    /// The device type to use for the request, can be 'desktop' or 'mobile'
    pub device_type: Option<DeviceType>,
    /// Whether to use premium proxies
    pub premium: Option<bool>,
    /// Whether to render JavaScript
    pub render: Option<bool>,
    /// Whether to keep headers in the request
    pub keep_headers: Option<bool>,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl ValidateInput for ScrapeRequest {
    fn validate(&self) -> Result<(), String> {
        if self.url.trim().is_empty() {
            return Err("url must not be empty".to_string());
        }
        Ok(())
    }
}

/// Arguments for a Google search through the structured endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GoogleSearchRequest {
    /// Query keywords that a user wants to search for e.g. 'Pizza recipe'
    pub query: String,
    /// Two letter country code for Geo Targeting (e.g. 'us', 'uk', 'ca')
    pub country_code: Option<String>,
    /// Country of Google domain to scrape (e.g. 'com', 'co.uk', 'ca'). Defaults to 'com'
    pub tld: Option<String>,
    /// The output format, can be 'json' or 'csv'. Defaults to 'json'
    pub output_format: Option<StructuredFormat>,
    /// Set a region for a search (e.g., 'w+CAIQICINUGFyaXMsIEZyYW5jZQ')
    pub uule: Option<String>,
    /// Number of results
    pub num: Option<u32>,
    /// Host Language (e.g., 'DE')
    pub hl: Option<String>,
    /// Boosts matches whose country of origin matches the parameter value (e.g., 'DE')
    pub gl: Option<String>,
    /// Character encoding for the query string (e.g., 'UTF8')
    pub ie: Option<String>,
    /// Character encoding for the results (e.g., 'UTF8')
    pub oe: Option<String>,
    /// Set the starting offset in the result list (e.g., 10 for page 2)
    pub start: Option<u32>,
}

impl GoogleSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

impl ValidateInput for GoogleSearchRequest {
    fn validate(&self) -> Result<(), String> {
        validate_query(&self.query)
    }
}

/// Arguments for an Amazon product search through the structured endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AmazonSearchRequest {
    /// Add a query you want to search e.g. 'green shoes'
    pub query: String,
    /// Two letter country code for Geo Targeting (e.g. 'us', 'uk', 'ca')
    pub country_code: Option<String>,
    /// Amazon market to be scraped (e.g. 'com', 'co.uk', 'ca'). Defaults to 'com'
    pub tld: Option<String>,
    /// The output format, can be 'json' or 'csv'. Defaults to 'json'
    pub output_format: Option<StructuredFormat>,
    /// Paginating the result. For example: 1
    pub page: Option<u32>,
}

impl AmazonSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

impl ValidateInput for AmazonSearchRequest {
    fn validate(&self) -> Result<(), String> {
        validate_query(&self.query)
    }
}

fn validate_query(query: &str) -> Result<(), String> {
    if query.trim().is_empty() {
        Err("query must not be empty".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scrape_request_deserializes_literals() {
        let request: ScrapeRequest = serde_json::from_value(json!({
            "url": "https://example.com",
            "output_format": "text",
            "country_code": "us",
            "device_type": "desktop",
            "premium": false,
            "render": true,
            "keep_headers": false
        }))
        .unwrap();

        assert_eq!(request.output_format, Some(PageFormat::Text));
        assert_eq!(request.device_type, Some(DeviceType::Desktop));
        assert_eq!(request.premium, Some(false));
        assert_eq!(request.render, Some(true));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_null_optionals_are_absent() {
        let request: ScrapeRequest = serde_json::from_value(json!({
            "url": "https://example.com",
            "country_code": null,
            "render": null
        }))
        .unwrap();
        assert_eq!(request, ScrapeRequest::new("https://example.com"));
    }

    #[test]
    fn test_out_of_set_literal_is_rejected() {
        let err = serde_json::from_value::<ScrapeRequest>(json!({
            "url": "https://example.com",
            "output_format": "pdf"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown variant `pdf`"));

        let err = serde_json::from_value::<AmazonSearchRequest>(json!({
            "query": "monitor",
            "output_format": "xml"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown variant `xml`"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let err = serde_json::from_value::<AmazonSearchRequest>(json!({
            "query": "monitor",
            "country": "us"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `country`"));
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(
            serde_json::from_value::<GoogleSearchRequest>(json!({
                "query": "langchain",
                "num": "five"
            }))
            .is_err()
        );
        assert!(
            serde_json::from_value::<AmazonSearchRequest>(json!({
                "query": "monitor",
                "page": -1
            }))
            .is_err()
        );
        assert!(serde_json::from_value::<ScrapeRequest>(json!({})).is_err());
    }

    #[test]
    fn test_validation_rejects_empty_required_fields() {
        assert_eq!(
            ScrapeRequest::new("").validate().unwrap_err(),
            "url must not be empty"
        );
        // Scheme-less and unusual targets are left for the service to judge
        assert!(ScrapeRequest::new("www.example.com").validate().is_ok());
        assert_eq!(
            GoogleSearchRequest::new("  ").validate().unwrap_err(),
            "query must not be empty"
        );
        assert!(AmazonSearchRequest::new("shoes").validate().is_ok());
    }

    #[test]
    fn test_literal_wire_values() {
        assert_eq!(PageFormat::Markdown.as_str(), "markdown");
        assert_eq!(DeviceType::Mobile.as_str(), "mobile");
        assert_eq!(StructuredFormat::Csv.as_str(), "csv");
    }
}
