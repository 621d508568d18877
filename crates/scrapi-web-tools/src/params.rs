//! Query-string construction shared by blocking and async dispatch
//!
//! Every request is an ordered list of `(wire name, value)` pairs that always
//! starts with the credential. Optional arguments are listed as
//! `(name, Option<value>)` and dropped when absent, so unset parameters never
//! reach the wire as empty strings or nulls.

use crate::request::{AmazonSearchRequest, GoogleSearchRequest, ScrapeRequest};
use scrapi_core::ApiKey;
use std::fmt;

/// Path of the Google search endpoint, relative to the structured base URL
pub const GOOGLE_SEARCH_PATH: &str = "google/search";

/// Path of the Amazon search endpoint, relative to the structured base URL
pub const AMAZON_SEARCH_PATH: &str = "amazon/search";

/// Argument-name to wire-name overrides for the Amazon search endpoint.
///
/// This is the only place an argument travels under a different name.
pub const AMAZON_SEARCH_RENAMES: &[(&str, &str)] = &[("country_code", "country")];

const API_KEY_PARAM: &str = "api_key";

/// Ordered outbound query parameters.
///
/// `Debug` lists parameter names only; the credential value never appears.
#[derive(Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Credential first, then every entry whose value is present
    pub fn from_entries<I>(api_key: &ApiKey, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Option<String>)>,
    {
        let mut pairs = vec![(API_KEY_PARAM, api_key.expose().to_string())];
        pairs.extend(
            entries
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v))),
        );
        Self { pairs }
    }

    /// Apply `(from, to)` key renames
    pub fn renamed(mut self, renames: &[(&'static str, &'static str)]) -> Self {
        for (key, _) in self.pairs.iter_mut() {
            if let Some(&(_, to)) = renames.iter().find(|&&(from, _)| from == *key) {
                *key = to;
            }
        }
        self
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Parameter names in wire order
    pub fn keys(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(k, _)| *k).collect()
    }
}

impl fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryParams")
            .field("keys", &self.keys())
            .finish()
    }
}

/// Booleans travel as the literal strings `true` / `false`
pub fn bool_param(value: bool) -> String {
    let literal = if value { "true" } else { "false" };
    literal.to_string()
}

/// Parameters for the generic page fetch endpoint
pub fn scrape_params(api_key: &ApiKey, request: &ScrapeRequest) -> QueryParams {
    QueryParams::from_entries(
        api_key,
        [
            ("url", Some(request.url.clone())),
            (
                "output_format",
                request.output_format.map(|f| f.as_str().to_string()),
            ),
            ("country_code", non_empty(&request.country_code)),
            (
                "device_type",
                request.device_type.map(|d| d.as_str().to_string()),
            ),
            ("premium", request.premium.map(bool_param)),
            ("render", request.render.map(bool_param)),
            ("keep_headers", request.keep_headers.map(bool_param)),
        ],
    )
}

/// Parameters for the Google search endpoint; every argument keeps its name
pub fn google_search_params(api_key: &ApiKey, request: &GoogleSearchRequest) -> QueryParams {
    QueryParams::from_entries(
        api_key,
        [
            ("query", Some(request.query.clone())),
            ("country_code", request.country_code.clone()),
            ("tld", request.tld.clone()),
            (
                "output_format",
                request.output_format.map(|f| f.as_str().to_string()),
            ),
            ("uule", request.uule.clone()),
            ("num", request.num.map(|n| n.to_string())),
            ("hl", request.hl.clone()),
            ("gl", request.gl.clone()),
            ("ie", request.ie.clone()),
            ("oe", request.oe.clone()),
            ("start", request.start.map(|n| n.to_string())),
        ],
    )
}

/// Parameters for the Amazon search endpoint, with [`AMAZON_SEARCH_RENAMES`] applied
pub fn amazon_search_params(api_key: &ApiKey, request: &AmazonSearchRequest) -> QueryParams {
    QueryParams::from_entries(
        api_key,
        [
            ("query", Some(request.query.clone())),
            ("country_code", request.country_code.clone()),
            ("tld", request.tld.clone()),
            (
                "output_format",
                request.output_format.map(|f| f.as_str().to_string()),
            ),
            ("page", request.page.map(|n| n.to_string())),
        ],
    )
    .renamed(AMAZON_SEARCH_RENAMES)
}

/// Join a base URL and an endpoint path with exactly one `/`
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// The page endpoint drops empty strings as well as absent values
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{DeviceType, PageFormat, StructuredFormat};

    fn key() -> ApiKey {
        ApiKey::new("test_api_key").unwrap()
    }

    #[test]
    fn test_scrape_params_minimal() {
        let params = scrape_params(&key(), &ScrapeRequest::new("http://example.com"));

        assert_eq!(
            params.pairs(),
            &[
                ("api_key", "test_api_key".to_string()),
                ("url", "http://example.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_scrape_params_all_options() {
        let request = ScrapeRequest {
            output_format: Some(PageFormat::Text),
            country_code: Some("us".to_string()),
            device_type: Some(DeviceType::Mobile),
            premium: Some(true),
            render: Some(false),
            keep_headers: Some(true),
            ..ScrapeRequest::new("http://example.com")
        };
        let params = scrape_params(&key(), &request);

        assert_eq!(
            params.keys(),
            vec![
                "api_key",
                "url",
                "output_format",
                "country_code",
                "device_type",
                "premium",
                "render",
                "keep_headers"
            ]
        );
        assert_eq!(params.get("output_format"), Some("text"));
        assert_eq!(params.get("device_type"), Some("mobile"));
        assert_eq!(params.get("premium"), Some("true"));
        assert_eq!(params.get("render"), Some("false"));
        assert_eq!(params.get("keep_headers"), Some("true"));
    }

    #[test]
    fn test_scrape_params_skip_empty_country_code() {
        let request = ScrapeRequest {
            country_code: Some(String::new()),
            ..ScrapeRequest::new("http://example.com")
        };
        assert!(!scrape_params(&key(), &request).contains("country_code"));
    }

    #[test]
    fn test_google_params_keep_their_names() {
        let request = GoogleSearchRequest {
            country_code: Some("us".to_string()),
            tld: Some("com".to_string()),
            output_format: Some(StructuredFormat::Json),
            num: Some(5),
            start: Some(10),
            ..GoogleSearchRequest::new("langchain")
        };
        let params = google_search_params(&key(), &request);

        assert_eq!(
            params.keys(),
            vec![
                "api_key",
                "query",
                "country_code",
                "tld",
                "output_format",
                "num",
                "start"
            ]
        );
        assert_eq!(params.get("num"), Some("5"));
        assert_eq!(params.get("start"), Some("10"));
        assert!(!params.contains("country"));
        assert!(!params.contains("uule"));
    }

    #[test]
    fn test_amazon_params_rename_country_code() {
        let request = AmazonSearchRequest {
            country_code: Some("uk".to_string()),
            tld: Some("co.uk".to_string()),
            page: Some(2),
            ..AmazonSearchRequest::new("shoes")
        };
        let params = amazon_search_params(&key(), &request);

        assert_eq!(
            params.pairs(),
            &[
                ("api_key", "test_api_key".to_string()),
                ("query", "shoes".to_string()),
                ("country", "uk".to_string()),
                ("tld", "co.uk".to_string()),
                ("page", "2".to_string()),
            ]
        );
        assert!(!params.contains("country_code"));
        assert!(!params.contains("output_format"));
    }

    #[test]
    fn test_amazon_params_without_country() {
        let params = amazon_search_params(&key(), &AmazonSearchRequest::new("monitor"));
        assert_eq!(params.keys(), vec!["api_key", "query"]);
    }

    #[test]
    fn test_bool_param() {
        assert_eq!(bool_param(true), "true");
        assert_eq!(bool_param(false), "false");
    }

    #[test]
    fn test_debug_hides_credential() {
        let params = scrape_params(&key(), &ScrapeRequest::new("http://example.com"));
        let rendered = format!("{:?}", params);
        assert!(rendered.contains("api_key"));
        assert!(!rendered.contains("test_api_key"));
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("https://api.scraperapi.com/structured/", GOOGLE_SEARCH_PATH),
            "https://api.scraperapi.com/structured/google/search"
        );
        assert_eq!(
            endpoint_url("http://127.0.0.1:1234", "/amazon/search"),
            "http://127.0.0.1:1234/amazon/search"
        );
    }
}
