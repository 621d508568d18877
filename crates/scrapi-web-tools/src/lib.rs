//! ScraperAPI request wrappers and agent tools.
//!
//! Two layers:
//!
//! - **Wrappers** ([`ScraperApiWrapper`], [`ScraperApiStructuredWrapper`])
//!   hold the API key, turn typed requests into query strings and issue a
//!   single GET, blocking or async. Failures are [`ScraperApiError`]s.
//! - **Tools** ([`ScraperApiTool`], [`ScraperApiGoogleSearchTool`],
//!   [`ScraperApiAmazonSearchTool`]) publish a name, description and input
//!   schema, validate arguments, and return either the response body or an
//!   `"Error: <message>"` string.
//!
//! [`ScraperApiToolkit`] builds all three tools over one shared transport.

pub mod error;
pub mod params;
pub mod request;
mod structured;
mod toolkit;
pub mod tools;
mod transport;
mod wrapper;

pub use error::{Result, ScraperApiError};
pub use params::{AMAZON_SEARCH_PATH, AMAZON_SEARCH_RENAMES, GOOGLE_SEARCH_PATH, QueryParams};
pub use request::{
    AmazonSearchRequest, DeviceType, GoogleSearchRequest, PageFormat, ScrapeRequest,
    StructuredFormat, ValidateInput,
};
pub use scrapi_core::{SCRAPERAPI_BASE_URL, SCRAPERAPI_STRUCTURED_BASE_URL};
pub use structured::ScraperApiStructuredWrapper;
pub use toolkit::ScraperApiToolkit;
pub use tools::{ScraperApiAmazonSearchTool, ScraperApiGoogleSearchTool, ScraperApiTool};
pub use transport::HttpTransport;
pub use wrapper::ScraperApiWrapper;
