//! Core traits and types for Scrapi
//!
//! This crate provides the seams shared by every ScraperAPI tool: the `Tool`
//! trait an agent orchestrator calls, tool declarations and schemas, the
//! API credential, and workspace configuration.

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod schema;
pub mod traits;

// Re-exports
pub use auth::{API_KEY_ENV_VAR, API_KEY_FIELD, ApiKey};
pub use config::{SCRAPERAPI_BASE_URL, SCRAPERAPI_STRUCTURED_BASE_URL, ScrapiConfig};
pub use context::{DefaultToolContext, ToolContext};
pub use error::{Error, Result};
pub use schema::generate_schema;
pub use traits::{Tool, ToolDeclaration, ToolResponse, Toolset};
