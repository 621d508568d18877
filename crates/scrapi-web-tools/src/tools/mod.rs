//! Tool facades exposing the wrappers to an agent orchestrator
//!
//! Each facade validates arguments into its typed request, forwards them to a
//! wrapper, and turns any wrapper failure into an `"Error: ..."` observation
//! so the calling agent always receives text.

mod amazon_search;
mod google_search;
mod scrape;

pub use amazon_search::ScraperApiAmazonSearchTool;
pub use google_search::ScraperApiGoogleSearchTool;
pub use scrape::ScraperApiTool;

use crate::error::ScraperApiError;
use crate::request::ValidateInput;
use scrapi_core::{Error, ToolContext};
use scrapi_telemetry::{ToolOutcome, ToolSpanAttributes, trace_tool_call};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Deserialize and validate tool arguments; nothing is sent on rejection
pub(crate) fn parse_input<T>(tool: &str, params: Value) -> scrapi_core::Result<T>
where
    T: DeserializeOwned + ValidateInput,
{
    let input: T =
        serde_json::from_value(params).map_err(|e| Error::invalid_input(tool, e.to_string()))?;
    input
        .validate()
        .map_err(|reason| Error::invalid_input(tool, reason))?;
    Ok(input)
}

/// Wrapper result as an observation string
pub(crate) fn into_observation(
    tool: &str,
    result: Result<String, ScraperApiError>,
) -> (String, ToolOutcome) {
    match result {
        Ok(body) => (body, ToolOutcome::Success),
        Err(e) => {
            warn!(tool = %tool, error = %e, "ScraperAPI call failed");
            (format!("Error: {}", e), ToolOutcome::Failure)
        }
    }
}

pub(crate) fn arg_names(params: &Value) -> Vec<String> {
    params
        .as_object()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default()
}

pub(crate) fn record_call(
    tool: &str,
    ctx: &dyn ToolContext,
    arg_names: Vec<String>,
    outcome: ToolOutcome,
) {
    trace_tool_call(ToolSpanAttributes {
        tool_name: tool.to_string(),
        tool_call_id: ctx.function_call_id().to_string(),
        invocation_id: ctx.invocation_id().to_string(),
        arg_names,
        outcome,
    });
}
