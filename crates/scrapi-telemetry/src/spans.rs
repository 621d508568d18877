//! Span creation helpers for tool executions and outbound requests

use crate::attributes::*;

/// How a tool call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolOutcome {
    /// The remote call succeeded and its body was returned
    Success,
    /// The remote call failed and was reported as an error observation
    Failure,
    /// Arguments were rejected before any request was sent
    Rejected,
}

impl ToolOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolOutcome::Success => "success",
            ToolOutcome::Failure => "failure",
            ToolOutcome::Rejected => "rejected",
        }
    }
}

/// Attributes for tracing a tool call
///
/// Only argument *names* are recorded; values may contain search terms or
/// URLs the caller does not want in logs.
#[derive(Debug, Clone)]
pub struct ToolSpanAttributes {
    pub tool_name: String,
    pub tool_call_id: String,
    pub invocation_id: String,
    pub arg_names: Vec<String>,
    pub outcome: ToolOutcome,
}

/// Create and record a span for a tool execution.
pub fn trace_tool_call(attrs: ToolSpanAttributes) {
    let arg_names = attrs.arg_names.join(",");
    let span = tracing::info_span!(
        "execute_tool",
        system = SYSTEM_NAME,
        { TOOL_NAME } = %attrs.tool_name,
        { TOOL_CALL_ID } = %attrs.tool_call_id,
        { TOOL_INVOCATION_ID } = %attrs.invocation_id,
        { TOOL_ARG_NAMES } = %arg_names,
        { TOOL_OUTCOME } = attrs.outcome.as_str(),
    );

    // Enter and immediately exit the span (it's recorded)
    let _guard = span.enter();
}

/// Span wrapping one outbound request to the scraping service.
///
/// `endpoint` must be the URL without its query string.
pub fn request_span(endpoint: &str, blocking: bool) -> tracing::Span {
    let mode = if blocking { "blocking" } else { "async" };
    tracing::debug_span!(
        "scraperapi_request",
        system = SYSTEM_NAME,
        { HTTP_ENDPOINT } = %endpoint,
        { HTTP_MODE } = mode,
    )
}
