//! Span field names

pub const SYSTEM_NAME: &str = "scrapi";

pub const TOOL_NAME: &str = "tool.name";
pub const TOOL_CALL_ID: &str = "tool.call_id";
pub const TOOL_INVOCATION_ID: &str = "tool.invocation_id";
pub const TOOL_OUTCOME: &str = "tool.outcome";
pub const TOOL_ARG_NAMES: &str = "tool.arg_names";

pub const HTTP_ENDPOINT: &str = "http.endpoint";
pub const HTTP_MODE: &str = "http.mode";
