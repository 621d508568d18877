//! Logging and tracing for Scrapi tools
//!
//! - `init_telemetry` installs a `tracing` subscriber (text or JSON)
//! - `trace_tool_call` / `request_span` record tool and HTTP activity

pub mod attributes;
mod tracer;
pub mod spans;

pub use spans::{ToolOutcome, ToolSpanAttributes, request_span, trace_tool_call};
pub use tracer::{LogFormat, init_telemetry, init_telemetry_with, try_init_telemetry};
