use super::{Result, ToolContext};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Tool trait - abstraction for callable tools
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the name of the tool
    fn name(&self) -> &str;

    /// Returns a description of what the tool does
    fn description(&self) -> &str;

    /// Returns the JSON schema for the tool's parameters
    fn schema(&self) -> serde_json::Value;

    /// Name, description and input schema as published to an orchestrator
    fn declaration(&self) -> ToolDeclaration {
        ToolDeclaration {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.schema(),
        }
    }

    /// Executes the tool with given parameters
    async fn execute(
        &self,
        ctx: Arc<dyn ToolContext>,
        params: serde_json::Value,
    ) -> Result<ToolResponse>;
}

/// Toolset trait - a named group of tools sharing configuration
#[async_trait]
pub trait Toolset: Send + Sync {
    fn name(&self) -> &str;

    async fn get_tools(&self) -> Result<Vec<Arc<dyn Tool>>>;
}

/// Tool execution response
#[derive(Debug, Clone)]
pub struct ToolResponse {
    pub result: serde_json::Value,
}

impl ToolResponse {
    /// Response carrying a plain text observation
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            result: serde_json::Value::String(text.into()),
        }
    }

    /// The observation text, if this response carries one
    pub fn as_text(&self) -> Option<&str> {
        self.result.as_str()
    }
}

/// What an orchestrator needs to decide when and how to call a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}
