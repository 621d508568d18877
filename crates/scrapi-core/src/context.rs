/// Tool context provided during tool execution
pub trait ToolContext: Send + Sync {
    fn function_call_id(&self) -> &str;
    fn invocation_id(&self) -> &str;
}

/// Default implementation of ToolContext
#[derive(Debug, Clone)]
pub struct DefaultToolContext {
    function_call_id: String,
    invocation_id: String,
}

impl DefaultToolContext {
    pub fn new(function_call_id: String, invocation_id: String) -> Self {
        Self {
            function_call_id,
            invocation_id,
        }
    }

    /// Context with fresh random ids, for callers outside an agent run
    pub fn generate() -> Self {
        Self::new(
            format!("call-{}", uuid::Uuid::new_v4()),
            format!("inv-{}", uuid::Uuid::new_v4()),
        )
    }
}

impl ToolContext for DefaultToolContext {
    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }

    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }
}
