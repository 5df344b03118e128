//! Tool trait and types

use crate::error::Result;
use crate::protocol::{CallToolResult, ToolDescriptor};
use async_trait::async_trait;
use serde_json::Value;

/// Output of a tool invocation: a human-readable text line plus the
/// structured payload widgets consume.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Text rendered as the tool result's content part
    pub text: String,
    /// Structured payload mirrored into `structuredContent`
    pub structured: Value,
}

impl ToolOutput {
    /// Create output with distinct text and structured payloads
    pub fn new(text: impl Into<String>, structured: Value) -> Self {
        Self {
            text: text.into(),
            structured,
        }
    }

    /// Create output whose text part is the JSON encoding of the
    /// structured payload
    pub fn from_structured(structured: Value) -> Self {
        Self {
            text: structured.to_string(),
            structured,
        }
    }
}

impl From<ToolOutput> for CallToolResult {
    fn from(output: ToolOutput) -> Self {
        CallToolResult::new(output.text, output.structured)
    }
}

/// Main trait all tools implement
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name as advertised to callers
    fn name(&self) -> &str;

    /// Short description of the tool
    fn description(&self) -> &str;

    /// JSON schema of the accepted arguments
    fn input_schema(&self) -> Value;

    /// JSON schema of the structured output, when the tool publishes one
    fn output_schema(&self) -> Option<Value> {
        None
    }

    /// Execute the tool against its argument object
    async fn call(&self, args: &Value) -> Result<ToolOutput>;

    /// Descriptor for `tools/list`
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
            output_schema: self.output_schema(),
        }
    }
}
