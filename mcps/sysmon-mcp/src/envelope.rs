//! Normalized tool responses
//!
//! A [`ResponseEnvelope`] is either a success (text + optional structured
//! value) or a failure (text + error detail), never both. Success text is
//! rendered from the structured value through [`HumanText`], so the two
//! views always agree.

use mcp_common::{error_result, structured_success, text_success, CallToolResult};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ErrorKind, ToolError, ToolResult};

/// Render a result value with its fixed per-tool text template
pub trait HumanText {
    fn human_text(&self) -> String;
}

/// Error half of an envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    pub message: String,
}

/// Success or failure of one invocation, in both text and structured form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    human_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    structured_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorDetail>,
}

impl ResponseEnvelope {
    /// Build a success envelope from a typed result
    pub fn from_data<T>(data: &T) -> ToolResult<Self>
    where
        T: Serialize + HumanText,
    {
        let structured = serde_json::to_value(data)?;
        Self::success(data.human_text(), Some(structured))
    }

    /// Build a success envelope; empty text is rejected
    pub fn success(human_text: String, structured_data: Option<Value>) -> ToolResult<Self> {
        if human_text.is_empty() {
            return Err(ToolError::Internal(
                "tool produced an empty response".to_string(),
            ));
        }
        Ok(Self {
            human_text,
            structured_data,
            error: None,
        })
    }

    pub fn failure(err: &ToolError) -> Self {
        Self {
            human_text: err.to_string(),
            structured_data: None,
            error: Some(ErrorDetail {
                kind: err.kind(),
                message: err.to_string(),
            }),
        }
    }

    /// Fold a handler outcome into an envelope
    pub fn from_result(result: ToolResult<Self>) -> Self {
        result.unwrap_or_else(|err| Self::failure(&err))
    }

    pub fn human_text(&self) -> &str {
        &self.human_text
    }

    pub fn structured_data(&self) -> Option<&Value> {
        self.structured_data.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorDetail> {
        self.error.as_ref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Convert into the MCP wire result
    pub fn into_call_tool_result(self) -> CallToolResult {
        match (self.error, self.structured_data) {
            (Some(_), _) => error_result(self.human_text),
            (None, Some(data)) => structured_success(self.human_text, data),
            (None, None) => text_success(self.human_text),
        }
    }
}

impl From<ResponseEnvelope> for CallToolResult {
    fn from(envelope: ResponseEnvelope) -> Self {
        envelope.into_call_tool_result()
    }
}
