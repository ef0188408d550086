//! Result helpers for MCP tool responses
//!
//! Tools answer with two views of the same outcome: a human-readable text
//! block for the model to read, and an optional structured JSON value for
//! programmatic consumers. These helpers build the matching `CallToolResult`.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

/// Create a successful plain text response
///
/// For tools whose only output is text (e.g. raw diagnostic dumps).
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::text_success;
///
/// let result = text_success("No battery detected");
/// ```
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Create a successful response carrying both text and structured data
///
/// The text goes into the regular content list, the value into
/// `structuredContent`. MCP clients expect that value to be a JSON object,
/// so callers wrap sequences before handing them over.
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::structured_success;
///
/// let result = structured_success(
///     "CPU Usage: 12.50%",
///     serde_json::json!({ "cpu_percent": 12.5 }),
/// );
/// ```
pub fn structured_success(text: impl Into<String>, data: Value) -> CallToolResult {
    let mut result = text_success(text);
    result.structured_content = Some(data);
    result
}

/// Create a tool-level error response
///
/// The call itself succeeded at the protocol level; `is_error` tells the
/// client the tool failed and the text explains why. No structured data is
/// attached to failures.
pub fn error_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}
