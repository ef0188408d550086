//! Embeddable MCP trait for in-process execution
//!
//! [`EmbeddableMcp`] lets a host application call a server's tools directly,
//! without spawning the server binary or speaking the stdio protocol.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use sysmon_mcp::SysmonMcpServer;
//! use tokio_util::sync::CancellationToken;
//!
//! let server = SysmonMcpServer::try_new()?;
//! let tools = server.list_tools();
//! let result = server
//!     .call_tool("get_cpu_usage", serde_json::json!({}), CancellationToken::new())
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Error type for embeddable MCP operations
///
/// Tool failures are not errors here: they come back as a `CallToolResult`
/// with `is_error` set. Only problems with the call itself surface as `Err`.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync`: a host may issue concurrent tool
/// calls from several tasks.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Returns the server name for identification
    ///
    /// This should match the server name used in MCP configuration files.
    fn server_name(&self) -> &str;

    /// Returns a list of all available tools
    fn list_tools(&self) -> Vec<Tool>;

    /// Executes a tool by name with the given parameters
    ///
    /// `ct` plays the role of the request's cancellation token: cancelling it
    /// abandons the in-flight call.
    async fn call_tool(
        &self,
        name: &str,
        params: Value,
        ct: CancellationToken,
    ) -> EmbeddableResult<CallToolResult>;

    /// Returns an optional description of the server
    fn server_description(&self) -> Option<&str> {
        None
    }

    /// Returns the server version, if available
    fn server_version(&self) -> Option<&str> {
        None
    }
}
