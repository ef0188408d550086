//! MCP server implementation for host telemetry and process control

use std::sync::Arc;
use std::time::Instant;

use mcp_common::{
    async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError,
};
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    RoleServer, ServerHandler,
};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::envelope::ResponseEnvelope;
use crate::error::{ErrorKind, ToolError};
use crate::files::FileLister;
use crate::probe::{HostProbe, SystemProbe};
use crate::registry::{ToolContext, ToolRegistry};
use crate::tools::build_registry;

const DESCRIPTION: &str = "System Monitor MCP Server - reports CPU, memory, network, battery, \
     GPU, disk and OS telemetry, and can list, kill and launch processes and list directories.";

/// The main Sysmon MCP Server
#[derive(Clone)]
pub struct SysmonMcpServer {
    registry: Arc<ToolRegistry>,
    probe: Arc<dyn SystemProbe>,
    files: Arc<FileLister>,
    config: Arc<Config>,
}

impl SysmonMcpServer {
    /// Build a server from the config on disk, probing the local host
    pub fn try_new() -> anyhow::Result<Self> {
        let config = Config::load()?;
        let probe = Arc::new(HostProbe::new(&config));
        Self::with_parts(config, probe)
    }

    /// Build a server around an explicit config and probe
    pub fn with_parts(config: Config, probe: Arc<dyn SystemProbe>) -> anyhow::Result<Self> {
        let registry = build_registry()?;
        tracing::debug!(tools = registry.len(), "Registered tools");

        Ok(Self {
            registry: Arc::new(registry),
            probe,
            files: Arc::new(FileLister::from_config(&config.files)),
            config: Arc::new(config),
        })
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.registry.tools()
    }

    /// Run one tool to completion, cancellation or timeout
    ///
    /// Never fails: every outcome, including an unknown tool name, comes back
    /// as an envelope.
    pub async fn invoke(&self, name: &str, args: Value, ct: CancellationToken) -> ResponseEnvelope {
        let ct = ct.child_token();
        let ctx = ToolContext {
            probe: self.probe.clone(),
            files: self.files.clone(),
            config: self.config.clone(),
            ct: ct.clone(),
        };
        let timeout = self.config.timeouts.tool_timeout();
        let started = Instant::now();
        let deadline = async {
            match timeout {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending::<()>().await,
            }
        };

        tracing::info!(tool = name, "Tool call");
        tracing::debug!(tool = name, %args, "Tool arguments");

        let result = tokio::select! {
            result = self.registry.dispatch(name, args, ctx) => result,
            _ = ct.cancelled() => Err(ToolError::Cancelled),
            _ = deadline => {
                ct.cancel();
                tracing::warn!(tool = name, ?timeout, "Tool call timed out");
                Err(ToolError::Cancelled)
            }
        };

        let envelope = ResponseEnvelope::from_result(result);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match envelope.error() {
            None => tracing::debug!(tool = name, elapsed_ms, "Tool call succeeded"),
            Some(err) => tracing::warn!(
                tool = name,
                elapsed_ms,
                kind = ?err.kind,
                error = %err.message,
                "Tool call failed"
            ),
        }
        envelope
    }
}

impl ServerHandler for SysmonMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(DESCRIPTION.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        let envelope = self.invoke(&request.name, args, context.ct).await;
        Ok(envelope.into_call_tool_result())
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for SysmonMcpServer {
    fn server_name(&self) -> &str {
        "sysmon"
    }

    fn server_description(&self) -> Option<&str> {
        Some(DESCRIPTION)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools()
    }

    async fn call_tool(
        &self,
        name: &str,
        params: Value,
        ct: CancellationToken,
    ) -> EmbeddableResult<CallToolResult> {
        let envelope = self.invoke(name, params, ct).await;
        if envelope.error_kind() == Some(ErrorKind::UnknownTool) {
            return Err(EmbeddableError::ToolNotFound(name.to_string()));
        }
        Ok(envelope.into_call_tool_result())
    }
}
