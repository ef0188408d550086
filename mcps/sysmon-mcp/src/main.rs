//! Sysmon MCP Server
//!
//! Host telemetry and process control via MCP.
//!
//! # Usage
//!
//! Run directly: `sysmon-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "sysmon": { "command": "./sysmon-mcp" } } }
//! ```
//!
//! Set `SYSMON_CONFIG_PATH` to load a specific config file, `RUST_LOG` to
//! adjust verbosity and `LOG_FORMAT=json` for JSON log lines on stderr.

use sysmon_mcp::SysmonMcpServer;

mcp_common::serve_stdio!(SysmonMcpServer, "sysmon_mcp");
