//! Sysmon MCP Server
//!
//! Reports host telemetry (CPU, memory, network, battery, GPU, disk, OS) and
//! offers a small set of process and file controls to MCP clients over
//! stdio. Every call answers with human-readable text and, on success, a
//! structured JSON value.
//!
//! # Tools
//!
//! - `get_cpu_usage`, `get_memory_usage`, `get_network_stats`
//! - `get_battery_status`, `get_gpu_usage`
//! - `get_system_info`, `get_disk_usage`
//! - `list_processes`, `kill_process`, `launch_process`
//! - `list_files`

pub mod cancel;
pub mod config;
pub mod envelope;
pub mod error;
pub mod files;
pub mod info;
pub mod params;
pub mod probe;
pub mod process;
pub mod registry;
pub mod server;
pub mod tools;
pub mod types;

pub use config::Config;
pub use envelope::{HumanText, ResponseEnvelope};
pub use error::{ErrorKind, ToolError, ToolResult};
pub use probe::{HostProbe, SystemProbe};
pub use server::SysmonMcpServer;
