//! Parameter types for Sysmon MCP tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Arguments for tools that take none
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct NoParams {}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListProcessesParams {
    #[schemars(description = "Number of top CPU consumers to return (default: 5 when absent or <= 0)")]
    #[serde(default)]
    pub limit: Option<i64>,

    #[schemars(description = "Return every process in pid order instead of the top consumers")]
    #[serde(default)]
    pub all: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct KillProcessParams {
    #[schemars(description = "Process ID to terminate")]
    pub pid: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LaunchProcessParams {
    #[schemars(description = "Executable to start (looked up in PATH, not run through a shell)")]
    pub command: String,

    #[schemars(description = "Arguments passed to the executable")]
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListFilesParams {
    #[schemars(description = "Directory whose entries to list")]
    pub path: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct DiskUsageParams {
    #[schemars(description = "Any path on the partition to inspect (default: filesystem root)")]
    #[serde(default)]
    pub path: Option<String>,
}
