//! Host access seam
//!
//! Tool handlers talk to the machine only through [`SystemProbe`]. The
//! server uses [`HostProbe`]; tests substitute a fixture.

mod host;

pub use host::HostProbe;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ToolResult;
use crate::types::{
    BatteryReport, CpuUsage, GpuReport, KillOutcome, LaunchOutcome, MemoryStats, NetworkStats,
    PartitionUsage, ProcessSnapshot, SystemInfo,
};

/// Telemetry and process control for one host
#[async_trait]
pub trait SystemProbe: Send + Sync {
    async fn cpu_usage(&self, ct: &CancellationToken) -> ToolResult<CpuUsage>;

    async fn memory_stats(&self, ct: &CancellationToken) -> ToolResult<MemoryStats>;

    async fn network_stats(&self, ct: &CancellationToken) -> ToolResult<NetworkStats>;

    async fn battery_status(&self, ct: &CancellationToken) -> ToolResult<BatteryReport>;

    async fn gpu_usage(&self, ct: &CancellationToken) -> ToolResult<GpuReport>;

    async fn system_info(&self, ct: &CancellationToken) -> ToolResult<SystemInfo>;

    /// Usage of the partition holding `path`
    async fn disk_usage(&self, path: &str, ct: &CancellationToken) -> ToolResult<PartitionUsage>;

    /// Every process with its CPU usage, in pid order
    async fn processes(&self, ct: &CancellationToken) -> ToolResult<Vec<ProcessSnapshot>>;

    async fn kill_process(&self, pid: u32) -> ToolResult<KillOutcome>;

    async fn launch_process(&self, command: &str, args: &[String]) -> ToolResult<LaunchOutcome>;
}
