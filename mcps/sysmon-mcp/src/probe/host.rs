//! [`SystemProbe`] backed by the local machine

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::SystemProbe;
use crate::cancel::run_blocking;
use crate::config::{Config, GpuConfig};
use crate::error::ToolResult;
use crate::info;
use crate::process;
use crate::types::{
    BatteryReport, CpuUsage, GpuReport, KillOutcome, LaunchOutcome, MemoryStats, NetworkStats,
    PartitionUsage, ProcessSnapshot, SystemInfo,
};

#[derive(Debug, Clone)]
pub struct HostProbe {
    cpu_window: Duration,
    gpu: GpuConfig,
}

impl HostProbe {
    pub fn new(config: &Config) -> Self {
        Self {
            cpu_window: config.cpu.sample_window(),
            gpu: config.gpu.clone(),
        }
    }
}

#[async_trait]
impl SystemProbe for HostProbe {
    async fn cpu_usage(&self, ct: &CancellationToken) -> ToolResult<CpuUsage> {
        info::cpu::get_cpu_usage(self.cpu_window, ct).await
    }

    async fn memory_stats(&self, ct: &CancellationToken) -> ToolResult<MemoryStats> {
        run_blocking(ct, || Ok(info::memory::get_memory_stats())).await
    }

    async fn network_stats(&self, ct: &CancellationToken) -> ToolResult<NetworkStats> {
        run_blocking(ct, || Ok(info::network::get_network_stats())).await
    }

    async fn battery_status(&self, ct: &CancellationToken) -> ToolResult<BatteryReport> {
        run_blocking(ct, info::battery::get_battery_status).await
    }

    async fn gpu_usage(&self, ct: &CancellationToken) -> ToolResult<GpuReport> {
        info::gpu::get_gpu_usage(&self.gpu, ct).await
    }

    async fn system_info(&self, ct: &CancellationToken) -> ToolResult<SystemInfo> {
        run_blocking(ct, || Ok(info::system::get_system_info())).await
    }

    async fn disk_usage(&self, path: &str, ct: &CancellationToken) -> ToolResult<PartitionUsage> {
        let path = PathBuf::from(path);
        run_blocking(ct, move || info::system::get_disk_usage(&path)).await
    }

    async fn processes(&self, ct: &CancellationToken) -> ToolResult<Vec<ProcessSnapshot>> {
        process::list_processes(ct).await
    }

    async fn kill_process(&self, pid: u32) -> ToolResult<KillOutcome> {
        process::kill_process(pid)
    }

    async fn launch_process(&self, command: &str, args: &[String]) -> ToolResult<LaunchOutcome> {
        process::launch_process(command, args)
    }
}
