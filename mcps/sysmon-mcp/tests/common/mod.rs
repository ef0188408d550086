//! Shared fixtures for sysmon-mcp integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use sysmon_mcp::types::{
    BatteryReport, BatterySnapshot, BatteryState, CpuUsage, GpuReport, InterfaceCounters,
    KillOutcome, LaunchOutcome, MemoryStats, NetworkStats, PartitionUsage, ProcessSnapshot,
    SystemInfo,
};
use sysmon_mcp::{Config, SysmonMcpServer, SystemProbe, ToolError, ToolResult};
use tokio_util::sync::CancellationToken;

/// Deterministic probe with canned readings
pub struct FixtureProbe {
    pub processes: Vec<ProcessSnapshot>,
    pub batteries: Vec<BatterySnapshot>,
    /// Pids that exist and may be killed
    pub live_pids: Vec<u32>,
    /// Delay before `cpu_usage` answers
    pub cpu_delay: Duration,
    pub launches: Mutex<Vec<(String, Vec<String>)>>,
    pub kills: AtomicUsize,
}

impl Default for FixtureProbe {
    fn default() -> Self {
        Self {
            processes: vec![
                process(1, "init", 10.0),
                process(2, "compiler", 50.0),
                process(3, "browser", 30.0),
                process(4, "shell", 5.0),
            ],
            batteries: vec![],
            live_pids: vec![1, 2, 3, 4],
            cpu_delay: Duration::ZERO,
            launches: Mutex::new(Vec::new()),
            kills: AtomicUsize::new(0),
        }
    }
}

pub fn process(pid: u32, name: &str, cpu: f32) -> ProcessSnapshot {
    ProcessSnapshot {
        pid,
        name: name.to_string(),
        cpu_percent: cpu,
    }
}

pub fn battery(index: usize, percent: f64, state: BatteryState) -> BatterySnapshot {
    BatterySnapshot {
        index,
        vendor: None,
        model: None,
        design_capacity_wh: 50.0,
        full_capacity_wh: 50.0,
        current_capacity_wh: 50.0 * percent / 100.0,
        charge_percent: percent,
        state,
        voltage_v: 12.0,
    }
}

#[async_trait]
impl SystemProbe for FixtureProbe {
    async fn cpu_usage(&self, ct: &CancellationToken) -> ToolResult<CpuUsage> {
        tokio::select! {
            _ = ct.cancelled() => Err(ToolError::Cancelled),
            _ = tokio::time::sleep(self.cpu_delay) => Ok(CpuUsage {
                cpu_percent: 12.5,
                sample_window_ms: 1000,
            }),
        }
    }

    async fn memory_stats(&self, _ct: &CancellationToken) -> ToolResult<MemoryStats> {
        Ok(MemoryStats {
            total_bytes: 1000,
            used_bytes: 250,
            free_bytes: 750,
            available_bytes: 750,
            usage_percent: 25.0,
        })
    }

    async fn network_stats(&self, _ct: &CancellationToken) -> ToolResult<NetworkStats> {
        Ok(NetworkStats {
            interfaces: vec![InterfaceCounters {
                name: "eth0".to_string(),
                bytes_sent: 100,
                bytes_received: 200,
            }],
        })
    }

    async fn battery_status(&self, _ct: &CancellationToken) -> ToolResult<BatteryReport> {
        Ok(BatteryReport {
            batteries: self.batteries.clone(),
        })
    }

    async fn gpu_usage(&self, _ct: &CancellationToken) -> ToolResult<GpuReport> {
        Err(ToolError::MetricUnavailable("no GPU utility".to_string()))
    }

    async fn system_info(&self, _ct: &CancellationToken) -> ToolResult<SystemInfo> {
        Ok(SystemInfo {
            platform: "TestOS".to_string(),
            platform_version: "1.0".to_string(),
            kernel_version: "6.0".to_string(),
            hostname: "fixture".to_string(),
            arch: "x86_64".to_string(),
            uptime_seconds: 7200,
            ram_used_percent: 25.0,
            disks: vec![partition("/")],
        })
    }

    async fn disk_usage(&self, path: &str, _ct: &CancellationToken) -> ToolResult<PartitionUsage> {
        if path.starts_with('/') {
            Ok(partition("/"))
        } else {
            Err(ToolError::PathNotFound(path.to_string()))
        }
    }

    async fn processes(&self, _ct: &CancellationToken) -> ToolResult<Vec<ProcessSnapshot>> {
        Ok(self.processes.clone())
    }

    async fn kill_process(&self, pid: u32) -> ToolResult<KillOutcome> {
        self.kills.fetch_add(1, Ordering::SeqCst);
        if self.live_pids.contains(&pid) {
            Ok(KillOutcome {
                pid,
                signal: "SIGKILL".to_string(),
            })
        } else {
            Err(ToolError::ProcessNotFound(pid))
        }
    }

    async fn launch_process(&self, command: &str, args: &[String]) -> ToolResult<LaunchOutcome> {
        if let Ok(mut launches) = self.launches.lock() {
            launches.push((command.to_string(), args.to_vec()));
        }
        Ok(LaunchOutcome {
            pid: 4242,
            command: command.to_string(),
            args: args.to_vec(),
        })
    }
}

pub fn partition(mount: &str) -> PartitionUsage {
    PartitionUsage {
        mount_point: mount.to_string(),
        filesystem: "ext4".to_string(),
        total_bytes: 1000,
        used_bytes: 400,
        available_bytes: 600,
        used_percent: 40.0,
    }
}

/// Server over `probe` with default config
pub fn server_with(probe: Arc<FixtureProbe>) -> SysmonMcpServer {
    server_with_config(Config::default(), probe)
}

pub fn server_with_config(config: Config, probe: Arc<FixtureProbe>) -> SysmonMcpServer {
    SysmonMcpServer::with_parts(config, probe).unwrap()
}
