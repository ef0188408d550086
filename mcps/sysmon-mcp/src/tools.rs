//! The tool catalog
//!
//! One handler per tool. Arguments are validated here, before the probe is
//! touched, so a rejected call never has side effects.

use crate::envelope::ResponseEnvelope;
use crate::error::{ToolError, ToolResult};
use crate::params::{
    DiskUsageParams, KillProcessParams, LaunchProcessParams, ListFilesParams,
    ListProcessesParams, NoParams,
};
use crate::process::{checked_pid, effective_limit, rank_by_cpu};
use crate::registry::{RegistryError, ToolContext, ToolRegistry};
use crate::types::ProcessList;

#[cfg(windows)]
const DEFAULT_DISK_PATH: &str = "C:\\";
#[cfg(not(windows))]
const DEFAULT_DISK_PATH: &str = "/";

/// Build the registry holding every tool this server exposes
pub fn build_registry() -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();

    registry.register(
        "get_cpu_usage",
        "Get overall CPU usage as a percentage, sampled over a short window",
        get_cpu_usage,
    )?;
    registry.register(
        "get_memory_usage",
        "Get total, used and free memory in bytes with the usage percentage",
        get_memory_usage,
    )?;
    registry.register(
        "get_network_stats",
        "Get cumulative bytes sent and received per network interface",
        get_network_stats,
    )?;
    registry.register(
        "get_battery_status",
        "Get charge percentage and state of each battery",
        get_battery_status,
    )?;
    registry.register(
        "get_gpu_usage",
        "Get raw output of the platform GPU diagnostic utility",
        get_gpu_usage,
    )?;
    registry.register(
        "get_system_info",
        "Get OS, version, architecture, uptime, RAM usage and per-partition disk usage",
        get_system_info,
    )?;
    registry.register(
        "get_disk_usage",
        "Get usage of the disk partition holding a path",
        get_disk_usage,
    )?;
    registry.register(
        "list_processes",
        "List the top CPU-consuming processes, or every process with all=true",
        list_processes,
    )?;
    registry.register(
        "kill_process",
        "Forcibly terminate a process by PID",
        kill_process,
    )?;
    registry.register(
        "launch_process",
        "Start a program with arguments without waiting for it to finish",
        launch_process,
    )?;
    registry.register(
        "list_files",
        "List the names of the entries directly inside a directory",
        list_files,
    )?;

    Ok(registry)
}

// ============================================================================
// Telemetry
// ============================================================================

async fn get_cpu_usage(_: NoParams, ctx: ToolContext) -> ToolResult<ResponseEnvelope> {
    let usage = ctx.probe.cpu_usage(&ctx.ct).await?;
    ResponseEnvelope::from_data(&usage)
}

async fn get_memory_usage(_: NoParams, ctx: ToolContext) -> ToolResult<ResponseEnvelope> {
    let stats = ctx.probe.memory_stats(&ctx.ct).await?;
    ResponseEnvelope::from_data(&stats)
}

async fn get_network_stats(_: NoParams, ctx: ToolContext) -> ToolResult<ResponseEnvelope> {
    let stats = ctx.probe.network_stats(&ctx.ct).await?;
    ResponseEnvelope::from_data(&stats)
}

async fn get_battery_status(_: NoParams, ctx: ToolContext) -> ToolResult<ResponseEnvelope> {
    let report = ctx.probe.battery_status(&ctx.ct).await?;
    ResponseEnvelope::from_data(&report)
}

async fn get_gpu_usage(_: NoParams, ctx: ToolContext) -> ToolResult<ResponseEnvelope> {
    let report = ctx.probe.gpu_usage(&ctx.ct).await?;
    ResponseEnvelope::from_data(&report)
}

async fn get_system_info(_: NoParams, ctx: ToolContext) -> ToolResult<ResponseEnvelope> {
    let info = ctx.probe.system_info(&ctx.ct).await?;
    ResponseEnvelope::from_data(&info)
}

async fn get_disk_usage(params: DiskUsageParams, ctx: ToolContext) -> ToolResult<ResponseEnvelope> {
    let path = params.path.unwrap_or_else(|| DEFAULT_DISK_PATH.to_string());
    if path.is_empty() {
        return Err(ToolError::InvalidArguments("path must not be empty".to_string()));
    }
    let usage = ctx.probe.disk_usage(&path, &ctx.ct).await?;
    ResponseEnvelope::from_data(&usage)
}

// ============================================================================
// Processes
// ============================================================================

async fn list_processes(
    params: ListProcessesParams,
    ctx: ToolContext,
) -> ToolResult<ResponseEnvelope> {
    let all = params.all.unwrap_or(false);
    let limit = effective_limit(params.limit, ctx.config.processes.default_limit);

    let processes = ctx.probe.processes(&ctx.ct).await?;
    let list = if all {
        ProcessList {
            ranked: false,
            processes,
        }
    } else {
        ProcessList {
            ranked: true,
            processes: rank_by_cpu(processes, limit),
        }
    };

    ResponseEnvelope::from_data(&list)
}

async fn kill_process(params: KillProcessParams, ctx: ToolContext) -> ToolResult<ResponseEnvelope> {
    let pid = checked_pid(params.pid)?;
    if ctx.ct.is_cancelled() {
        return Err(ToolError::Cancelled);
    }

    tracing::info!(pid, "Killing process");
    let outcome = ctx.probe.kill_process(pid).await?;
    ResponseEnvelope::from_data(&outcome)
}

async fn launch_process(
    params: LaunchProcessParams,
    ctx: ToolContext,
) -> ToolResult<ResponseEnvelope> {
    if params.command.trim().is_empty() {
        return Err(ToolError::InvalidArguments("command must not be empty".to_string()));
    }
    if ctx.ct.is_cancelled() {
        return Err(ToolError::Cancelled);
    }

    let outcome = ctx.probe.launch_process(&params.command, &params.args).await?;
    ResponseEnvelope::from_data(&outcome)
}

// ============================================================================
// Files
// ============================================================================

async fn list_files(params: ListFilesParams, ctx: ToolContext) -> ToolResult<ResponseEnvelope> {
    let listing = ctx.files.list(&params.path).await?;
    ResponseEnvelope::from_data(&listing)
}
