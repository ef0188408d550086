//! GPU diagnostics via the platform utility
//!
//! There is no portable GPU metrics API, so this shells out to whatever the
//! config names (`system_profiler` on macOS, `nvidia-smi` elsewhere) and
//! hands back its stdout untouched.

use std::process::Stdio;

use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::config::GpuConfig;
use crate::error::{ToolError, ToolResult};
use crate::types::GpuReport;

pub async fn get_gpu_usage(config: &GpuConfig, ct: &CancellationToken) -> ToolResult<GpuReport> {
    let mut cmd = Command::new(&config.command);
    cmd.args(&config.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    tracing::debug!(command = %config.command, "Running GPU diagnostic utility");

    let output = tokio::select! {
        biased;
        _ = ct.cancelled() => return Err(ToolError::Cancelled),
        output = cmd.output() => output.map_err(|e| {
            ToolError::MetricUnavailable(format!("{}: {}", config.command, e))
        })?,
    };

    if !output.status.success() {
        return Err(ToolError::MetricUnavailable(format!(
            "{} exited with {}: {}",
            config.command,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let raw = String::from_utf8_lossy(&output.stdout).to_string();
    if raw.trim().is_empty() {
        return Err(ToolError::MetricUnavailable(format!(
            "{} produced no output",
            config.command
        )));
    }

    Ok(GpuReport { raw })
}
