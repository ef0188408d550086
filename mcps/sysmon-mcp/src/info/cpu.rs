//! CPU usage sampling

use std::time::Duration;

use sysinfo::{CpuRefreshKind, RefreshKind, System, MINIMUM_CPU_UPDATE_INTERVAL};
use tokio_util::sync::CancellationToken;

use crate::cancel::{run_blocking, sleep_or_cancel};
use crate::error::ToolResult;
use crate::types::CpuUsage;

/// Sample overall CPU usage across `window`
///
/// sysinfo computes usage as the delta between two refreshes, so the window
/// is never shorter than its minimum update interval.
pub async fn get_cpu_usage(window: Duration, ct: &CancellationToken) -> ToolResult<CpuUsage> {
    let window = window.max(MINIMUM_CPU_UPDATE_INTERVAL);

    let mut sys = run_blocking(ct, || {
        Ok(System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
        ))
    })
    .await?;

    sleep_or_cancel(window, ct).await?;

    let cpu_percent = run_blocking(ct, move || {
        sys.refresh_cpu_usage();
        Ok(sys.global_cpu_usage())
    })
    .await?;

    Ok(CpuUsage {
        cpu_percent,
        sample_window_ms: window.as_millis() as u64,
    })
}
