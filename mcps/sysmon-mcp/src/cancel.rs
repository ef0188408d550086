//! Cancellation helpers for provider calls
//!
//! OS metric calls are blocking, so they run on the blocking pool while the
//! async side races them against the invocation's token. A cancelled call
//! is abandoned, not interrupted: its result is simply dropped.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{ToolError, ToolResult};

/// Run a blocking collector unless (or until) `ct` is cancelled
pub async fn run_blocking<T, F>(ct: &CancellationToken, f: F) -> ToolResult<T>
where
    F: FnOnce() -> ToolResult<T> + Send + 'static,
    T: Send + 'static,
{
    if ct.is_cancelled() {
        return Err(ToolError::Cancelled);
    }

    let task = tokio::task::spawn_blocking(f);
    tokio::select! {
        biased;
        _ = ct.cancelled() => Err(ToolError::Cancelled),
        joined = task => joined
            .map_err(|e| ToolError::MetricUnavailable(format!("collector task failed: {}", e)))?,
    }
}

/// Sleep for `duration`, returning early with `Cancelled`
pub async fn sleep_or_cancel(duration: Duration, ct: &CancellationToken) -> ToolResult<()> {
    tokio::select! {
        biased;
        _ = ct.cancelled() => Err(ToolError::Cancelled),
        _ = tokio::time::sleep(duration) => Ok(()),
    }
}
