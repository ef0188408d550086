//! Process listing and control
//!
//! Listing samples CPU usage across the sysinfo minimum update interval.
//! Kill delivers SIGKILL (forced termination elsewhere). Launch starts a
//! detached child from an argument vector and never waits for it.

use std::process::Stdio;

use sysinfo::{ProcessRefreshKind, RefreshKind, System, MINIMUM_CPU_UPDATE_INTERVAL};
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::cancel::{run_blocking, sleep_or_cancel};
use crate::error::{ToolError, ToolResult};
use crate::types::{KillOutcome, LaunchOutcome, ProcessSnapshot};

fn process_refresh() -> RefreshKind {
    RefreshKind::new().with_processes(ProcessRefreshKind::new().with_cpu())
}

/// Snapshot every process with its CPU usage, in pid order
///
/// A process whose name or usage cannot be read is still listed, with an
/// empty name and 0.0 CPU.
pub async fn list_processes(ct: &CancellationToken) -> ToolResult<Vec<ProcessSnapshot>> {
    let mut sys = run_blocking(ct, || Ok(System::new_with_specifics(process_refresh()))).await?;

    sleep_or_cancel(MINIMUM_CPU_UPDATE_INTERVAL, ct).await?;

    run_blocking(ct, move || {
        sys.refresh_specifics(process_refresh());

        let mut snapshots: Vec<ProcessSnapshot> = sys
            .processes()
            .iter()
            .map(|(pid, process)| {
                let cpu = process.cpu_usage();
                ProcessSnapshot {
                    pid: pid.as_u32(),
                    name: process.name().to_string_lossy().to_string(),
                    cpu_percent: if cpu.is_finite() { cpu } else { 0.0 },
                }
            })
            .collect();
        snapshots.sort_by_key(|p| p.pid);
        Ok(snapshots)
    })
    .await
}

/// Sort by CPU descending and keep the first `limit` entries
///
/// Ties keep their incoming (pid) order.
pub fn rank_by_cpu(mut processes: Vec<ProcessSnapshot>, limit: usize) -> Vec<ProcessSnapshot> {
    processes.sort_by(|a, b| b.cpu_percent.total_cmp(&a.cpu_percent));
    processes.truncate(limit);
    processes
}

/// Resolve a requested limit; missing or non-positive means `default`
pub fn effective_limit(requested: Option<i64>, default: usize) -> usize {
    match requested {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => default,
    }
}

/// Validate a caller-supplied pid
pub fn checked_pid(pid: i64) -> ToolResult<u32> {
    if pid <= 0 || pid > i64::from(i32::MAX) {
        return Err(ToolError::InvalidArguments(format!(
            "pid must be between 1 and {}, got {}",
            i32::MAX,
            pid
        )));
    }
    Ok(pid as u32)
}

/// Forcibly terminate `pid`
#[cfg(unix)]
pub fn kill_process(pid: u32) -> ToolResult<KillOutcome> {
    use nix::errno::Errno;
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let raw = i32::try_from(pid)
        .map_err(|_| ToolError::InvalidArguments(format!("pid out of range: {}", pid)))?;

    match kill(Pid::from_raw(raw), Signal::SIGKILL) {
        Ok(()) => Ok(KillOutcome {
            pid,
            signal: "SIGKILL".to_string(),
        }),
        Err(Errno::ESRCH) => Err(ToolError::ProcessNotFound(pid)),
        Err(Errno::EPERM) => Err(ToolError::PermissionDenied(format!(
            "not allowed to signal process {}",
            pid
        ))),
        Err(e) => Err(ToolError::Internal(format!("kill {}: {}", pid, e))),
    }
}

/// Forcibly terminate `pid`
#[cfg(not(unix))]
pub fn kill_process(pid: u32) -> ToolResult<KillOutcome> {
    use sysinfo::{Pid, ProcessesToUpdate};

    let target = Pid::from_u32(pid);
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::Some(&[target]), true);

    let process = sys.process(target).ok_or(ToolError::ProcessNotFound(pid))?;
    if process.kill() {
        Ok(KillOutcome {
            pid,
            signal: "TERMINATE".to_string(),
        })
    } else {
        Err(ToolError::PermissionDenied(format!(
            "not allowed to terminate process {}",
            pid
        )))
    }
}

/// Start `command` with `args` as a detached child
///
/// No shell is involved: `args` reach the program verbatim. The child's
/// stdio is discarded and it is not killed when the server exits.
pub fn launch_process(command: &str, args: &[String]) -> ToolResult<LaunchOutcome> {
    if command.trim().is_empty() {
        return Err(ToolError::InvalidArguments("command must not be empty".to_string()));
    }

    let mut cmd = Command::new(command);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    cmd.process_group(0);

    let child = cmd
        .spawn()
        .map_err(|e| ToolError::LaunchFailed(format!("{}: {}", command, e)))?;

    let pid = child
        .id()
        .ok_or_else(|| ToolError::LaunchFailed(format!("{} exited before reporting a pid", command)))?;

    tracing::info!(pid, command, "Launched process");

    Ok(LaunchOutcome {
        pid,
        command: command.to_string(),
        args: args.to_vec(),
    })
}
