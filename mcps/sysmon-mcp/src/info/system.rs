//! Host identity and disk usage collection

use std::path::Path;

use sysinfo::{Disk, Disks, System};

use super::memory::{get_memory_stats, percent};
use crate::error::{ToolError, ToolResult};
use crate::types::{PartitionUsage, SystemInfo};

/// Get host identity, uptime, RAM and per-partition disk usage
pub fn get_system_info() -> SystemInfo {
    let memory = get_memory_stats();

    SystemInfo {
        platform: System::name().unwrap_or_default(),
        platform_version: System::os_version().unwrap_or_default(),
        kernel_version: System::kernel_version().unwrap_or_default(),
        hostname: System::host_name().unwrap_or_default(),
        arch: std::env::consts::ARCH.to_string(),
        uptime_seconds: System::uptime(),
        ram_used_percent: memory.usage_percent,
        disks: get_partitions(),
    }
}

/// Usage of every mounted partition
pub fn get_partitions() -> Vec<PartitionUsage> {
    let disks = Disks::new_with_refreshed_list();
    disks.iter().map(partition_usage).collect()
}

/// Usage of the partition holding `path`
///
/// The partition is the one whose mount point is the longest prefix of the
/// canonical path.
pub fn get_disk_usage(path: &Path) -> ToolResult<PartitionUsage> {
    let display = path.display().to_string();
    let canonical = path
        .canonicalize()
        .map_err(|e| ToolError::from_path_io(&display, e))?;

    let disks = Disks::new_with_refreshed_list();
    let mounts: Vec<&Path> = disks.iter().map(|d| d.mount_point()).collect();

    let index = longest_mount_prefix(&canonical, &mounts).ok_or_else(|| {
        ToolError::MetricUnavailable(format!("no mounted partition holds {}", display))
    })?;

    Ok(partition_usage(&disks.list()[index]))
}

fn partition_usage(disk: &Disk) -> PartitionUsage {
    let total = disk.total_space();
    let available = disk.available_space();
    let used = total.saturating_sub(available);

    PartitionUsage {
        mount_point: disk.mount_point().to_string_lossy().to_string(),
        filesystem: disk.file_system().to_string_lossy().to_string(),
        total_bytes: total,
        used_bytes: used,
        available_bytes: available,
        used_percent: percent(used, total),
    }
}

/// Index of the mount point that is the longest ancestor of `path`
fn longest_mount_prefix(path: &Path, mounts: &[&Path]) -> Option<usize> {
    mounts
        .iter()
        .enumerate()
        .filter(|(_, mount)| path.starts_with(mount))
        .max_by_key(|(_, mount)| mount.components().count())
        .map(|(i, _)| i)
}
