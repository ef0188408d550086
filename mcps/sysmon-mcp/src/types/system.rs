//! Composite host information types

use serde::{Deserialize, Serialize};

use crate::envelope::HumanText;

/// Host identity, uptime, RAM and disk usage in one snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// OS distribution/platform name (e.g., "Ubuntu", "Darwin")
    pub platform: String,
    /// Platform version
    pub platform_version: String,
    pub kernel_version: String,
    pub hostname: String,
    /// CPU architecture (e.g., "x86_64", "aarch64")
    pub arch: String,
    pub uptime_seconds: u64,
    /// RAM usage percentage (0-100)
    pub ram_used_percent: f64,
    /// Mounted partitions
    pub disks: Vec<PartitionUsage>,
}

/// Usage of one mounted partition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionUsage {
    /// Mount point path
    pub mount_point: String,
    /// Filesystem type (e.g., "ext4", "apfs")
    pub filesystem: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    /// Usage percentage (0-100)
    pub used_percent: f64,
}

impl PartitionUsage {
    fn usage_line(&self) -> String {
        format!("Disk {}: {:.2}% used", self.mount_point, self.used_percent)
    }
}

impl HumanText for SystemInfo {
    fn human_text(&self) -> String {
        let mut text = format!(
            "OS: {} {} ({})\nUptime: {}h\nRAM: {:.2}% used\n",
            self.platform,
            self.platform_version,
            self.arch,
            self.uptime_seconds / 3600,
            self.ram_used_percent
        );
        for disk in &self.disks {
            text.push_str(&disk.usage_line());
            text.push('\n');
        }
        text
    }
}

impl HumanText for PartitionUsage {
    fn human_text(&self) -> String {
        format!(
            "{} ({}/{} bytes)",
            self.usage_line(),
            self.used_bytes,
            self.total_bytes
        )
    }
}
