//! Memory information types

use serde::{Deserialize, Serialize};

use crate::envelope::HumanText;

/// Physical memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    /// Total physical memory in bytes
    pub total_bytes: u64,
    /// Used physical memory in bytes
    pub used_bytes: u64,
    /// Free (unused) physical memory in bytes
    pub free_bytes: u64,
    /// Memory available for new allocations in bytes (free + reclaimable)
    pub available_bytes: u64,
    /// Memory usage percentage (0-100)
    pub usage_percent: f64,
}

impl HumanText for MemoryStats {
    fn human_text(&self) -> String {
        format!(
            "Memory - Total: {}, Used: {}, Free: {}, Usage: {:.2}%",
            self.total_bytes, self.used_bytes, self.free_bytes, self.usage_percent
        )
    }
}
