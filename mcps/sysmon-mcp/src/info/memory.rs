//! Memory information collection

use sysinfo::System;

use crate::types::MemoryStats;

/// Get physical memory statistics
pub fn get_memory_stats() -> MemoryStats {
    let mut sys = System::new();
    sys.refresh_memory();

    let total = sys.total_memory();
    let used = sys.used_memory();

    MemoryStats {
        total_bytes: total,
        used_bytes: used,
        free_bytes: sys.free_memory(),
        available_bytes: sys.available_memory(),
        usage_percent: percent(used, total),
    }
}

/// `part / whole * 100`, 0 for an empty whole
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        (part as f64 / whole as f64) * 100.0
    } else {
        0.0
    }
}
