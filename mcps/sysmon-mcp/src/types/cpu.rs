//! CPU usage types

use serde::{Deserialize, Serialize};

use crate::envelope::HumanText;

/// Overall CPU utilization sampled over a fixed window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuUsage {
    /// Average usage across all cores (0-100)
    pub cpu_percent: f32,
    /// Length of the sampling window in milliseconds
    pub sample_window_ms: u64,
}

impl HumanText for CpuUsage {
    fn human_text(&self) -> String {
        format!("CPU Usage: {:.2}%", self.cpu_percent)
    }
}
