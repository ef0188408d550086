//! Process listing and control types

use serde::{Deserialize, Serialize};

use crate::envelope::HumanText;

/// One process as seen during a single listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSnapshot {
    pub pid: u32,
    /// Executable name; empty when it could not be read
    pub name: String,
    /// CPU usage over the sampling window (0-100 per core)
    pub cpu_percent: f32,
}

/// Result of `list_processes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessList {
    /// True when sorted by CPU descending and truncated
    pub ranked: bool,
    pub processes: Vec<ProcessSnapshot>,
}

impl HumanText for ProcessList {
    fn human_text(&self) -> String {
        let mut text = String::from(if self.ranked {
            "Top Processes:\n"
        } else {
            "Running Processes:\n"
        });
        for p in &self.processes {
            text.push_str(&format!(
                "PID={} Name={} CPU={:.2}%\n",
                p.pid, p.name, p.cpu_percent
            ));
        }
        text
    }
}

/// Result of `kill_process`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillOutcome {
    pub pid: u32,
    /// Signal delivered (e.g. "SIGKILL")
    pub signal: String,
}

impl HumanText for KillOutcome {
    fn human_text(&self) -> String {
        format!("Killed process {}", self.pid)
    }
}

/// Result of `launch_process`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchOutcome {
    pub pid: u32,
    pub command: String,
    pub args: Vec<String>,
}

impl HumanText for LaunchOutcome {
    fn human_text(&self) -> String {
        let mut line = self.command.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        format!("Launched process {}: {}", self.pid, line)
    }
}
