//! Battery status types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::envelope::HumanText;

/// All batteries found on the host; empty when there are none
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryReport {
    pub batteries: Vec<BatterySnapshot>,
}

/// Point-in-time reading of one battery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatterySnapshot {
    /// Position in the OS battery enumeration
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Capacity the battery was designed for, in watt-hours
    pub design_capacity_wh: f64,
    /// Capacity when fully charged today, in watt-hours
    pub full_capacity_wh: f64,
    /// Energy currently stored, in watt-hours
    pub current_capacity_wh: f64,
    /// current / full * 100, or 0 when full capacity is unknown
    pub charge_percent: f64,
    pub state: BatteryState,
    /// Voltage in volts
    pub voltage_v: f64,
}

/// Charging state reported by the OS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryState {
    Charging,
    Discharging,
    Full,
    Empty,
    Unknown,
}

impl fmt::Display for BatteryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BatteryState::Charging => "charging",
            BatteryState::Discharging => "discharging",
            BatteryState::Full => "full",
            BatteryState::Empty => "empty",
            BatteryState::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Charge percentage guarded against a zero full capacity
pub fn charge_percent(current: f64, full: f64) -> f64 {
    if full > 0.0 {
        current / full * 100.0
    } else {
        0.0
    }
}

impl HumanText for BatteryReport {
    fn human_text(&self) -> String {
        if self.batteries.is_empty() {
            return "No battery detected".to_string();
        }
        self.batteries
            .iter()
            .map(|b| format!("Battery {}: {:.2}% ({})\n", b.index, b.charge_percent, b.state))
            .collect()
    }
}
