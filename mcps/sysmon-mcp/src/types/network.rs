//! Network counter types

use serde::{Deserialize, Serialize};

use crate::envelope::HumanText;

/// Traffic counters for all interfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Interfaces sorted by name
    pub interfaces: Vec<InterfaceCounters>,
}

/// Byte counters for one network interface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceCounters {
    /// Interface name (e.g., "eth0", "wlan0", "en0")
    pub name: String,
    /// Total bytes transmitted since boot
    pub bytes_sent: u64,
    /// Total bytes received since boot
    pub bytes_received: u64,
}

impl HumanText for NetworkStats {
    fn human_text(&self) -> String {
        let mut text = String::from("Network Interfaces:\n");
        for iface in &self.interfaces {
            text.push_str(&format!(
                "{} - Sent: {}B, Received: {}B\n",
                iface.name, iface.bytes_sent, iface.bytes_received
            ));
        }
        text
    }
}
