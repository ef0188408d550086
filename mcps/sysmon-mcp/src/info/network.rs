//! Network counter collection

use sysinfo::Networks;

use crate::types::{InterfaceCounters, NetworkStats};

/// Get per-interface byte counters, sorted by interface name
pub fn get_network_stats() -> NetworkStats {
    let networks = Networks::new_with_refreshed_list();

    let mut interfaces: Vec<InterfaceCounters> = networks
        .iter()
        .map(|(name, data)| InterfaceCounters {
            name: name.clone(),
            bytes_sent: data.total_transmitted(),
            bytes_received: data.total_received(),
        })
        .collect();
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));

    NetworkStats { interfaces }
}
