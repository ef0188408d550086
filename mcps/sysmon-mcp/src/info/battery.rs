//! Battery status collection

use starship_battery::units::electric_potential::volt;
use starship_battery::units::energy::watt_hour;
use starship_battery::{Battery, Manager, State};

use crate::error::{ToolError, ToolResult};
use crate::types::{charge_percent, BatteryReport, BatterySnapshot, BatteryState};

/// Read every battery the OS reports
///
/// A host without batteries yields an empty report, not an error.
pub fn get_battery_status() -> ToolResult<BatteryReport> {
    let manager = Manager::new().map_err(unavailable)?;
    let batteries = manager.batteries().map_err(unavailable)?;

    let mut snapshots = Vec::new();
    for (index, battery) in batteries.enumerate() {
        let battery = battery.map_err(unavailable)?;
        snapshots.push(snapshot(index, &battery));
    }

    Ok(BatteryReport {
        batteries: snapshots,
    })
}

fn snapshot(index: usize, battery: &Battery) -> BatterySnapshot {
    let current = f64::from(battery.energy().get::<watt_hour>());
    let full = f64::from(battery.energy_full().get::<watt_hour>());

    BatterySnapshot {
        index,
        vendor: battery.vendor().map(str::to_string),
        model: battery.model().map(str::to_string),
        design_capacity_wh: f64::from(battery.energy_full_design().get::<watt_hour>()),
        full_capacity_wh: full,
        current_capacity_wh: current,
        charge_percent: charge_percent(current, full),
        state: map_state(battery.state()),
        voltage_v: f64::from(battery.voltage().get::<volt>()),
    }
}

fn map_state(state: State) -> BatteryState {
    match state {
        State::Charging => BatteryState::Charging,
        State::Discharging => BatteryState::Discharging,
        State::Full => BatteryState::Full,
        State::Empty => BatteryState::Empty,
        _ => BatteryState::Unknown,
    }
}

fn unavailable(err: starship_battery::Error) -> ToolError {
    ToolError::MetricUnavailable(format!("battery: {}", err))
}
