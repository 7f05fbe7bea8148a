//! History report rendering
//!
//! Turns parking history into the text report: sessions grouped by
//! garage, one header line per garage followed by one line per stay in
//! chronological order. Line text comes from the session's `Display`
//! rendering; this module only orchestrates grouping and sequencing.

use crate::error::Result;
use crate::fleet::Fleet;
use crate::vehicle::Vehicle;
use std::io;

/// Rendering options for history reports.
#[derive(Debug, Clone)]
pub struct HistoryOptions {
    /// Sort garage groups by name instead of first-visit order
    pub sort_by_name: bool,

    /// Prefix written before each session line
    pub indent: String,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            sort_by_name: false,
            indent: "\t".to_string(),
        }
    }
}

impl From<&crate::config::ReportConfig> for HistoryOptions {
    fn from(config: &crate::config::ReportConfig) -> Self {
        Self {
            sort_by_name: config.sort_by_name,
            indent: config.indent.clone(),
        }
    }
}

/// Write the grouped history of a single vehicle to `out`.
///
/// Groups appear in first-visit order, or in stable name order when
/// `options.sort_by_name` is set. Either way the output is deterministic
/// for a given history.
pub fn write_history<W: io::Write>(
    vehicle: &Vehicle,
    options: &HistoryOptions,
    out: &mut W,
) -> Result<()> {
    let mut groups = vehicle.sessions_by_garage();
    if options.sort_by_name {
        groups.sort_by(|a, b| a.0.name().cmp(b.0.name()));
    }

    for (garage, sessions) in groups {
        writeln!(out, "Garage {}:", garage)?;
        for session in sessions {
            writeln!(out, "{}{}", options.indent, session)?;
        }
    }
    Ok(())
}

/// Write one report section per vehicle in the fleet, in plate order.
pub fn write_fleet_report<W: io::Write>(
    fleet: &Fleet,
    options: &HistoryOptions,
    out: &mut W,
) -> Result<()> {
    for vehicle in fleet.iter() {
        writeln!(out, "Vehicle {}", vehicle.plate())?;
        if vehicle.sessions().is_empty() {
            writeln!(out, "{}(no parking history)", options.indent)?;
        } else {
            write_history(vehicle, options, out)?;
        }
    }
    Ok(())
}
