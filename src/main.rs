use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};
use valet::journal::Journal;
use valet::report::{self, HistoryOptions};
use valet::{Config, Fleet, logging};

fn main() -> Result<()> {
    let config =
        Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;
    logging::init_logging(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Valet parking tracker {} starting up", env!("APP_VERSION"));

    let journal = if Path::new(&config.journal.file).exists() {
        Journal::from_file(&config.journal.file)
            .map_err(|e| anyhow::anyhow!("Failed to load journal: {}", e))?
    } else {
        info!(
            "No journal found at {}, replaying the built-in sample",
            config.journal.file
        );
        Journal::sample()
    };

    let mut fleet = Fleet::new();
    let summary = journal
        .replay(&mut fleet)
        .map_err(|e| anyhow::anyhow!("Journal replay failed: {}", e))?;
    info!(
        "Applied {} movements ({} rejected) across {} vehicles",
        summary.applied,
        summary.rejected,
        fleet.len()
    );

    for vehicle in fleet.iter() {
        if let Ok(snapshot) = serde_json::to_string(&vehicle.snapshot()) {
            debug!("Vehicle snapshot: {}", snapshot);
        }
    }

    let options = HistoryOptions::from(&config.report);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_fleet_report(&fleet, &options, &mut out)?;
    out.flush()?;

    Ok(())
}
