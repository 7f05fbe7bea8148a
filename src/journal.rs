//! Movement journal
//!
//! A YAML-described sequence of enter/exit movements that the binary
//! replays into a fleet. Parking-state precondition violations found in
//! the journal are logged and counted rather than aborting the replay;
//! infrastructure errors still abort.

use crate::error::{Result, ValetError};
use crate::fleet::Fleet;
use crate::garage::Garage;
use crate::logging::get_logger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What a movement does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementAction {
    Enter,
    Exit,
}

/// One recorded movement of a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    /// Plate of the vehicle that moved
    pub plate: String,

    /// Enter or exit
    pub action: MovementAction,

    /// Garage name, required for enter movements
    #[serde(default)]
    pub garage: Option<String>,

    /// Explicit timestamp; the replay uses "now" when absent
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}

/// A replayable sequence of movements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    pub movements: Vec<Movement>,
}

/// Outcome counters of a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Movements applied to the fleet
    pub applied: usize,

    /// Movements rejected by a parking-state precondition
    pub rejected: usize,
}

impl Journal {
    /// Load a journal from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse a journal from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let journal: Journal = serde_yaml::from_str(contents)?;
        Ok(journal)
    }

    /// Number of movements in the journal.
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    /// Whether the journal holds no movements.
    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// Replay all movements into `fleet`, in order.
    ///
    /// Unknown plates are registered on first sight. Movements that
    /// violate a parking-state precondition (entering while parked,
    /// exiting while not, timestamps out of order, malformed entries)
    /// are logged as warnings and counted as rejected; any other error
    /// aborts the replay.
    pub fn replay(&self, fleet: &mut Fleet) -> Result<ReplaySummary> {
        let logger = get_logger("journal");
        let mut summary = ReplaySummary::default();

        for movement in &self.movements {
            match apply_movement(fleet, movement) {
                Ok(()) => summary.applied += 1,
                Err(err) if err.is_state_violation() => {
                    logger.warn(&format!(
                        "Rejected movement for {}: {}",
                        movement.plate, err
                    ));
                    summary.rejected += 1;
                }
                Err(err) => return Err(err),
            }
        }

        logger.info(&format!(
            "Replayed journal: {} applied, {} rejected",
            summary.applied, summary.rejected
        ));
        Ok(summary)
    }

    /// Built-in demonstration journal: one vehicle visiting Castres
    /// twice around a stop in Albi (final stay left ongoing), and a
    /// second vehicle parked in Castres.
    pub fn sample() -> Self {
        Self {
            movements: vec![
                movement("AB-123-CD", MovementAction::Enter, Some("Castres")),
                movement("AB-123-CD", MovementAction::Exit, None),
                movement("AB-123-CD", MovementAction::Enter, Some("Albi")),
                movement("AB-123-CD", MovementAction::Exit, None),
                movement("AB-123-CD", MovementAction::Enter, Some("Castres")),
                movement("EF-456-GH", MovementAction::Enter, Some("Castres")),
            ],
        }
    }
}

fn movement(plate: &str, action: MovementAction, garage: Option<&str>) -> Movement {
    Movement {
        plate: plate.to_string(),
        action,
        garage: garage.map(str::to_string),
        at: None,
    }
}

fn apply_movement(fleet: &mut Fleet, movement: &Movement) -> Result<()> {
    if !fleet.contains(&movement.plate) {
        fleet.register(movement.plate.as_str())?;
    }
    let Some(vehicle) = fleet.vehicle_mut(&movement.plate) else {
        return Err(ValetError::validation(
            "journal.plate",
            "Plate is not registered",
        ));
    };

    match movement.action {
        MovementAction::Enter => {
            let Some(name) = movement.garage.as_deref() else {
                return Err(ValetError::validation(
                    "journal.garage",
                    "Enter movement requires a garage",
                ));
            };
            let garage = Garage::new(name)?;
            match movement.at {
                Some(at) => vehicle.enter_garage_at(&garage, at),
                None => vehicle.enter_garage(&garage),
            }
        }
        MovementAction::Exit => match movement.at {
            Some(at) => vehicle.exit_garage_at(at),
            None => vehicle.exit_garage(),
        },
    }
}
