//! Vehicle parking lifecycle
//!
//! This module is the core of the crate: a vehicle owns its ordered
//! parking history and moves between exactly two logical states, parked
//! and unparked, through precondition-guarded transitions.
//!
//! The history is append-only. At most the last session may be ongoing;
//! every earlier session is terminated. "Parked" is not cached anywhere,
//! it is derived from the last element on every query.

use crate::error::{Result, ValetError};
use crate::garage::Garage;
use crate::logging::{LogContext, StructuredLogger, get_logger_with_context};
use crate::report::{self, HistoryOptions};
use crate::session::ParkingSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io;

/// A vehicle whose parking lifecycle is tracked.
#[derive(Debug)]
pub struct Vehicle {
    /// Immutable plate id identifying the vehicle
    plate: String,

    /// Parking history, insertion order = chronological order
    sessions: Vec<ParkingSession>,

    /// Logger
    logger: StructuredLogger,
}

/// Typed status summary of a vehicle, for logs and inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub plate: String,
    pub parked: bool,
    pub current_garage: Option<String>,
    pub total_sessions: usize,
    /// Names of the distinct garages ever visited, sorted
    pub garages: Vec<String>,
}

impl Vehicle {
    /// Create a vehicle with the given plate id and an empty history.
    ///
    /// Fails with a validation error when the plate is empty or blank.
    pub fn new<S: Into<String>>(plate: S) -> Result<Self> {
        let plate = plate.into();
        if plate.trim().is_empty() {
            return Err(ValetError::validation(
                "vehicle.plate",
                "Plate cannot be empty",
            ));
        }
        let logger =
            get_logger_with_context(LogContext::new("vehicle").with_vehicle(plate.clone()));
        Ok(Self {
            plate,
            sessions: Vec::new(),
            logger,
        })
    }

    /// Plate id of this vehicle.
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Park the vehicle in `garage` now.
    ///
    /// Fails with [`ValetError::AlreadyParked`] when the vehicle is
    /// currently in a garage; the history is left unchanged. The entry
    /// timestamp is the current time and goes through the same
    /// chronology check as [`enter_garage_at`](Self::enter_garage_at),
    /// so entries can never land before a recorded exit.
    pub fn enter_garage(&mut self, garage: &Garage) -> Result<()> {
        self.enter_garage_at(garage, Utc::now())
    }

    /// Park the vehicle in `garage` with an explicit entry timestamp.
    ///
    /// Besides the [`ValetError::AlreadyParked`] precondition, the entry
    /// must not predate the previous session's exit, so that insertion
    /// order stays chronological.
    pub fn enter_garage_at(&mut self, garage: &Garage, at: DateTime<Utc>) -> Result<()> {
        if let Some(current) = self.current_garage() {
            return Err(ValetError::already_parked(
                self.plate.as_str(),
                current.name(),
            ));
        }
        if let Some(last_exit) = self.sessions.last().and_then(ParkingSession::exited_at)
            && at < last_exit
        {
            return Err(ValetError::validation(
                "session.entered_at",
                "Entry timestamp cannot predate the previous exit",
            ));
        }

        let session = ParkingSession::new(&self.plate, garage.clone(), at);
        self.logger.info(&format!(
            "Entered garage {} (session {})",
            garage,
            session.id()
        ));
        self.sessions.push(session);
        Ok(())
    }

    /// Leave the current garage now.
    ///
    /// Fails with [`ValetError::NotParked`] when the vehicle is not
    /// currently in a garage; the history is left unchanged.
    pub fn exit_garage(&mut self) -> Result<()> {
        self.exit_garage_at(Utc::now())
    }

    /// Leave the current garage with an explicit exit timestamp, which
    /// must not predate the session's entry.
    pub fn exit_garage_at(&mut self, at: DateTime<Utc>) -> Result<()> {
        let Some(last) = self.sessions.last_mut() else {
            return Err(ValetError::not_parked(self.plate.as_str()));
        };
        if !last.is_ongoing() {
            return Err(ValetError::not_parked(self.plate.as_str()));
        }

        last.end_at(at)?;
        let session_logger = get_logger_with_context(
            LogContext::new("vehicle")
                .with_vehicle(self.plate.clone())
                .with_session_id(last.id().to_string()),
        );
        session_logger.info(&format!(
            "Exited garage {} after {} min",
            last.garage(),
            last.duration().num_minutes()
        ));
        Ok(())
    }

    /// Whether the vehicle is currently in a garage.
    ///
    /// True iff the history is non-empty and its last session is ongoing.
    pub fn is_in_garage(&self) -> bool {
        self.sessions.last().is_some_and(ParkingSession::is_ongoing)
    }

    /// The garage the vehicle is currently in, if any.
    pub fn current_garage(&self) -> Option<&Garage> {
        self.sessions
            .last()
            .filter(|s| s.is_ongoing())
            .map(ParkingSession::garage)
    }

    /// The set of distinct garages ever visited by this vehicle,
    /// including the one of an ongoing stay. Repeat visits collapse
    /// under garage value equality.
    pub fn visited_garages(&self) -> BTreeSet<Garage> {
        self.sessions.iter().map(|s| s.garage().clone()).collect()
    }

    /// Full parking history in chronological order.
    pub fn sessions(&self) -> &[ParkingSession] {
        &self.sessions
    }

    /// History grouped by garage, groups in first-visit order, sessions
    /// within a group in chronological order.
    pub fn sessions_by_garage(&self) -> Vec<(&Garage, Vec<&ParkingSession>)> {
        let mut groups: Vec<(&Garage, Vec<&ParkingSession>)> = Vec::new();
        for session in &self.sessions {
            match groups.iter_mut().find(|(g, _)| *g == session.garage()) {
                Some((_, list)) => list.push(session),
                None => groups.push((session.garage(), vec![session])),
            }
        }
        groups
    }

    /// Write the history report for this vehicle to `out` with default
    /// options: one `Garage <name>:` header per garage in first-visit
    /// order, then one indented line per session.
    ///
    /// Vehicle state is never mutated; the only observable effect is the
    /// text written to `out`.
    pub fn print_history<W: io::Write>(&self, out: &mut W) -> Result<()> {
        report::write_history(self, &HistoryOptions::default(), out)
    }

    /// Build a typed status snapshot of this vehicle.
    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            plate: self.plate.clone(),
            parked: self.is_in_garage(),
            current_garage: self.current_garage().map(|g| g.name().to_string()),
            total_sessions: self.sessions.len(),
            garages: self
                .visited_garages()
                .into_iter()
                .map(|g| g.name().to_string())
                .collect(),
        }
    }
}
