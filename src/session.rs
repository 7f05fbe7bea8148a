//! Parking session records
//!
//! This module holds the record of one stay of a vehicle in a garage:
//! entry timestamp, optional exit timestamp, and the line rendering used
//! by history reports.

use crate::error::{Result, ValetError};
use crate::garage::Garage;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date rendering used in report lines (day/month/year)
const REPORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// One contiguous stay of a vehicle in a garage.
///
/// The entry timestamp is fixed at creation. The exit timestamp is unset
/// while the stay is ongoing and fixed once [`end`](Self::end) runs;
/// ending a session twice is an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingSession {
    /// Unique session ID
    id: String,

    /// Plate of the owning vehicle (back-reference by id, not ownership)
    plate: String,

    /// The garage being visited
    garage: Garage,

    /// Entry timestamp
    entered_at: DateTime<Utc>,

    /// Exit timestamp, `None` while the stay is ongoing
    exited_at: Option<DateTime<Utc>>,
}

impl ParkingSession {
    /// Open a new ongoing session for `plate` in `garage`.
    pub fn new(plate: &str, garage: Garage, entered_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            plate: plate.to_string(),
            garage,
            entered_at,
            exited_at: None,
        }
    }

    /// Unique id of this session.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Plate of the vehicle this stay belongs to.
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// The garage visited during this stay.
    pub fn garage(&self) -> &Garage {
        &self.garage
    }

    /// Entry timestamp.
    pub fn entered_at(&self) -> DateTime<Utc> {
        self.entered_at
    }

    /// Exit timestamp, if the stay has ended.
    pub fn exited_at(&self) -> Option<DateTime<Utc>> {
        self.exited_at
    }

    /// Whether the vehicle is still in the garage for this stay.
    pub fn is_ongoing(&self) -> bool {
        self.exited_at.is_none()
    }

    /// Terminate the stay now.
    pub fn end(&mut self) -> Result<()> {
        self.end_at(Utc::now())
    }

    /// Terminate the stay at the given timestamp.
    ///
    /// Fails with [`ValetError::SessionClosed`] when the session already
    /// ended, and with a validation error when `at` predates the entry;
    /// the recorded exit timestamp is left untouched in both cases.
    pub fn end_at(&mut self, at: DateTime<Utc>) -> Result<()> {
        if self.exited_at.is_some() {
            return Err(ValetError::session_closed(self.id.as_str()));
        }
        if at < self.entered_at {
            return Err(ValetError::validation(
                "session.exited_at",
                "Exit timestamp cannot predate entry",
            ));
        }
        self.exited_at = Some(at);
        Ok(())
    }

    /// Length of the stay: exit minus entry for a terminated session,
    /// time elapsed since entry for an ongoing one.
    pub fn duration(&self) -> Duration {
        match self.exited_at {
            Some(exited) => exited - self.entered_at,
            None => Utc::now() - self.entered_at,
        }
    }
}

impl fmt::Display for ParkingSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exited_at {
            Some(exited) => write!(
                f,
                "Session{{ entered={}, exited={} }}",
                self.entered_at.format(REPORT_DATE_FORMAT),
                exited.format(REPORT_DATE_FORMAT)
            ),
            None => write!(
                f,
                "Session{{ entered={}, ongoing }}",
                self.entered_at.format(REPORT_DATE_FORMAT)
            ),
        }
    }
}
