//! Fleet registry
//!
//! Keeps the vehicles known to the process, keyed by plate, and offers
//! plate-addressed convenience operations on top of the per-vehicle
//! state machine.

use crate::error::{Result, ValetError};
use crate::garage::Garage;
use crate::logging::{StructuredLogger, get_logger};
use crate::vehicle::Vehicle;
use std::collections::BTreeMap;

/// Registry of vehicles keyed by plate.
///
/// Iteration is in plate order, which keeps fleet-wide reports
/// deterministic.
pub struct Fleet {
    vehicles: BTreeMap<String, Vehicle>,

    /// Logger
    logger: StructuredLogger,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self {
            vehicles: BTreeMap::new(),
            logger: get_logger("fleet"),
        }
    }

    /// Register a new vehicle under `plate`.
    ///
    /// Fails with a validation error when the plate is already
    /// registered or is not a valid plate.
    pub fn register<S: Into<String>>(&mut self, plate: S) -> Result<&mut Vehicle> {
        let plate = plate.into();
        if self.vehicles.contains_key(&plate) {
            return Err(ValetError::validation(
                "fleet.plate",
                "Plate is already registered",
            ));
        }
        let vehicle = Vehicle::new(plate.clone())?;
        self.logger.info(&format!("Registered vehicle {}", plate));
        Ok(self.vehicles.entry(plate).or_insert(vehicle))
    }

    /// Look up a vehicle by plate.
    pub fn vehicle(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.get(plate)
    }

    /// Look up a vehicle by plate, mutably.
    pub fn vehicle_mut(&mut self, plate: &str) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(plate)
    }

    /// Whether a vehicle with this plate is registered.
    pub fn contains(&self, plate: &str) -> bool {
        self.vehicles.contains_key(plate)
    }

    /// Park the vehicle with this plate in `garage`.
    pub fn enter(&mut self, plate: &str, garage: &Garage) -> Result<()> {
        match self.vehicles.get_mut(plate) {
            Some(vehicle) => vehicle.enter_garage(garage),
            None => Err(ValetError::validation(
                "fleet.plate",
                "Plate is not registered",
            )),
        }
    }

    /// Make the vehicle with this plate leave its current garage.
    pub fn exit(&mut self, plate: &str) -> Result<()> {
        match self.vehicles.get_mut(plate) {
            Some(vehicle) => vehicle.exit_garage(),
            None => Err(ValetError::validation(
                "fleet.plate",
                "Plate is not registered",
            )),
        }
    }

    /// Number of registered vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Whether the fleet has no vehicles.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Iterate over the vehicles in plate order.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
