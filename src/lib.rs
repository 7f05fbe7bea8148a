//! # Valet - Vehicle Parking Session Tracker
//!
//! A small library (and companion binary) that models vehicles parking
//! in and out of garages over time, tracking per-vehicle parking history
//! and rendering it as grouped text reports.
//!
//! ## Features
//!
//! - **Two-state lifecycle**: each vehicle is either parked or unparked,
//!   with precondition-guarded enter/exit transitions
//! - **Append-only history**: every stay is kept as a session record
//!   with entry and optional exit timestamps
//! - **Grouped reports**: history rendered per garage, deterministic
//!   ordering, pluggable output sink
//! - **Fleet registry**: plate-keyed collection of vehicles
//! - **Journal replay**: YAML movement journals applied to a fleet,
//!   with precondition violations logged instead of fatal
//! - **Configuration**: YAML-based configuration with validation
//!
//! ## Architecture
//!
//! The crate follows a modular architecture with clear separation of
//! concerns:
//!
//! - `config`: Configuration management and validation
//! - `logging`: Structured logging and tracing
//! - `error`: Error taxonomy shared across the crate
//! - `garage`: Garage locations and their identity contract
//! - `session`: Parking session records
//! - `vehicle`: Core parking state machine and history queries
//! - `report`: History report rendering
//! - `fleet`: Plate-keyed vehicle registry
//! - `journal`: Movement journal parsing and replay

pub mod config;
pub mod error;
pub mod fleet;
pub mod garage;
pub mod journal;
pub mod logging;
pub mod report;
pub mod session;
pub mod vehicle;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ValetError};
pub use fleet::Fleet;
pub use garage::Garage;
pub use journal::{Journal, ReplaySummary};
pub use session::ParkingSession;
pub use vehicle::{Vehicle, VehicleSnapshot};
