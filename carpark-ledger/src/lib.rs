//! # carpark-ledger
//!
//! Parking ledger for carpark.
//!
//! This crate provides:
//! - Vehicle session lifecycle: entry, payment, exit, floor relocation
//! - Time-based fee lookup backed by `carpark-pricing`
//! - Append-only exit history per vehicle
//! - Pluggable registration validation and clock
//!
//! Each vehicle moves through the states *absent*, *parked unpaid* and
//! *parked paid*; exiting records a history entry and returns the vehicle
//! to *absent*. The ledger holds all state in plain maps and performs no
//! internal locking; callers needing concurrent access wrap it in their
//! own synchronization.

pub mod clock;
pub mod error;
pub mod ledger;
pub mod session;
pub mod validator;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::LedgerError;
pub use ledger::ParkingLedger;
pub use session::{HistoryEntry, PaymentInfo, PaymentReceipt, Session, VehicleId};
pub use validator::{PlateFormatValidator, RegistrationValidator};
