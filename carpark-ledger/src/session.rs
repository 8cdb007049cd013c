//! Session and history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite vehicle key: country code plus registration number.
///
/// At most one active session exists per `VehicleId` at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId {
    country: String,
    registration_no: String,
}

impl VehicleId {
    pub fn new(country: impl Into<String>, registration_no: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            registration_no: registration_no.into(),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn registration_no(&self) -> &str {
        &self.registration_no
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.country, self.registration_no)
    }
}

/// An active parking session.
///
/// Exists only between a successful entry and a successful exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Time the vehicle entered the facility.
    pub entry_time: DateTime<Utc>,

    /// Floor the vehicle is currently parked on.
    pub floor: i32,

    /// Whether the parking fee has been paid.
    pub paid: bool,
}

impl Session {
    /// Creates an unpaid session starting at `entry_time`.
    pub fn new(entry_time: DateTime<Utc>, floor: i32) -> Self {
        Self {
            entry_time,
            floor,
            paid: false,
        }
    }

    /// Marks the session paid.
    pub fn mark_paid(&mut self) {
        self.paid = true;
    }

    /// Moves the session to another floor. Entry time and payment state
    /// are untouched.
    pub fn relocate(&mut self, new_floor: i32) {
        self.floor = new_floor;
    }
}

/// Immutable record of one completed parking cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,

    /// Floor at the time of exit.
    pub floor: i32,

    /// Fee computed at the time of exit.
    pub fee: f64,
}

/// Current fee owed by a parked vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub country: String,
    pub registration_no: String,

    /// Fee owed for the elapsed time so far.
    pub fee: f64,

    /// Whole minutes elapsed since entry (seconds truncated).
    pub minutes: i64,
}

/// Outcome of a successful payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Fee owed at the moment of payment.
    pub required_fee: f64,

    /// Amount tendered.
    pub paid_amount: f64,

    /// Change returned, rounded to 2 decimals. Never negative.
    pub change: f64,

    /// Currency the amounts are denominated in.
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_vehicle_id_display() {
        let id = VehicleId::new("PL", "ABC123");
        assert_eq!(id.to_string(), "PL_ABC123");
        assert_eq!(id.country(), "PL");
        assert_eq!(id.registration_no(), "ABC123");
    }

    #[test]
    fn test_vehicle_id_equality() {
        assert_eq!(VehicleId::new("PL", "ABC123"), VehicleId::new("PL", "ABC123"));
        assert_ne!(VehicleId::new("PL", "ABC123"), VehicleId::new("DE", "ABC123"));
    }

    #[test]
    fn test_session_lifecycle() {
        let entry = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
        let mut session = Session::new(entry, 2);
        assert!(!session.paid);
        assert_eq!(session.floor, 2);

        session.relocate(3);
        assert_eq!(session.floor, 3);
        assert_eq!(session.entry_time, entry);
        assert!(!session.paid);

        session.mark_paid();
        assert!(session.paid);

        session.relocate(1);
        assert!(session.paid);
    }
}
