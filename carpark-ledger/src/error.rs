//! Ledger error types.

use crate::session::VehicleId;
use carpark_pricing::PricingError;
use thiserror::Error;

/// Errors from ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid registration number: {country} {registration_no}")]
    InvalidRegistration {
        country: String,
        registration_no: String,
    },

    #[error("vehicle already in the facility: {vehicle}")]
    AlreadyParked { vehicle: VehicleId },

    #[error("floor {floor} is not available in this facility")]
    UnknownFloor { floor: i32 },

    #[error("vehicle not found in the facility: {vehicle}")]
    VehicleNotFound { vehicle: VehicleId },

    #[error("insufficient amount: required {required} {currency}, offered {offered} {currency}")]
    InsufficientAmount {
        required: f64,
        offered: f64,
        currency: String,
    },

    #[error("parking fee not paid: {vehicle}")]
    NotPaid { vehicle: VehicleId },

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl LedgerError {
    /// Returns an error code suitable for an outer API layer.
    pub fn error_code(&self) -> &'static str {
        match self {
            LedgerError::InvalidRegistration { .. } => "INVALID_REGISTRATION",
            LedgerError::AlreadyParked { .. } => "ALREADY_PARKED",
            LedgerError::UnknownFloor { .. } => "UNKNOWN_FLOOR",
            LedgerError::VehicleNotFound { .. } => "VEHICLE_NOT_FOUND",
            LedgerError::InsufficientAmount { .. } => "INSUFFICIENT_AMOUNT",
            LedgerError::NotPaid { .. } => "NOT_PAID",
            LedgerError::Pricing(e) => e.error_code(),
        }
    }
}
