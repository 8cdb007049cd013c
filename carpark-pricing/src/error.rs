//! Pricing error types.

use thiserror::Error;

/// Errors from fee computation and price table lookups.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("parking duration cannot be negative: {minutes} minutes")]
    NegativeMinutes { minutes: i64 },

    #[error("floor {floor} is not available in this facility")]
    UnknownFloor { floor: i32 },
}

impl PricingError {
    /// Returns an error code suitable for an outer API layer.
    pub fn error_code(&self) -> &'static str {
        match self {
            PricingError::NegativeMinutes { .. } => "INVALID_INPUT",
            PricingError::UnknownFloor { .. } => "UNKNOWN_FLOOR",
        }
    }
}
