//! Time-based fee computation.

use crate::error::PricingError;
use crate::table::PriceTable;
use crate::DEFAULT_FREE_MINUTES;

/// Rounds a monetary amount to 2 decimal places.
///
/// Ties round half away from zero (`f64::round` on cents).
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Computes parking fees from elapsed minutes and a floor price table.
///
/// The first [`DEFAULT_FREE_MINUTES`] minutes are free regardless of floor;
/// beyond that, each billable minute costs one sixtieth of the floor's
/// hourly rate. Pure and stateless.
#[derive(Debug, Clone)]
pub struct FeeCalculator {
    table: PriceTable,
    free_minutes: i64,
}

impl FeeCalculator {
    /// Creates a calculator over a price table with the default grace period.
    pub fn new(table: PriceTable) -> Self {
        Self {
            table,
            free_minutes: DEFAULT_FREE_MINUTES,
        }
    }

    /// Overrides the free grace period.
    pub fn with_free_minutes(mut self, minutes: i64) -> Self {
        self.free_minutes = minutes;
        self
    }

    /// Returns the underlying price table.
    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    /// Returns the free grace period in minutes.
    pub fn free_minutes(&self) -> i64 {
        self.free_minutes
    }

    /// Computes the fee for `minutes` of parking on `floor`.
    ///
    /// The result is non-negative, rounded to 2 decimals, and monotonically
    /// non-decreasing in `minutes` for a fixed floor.
    pub fn calculate_fee(&self, minutes: i64, floor: i32) -> Result<f64, PricingError> {
        if minutes < 0 {
            return Err(PricingError::NegativeMinutes { minutes });
        }

        let hourly_rate = self
            .table
            .hourly_rate(floor)
            .ok_or(PricingError::UnknownFloor { floor })?;

        if minutes <= self.free_minutes {
            return Ok(0.0);
        }

        let billable_minutes = minutes - self.free_minutes;
        let fee = billable_minutes as f64 * (hourly_rate / 60.0);

        Ok(round2(fee))
    }
}
