//! # carpark-pricing
//!
//! Fee computation for carpark.
//!
//! This crate provides:
//! - Floor price tables (hourly rate per floor, configurable currency)
//! - Pure time-based fee computation with a free grace period
//!
//! The fee calculator holds no mutable state; a single instance can be
//! shared for the lifetime of a facility.

pub mod calculator;
pub mod error;
pub mod table;

pub use calculator::{round2, FeeCalculator};
pub use error::PricingError;
pub use table::PriceTable;

/// Default free grace period in minutes.
pub const DEFAULT_FREE_MINUTES: i64 = 30;

/// Default currency label for price tables.
pub const DEFAULT_CURRENCY: &str = "PLN";
