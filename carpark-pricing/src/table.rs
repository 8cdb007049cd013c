//! Floor price tables.

use crate::DEFAULT_CURRENCY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hourly rates per floor.
///
/// A floor absent from the table is invalid everywhere: entry, floor
/// changes, and fee computation all reject it. Rates are denominated in a
/// configurable currency label; the core never formats amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTable {
    /// Hourly rate per floor.
    rates: BTreeMap<i32, f64>,

    /// Currency the rates are denominated in.
    currency: String,
}

impl PriceTable {
    /// Creates a price table from floor/rate pairs with the default currency.
    pub fn new(rates: impl IntoIterator<Item = (i32, f64)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Sets the currency label.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Returns the hourly rate for a floor, if the floor exists.
    pub fn hourly_rate(&self, floor: i32) -> Option<f64> {
        self.rates.get(&floor).copied()
    }

    /// Returns true if the floor exists in the table.
    pub fn contains_floor(&self, floor: i32) -> bool {
        self.rates.contains_key(&floor)
    }

    /// Returns all floors in ascending order.
    pub fn floors(&self) -> impl Iterator<Item = i32> + '_ {
        self.rates.keys().copied()
    }

    /// Returns the currency label.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the number of floors.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no floors.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<(i32, f64)> for PriceTable {
    fn from_iter<T: IntoIterator<Item = (i32, f64)>>(iter: T) -> Self {
        Self::new(iter)
    }
}
