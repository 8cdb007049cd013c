//! Parking ledger - owns active sessions and exit history.

use crate::clock::{Clock, SystemClock};
use crate::error::LedgerError;
use crate::session::{HistoryEntry, PaymentInfo, PaymentReceipt, Session, VehicleId};
use crate::validator::RegistrationValidator;
use carpark_pricing::{round2, FeeCalculator};
use std::collections::HashMap;
use std::sync::Arc;

/// The parking ledger.
///
/// Tracks every vehicle through *absent* -> *parked unpaid* -> *parked
/// paid* -> *absent*, recording a [`HistoryEntry`] on the final
/// transition. All operations are synchronous and atomic with respect to
/// the state they touch; a failed operation leaves no partial state
/// behind.
///
/// Fees are recomputed from elapsed time on every read: the amount owed
/// keeps growing until exit, and the fee recorded in history is the
/// exit-time recomputation, not the amount that was paid. Paying again
/// after payment is permitted and simply re-marks the session paid.
pub struct ParkingLedger {
    /// Fee computation and floor validity.
    calculator: FeeCalculator,

    /// Entry gate for registration numbers.
    validator: Box<dyn RegistrationValidator>,

    /// Time source.
    clock: Arc<dyn Clock>,

    /// Active sessions, at most one per vehicle.
    active: HashMap<VehicleId, Session>,

    /// Completed cycles per vehicle, oldest first.
    history: HashMap<VehicleId, Vec<HistoryEntry>>,
}

impl ParkingLedger {
    /// Creates a ledger over a fee calculator and validator, reading the
    /// system clock.
    pub fn new(
        calculator: FeeCalculator,
        validator: impl RegistrationValidator + 'static,
    ) -> Self {
        Self {
            calculator,
            validator: Box::new(validator),
            clock: Arc::new(SystemClock),
            active: HashMap::new(),
            history: HashMap::new(),
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Registers a vehicle entering the facility.
    pub fn register_entry(
        &mut self,
        country: &str,
        registration_no: &str,
        floor: i32,
    ) -> Result<(), LedgerError> {
        if !self.validator.validate(country, registration_no) {
            return Err(LedgerError::InvalidRegistration {
                country: country.to_string(),
                registration_no: registration_no.to_string(),
            });
        }

        let vehicle = VehicleId::new(country, registration_no);

        if self.active.contains_key(&vehicle) {
            return Err(LedgerError::AlreadyParked { vehicle });
        }

        if !self.calculator.table().contains_floor(floor) {
            return Err(LedgerError::UnknownFloor { floor });
        }

        let session = Session::new(self.clock.now(), floor);
        tracing::info!("vehicle {} entered on floor {}", vehicle, floor);
        self.active.insert(vehicle, session);

        Ok(())
    }

    /// Returns the fee currently owed by a parked vehicle.
    ///
    /// Pure read; the fee grows with elapsed time until exit.
    pub fn payment_info(
        &self,
        country: &str,
        registration_no: &str,
    ) -> Result<PaymentInfo, LedgerError> {
        let vehicle = VehicleId::new(country, registration_no);
        let session = self.session(&vehicle)?;

        let elapsed = self.clock.now() - session.entry_time;
        let minutes = elapsed.num_seconds() / 60;

        let fee = self.calculator.calculate_fee(minutes, session.floor)?;

        Ok(PaymentInfo {
            country: country.to_string(),
            registration_no: registration_no.to_string(),
            fee,
            minutes,
        })
    }

    /// Accepts payment for a parked vehicle.
    ///
    /// The required fee is whatever [`payment_info`](Self::payment_info)
    /// reports at this instant; tendering less fails and leaves the
    /// session unpaid.
    pub fn pay_fee(
        &mut self,
        country: &str,
        registration_no: &str,
        amount: f64,
    ) -> Result<PaymentReceipt, LedgerError> {
        let info = self.payment_info(country, registration_no)?;

        if amount < info.fee {
            return Err(LedgerError::InsufficientAmount {
                required: info.fee,
                offered: amount,
                currency: self.calculator.table().currency().to_string(),
            });
        }

        let vehicle = VehicleId::new(country, registration_no);
        // payment_info above guarantees the session exists.
        if let Some(session) = self.active.get_mut(&vehicle) {
            session.mark_paid();
        }

        let change = round2(amount - info.fee);
        tracing::info!(
            "vehicle {} paid {} (required {}, change {})",
            vehicle,
            amount,
            info.fee,
            change
        );

        Ok(PaymentReceipt {
            required_fee: info.fee,
            paid_amount: amount,
            change,
            currency: self.calculator.table().currency().to_string(),
        })
    }

    /// Registers a paid vehicle leaving the facility.
    ///
    /// Appends one history entry and removes the active session.
    pub fn register_exit(
        &mut self,
        country: &str,
        registration_no: &str,
    ) -> Result<(), LedgerError> {
        let info = self.payment_info(country, registration_no)?;

        let vehicle = VehicleId::new(country, registration_no);
        let session = self.session(&vehicle)?;

        if !session.paid {
            return Err(LedgerError::NotPaid { vehicle });
        }

        let entry = HistoryEntry {
            entry_time: session.entry_time,
            exit_time: self.clock.now(),
            floor: session.floor,
            fee: info.fee,
        };

        tracing::info!(
            "vehicle {} exited from floor {} after {} minutes, fee {}",
            vehicle,
            entry.floor,
            info.minutes,
            entry.fee
        );

        self.history.entry(vehicle.clone()).or_default().push(entry);
        self.active.remove(&vehicle);

        Ok(())
    }

    /// Moves a parked vehicle to another floor.
    ///
    /// Entry time and payment state are untouched; subsequent fees use the
    /// new floor's rate.
    pub fn change_floor(
        &mut self,
        country: &str,
        registration_no: &str,
        new_floor: i32,
    ) -> Result<(), LedgerError> {
        let vehicle = VehicleId::new(country, registration_no);

        if !self.active.contains_key(&vehicle) {
            return Err(LedgerError::VehicleNotFound { vehicle });
        }

        if !self.calculator.table().contains_floor(new_floor) {
            return Err(LedgerError::UnknownFloor { floor: new_floor });
        }

        if let Some(session) = self.active.get_mut(&vehicle) {
            tracing::debug!(
                "vehicle {} relocated from floor {} to {}",
                vehicle,
                session.floor,
                new_floor
            );
            session.relocate(new_floor);
        }

        Ok(())
    }

    /// Returns the number of vehicles currently in the facility.
    pub fn occupancy(&self) -> usize {
        self.active.len()
    }

    /// Returns true if the vehicle has an active session.
    pub fn is_parked(&self, country: &str, registration_no: &str) -> bool {
        self.active
            .contains_key(&VehicleId::new(country, registration_no))
    }

    /// Returns the completed cycles for a vehicle, oldest first.
    pub fn history_for(&self, country: &str, registration_no: &str) -> &[HistoryEntry] {
        self.history
            .get(&VehicleId::new(country, registration_no))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn session(&self, vehicle: &VehicleId) -> Result<&Session, LedgerError> {
        self.active
            .get(vehicle)
            .ok_or_else(|| LedgerError::VehicleNotFound {
                vehicle: vehicle.clone(),
            })
    }
}
