use serde::{Deserialize, Serialize};

use crate::finance::FinancingTerms;

/// Pricing rules for leases
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaseSchedule {
    /// Fraction of the price the vehicle is expected to be worth at lease end
    pub expected_ending_value_rate: f64,

    /// Fraction of the price charged as the lease fee
    pub lease_fee_rate: f64,

    pub financing: FinancingTerms,
}

impl Default for LeaseSchedule {
    fn default() -> Self {
        Self {
            expected_ending_value_rate: 0.50,
            lease_fee_rate: 0.07,
            financing: FinancingTerms::new(0.04, 36),
        }
    }
}

/// Lease-specific half of a contract. Leases are always financed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaseContract {
    pub schedule: LeaseSchedule,
}

impl LeaseContract {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(schedule: LeaseSchedule) -> Self {
        Self { schedule }
    }

    pub fn expected_ending_value(&self, price: f64) -> f64 {
        price * self.schedule.expected_ending_value_rate
    }

    pub fn lease_fee(&self, price: f64) -> f64 {
        price * self.schedule.lease_fee_rate
    }

    pub fn total_price(&self, price: f64) -> f64 {
        price - self.expected_ending_value(price) + self.lease_fee(price)
    }

    pub fn financing(&self) -> FinancingTerms {
        self.schedule.financing
    }

    pub fn monthly_payment(&self, price: f64) -> f64 {
        self.financing().monthly_payment(self.total_price(price))
    }
}
