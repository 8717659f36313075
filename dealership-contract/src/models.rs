use dealership_shared::{Masked, Vehicle};
use serde::{Deserialize, Serialize};

use crate::lease::{LeaseContract, LeaseSchedule};
use crate::sales::{SalesContract, SalesSchedule};

/// Schedules a dealership prices its contracts under
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractTerms {
    pub sales: SalesSchedule,
    pub lease: LeaseSchedule,
}

impl ContractTerms {
    pub fn sale(&self, financed: bool) -> ContractKind {
        ContractKind::Sale(SalesContract::with_schedule(financed, self.sales))
    }

    pub fn lease(&self) -> ContractKind {
        ContractKind::Lease(LeaseContract::with_schedule(self.lease))
    }
}

/// What kind of deal a contract records
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractKind {
    Sale(SalesContract),
    Lease(LeaseContract),
}

impl ContractKind {
    /// Tag written at the start of a contract record
    pub fn tag(&self) -> &'static str {
        match self {
            ContractKind::Sale(_) => "SALE",
            ContractKind::Lease(_) => "LEASE",
        }
    }
}

/// A signed sale or lease of one vehicle.
///
/// The vehicle is copied in at signing, so derived amounts always reflect the
/// price the customer agreed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub date: String,
    pub customer_name: String,
    pub customer_email: Masked<String>,
    pub vehicle: Vehicle,
    pub kind: ContractKind,
}

impl Contract {
    pub fn new(
        date: impl Into<String>,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        vehicle: Vehicle,
        kind: ContractKind,
    ) -> Self {
        Self {
            date: date.into(),
            customer_name: customer_name.into(),
            customer_email: Masked(customer_email.into()),
            vehicle,
            kind,
        }
    }

    /// Sale under the standard schedule
    pub fn sale(
        date: impl Into<String>,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        vehicle: Vehicle,
        financed: bool,
    ) -> Self {
        Self::new(date, customer_name, customer_email, vehicle, ContractKind::Sale(SalesContract::new(financed)))
    }

    /// Lease under the standard schedule
    pub fn lease(
        date: impl Into<String>,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        vehicle: Vehicle,
    ) -> Self {
        Self::new(date, customer_name, customer_email, vehicle, ContractKind::Lease(LeaseContract::new()))
    }

    pub fn total_price(&self) -> f64 {
        let price = self.vehicle.price;
        match &self.kind {
            ContractKind::Sale(sale) => sale.total_price(price),
            ContractKind::Lease(lease) => lease.total_price(price),
        }
    }

    /// Zero when the contract is not financed
    pub fn monthly_payment(&self) -> f64 {
        let price = self.vehicle.price;
        match &self.kind {
            ContractKind::Sale(sale) => sale.monthly_payment(price),
            ContractKind::Lease(lease) => lease.monthly_payment(price),
        }
    }

    pub fn is_financed(&self) -> bool {
        match &self.kind {
            ContractKind::Sale(sale) => sale.financed,
            ContractKind::Lease(_) => true,
        }
    }

    /// Every derived amount, computed from the vehicle price
    pub fn breakdown(&self) -> PriceBreakdown {
        let price = self.vehicle.price;
        match &self.kind {
            ContractKind::Sale(sale) => {
                let financing = sale.financing(price);
                PriceBreakdown::Sale {
                    vehicle_price: price,
                    sales_tax_amount: sale.sales_tax_amount(price),
                    recording_fee: sale.recording_fee(),
                    processing_fee: sale.processing_fee(price),
                    total_price: sale.total_price(price),
                    financed: sale.financed,
                    annual_rate: financing.map(|f| f.annual_rate),
                    term_months: financing.map(|f| f.term_months),
                    monthly_payment: sale.monthly_payment(price),
                }
            }
            ContractKind::Lease(lease) => {
                let financing = lease.financing();
                PriceBreakdown::Lease {
                    vehicle_price: price,
                    expected_ending_value: lease.expected_ending_value(price),
                    lease_fee: lease.lease_fee(price),
                    total_price: lease.total_price(price),
                    annual_rate: financing.annual_rate,
                    term_months: financing.term_months,
                    monthly_payment: lease.monthly_payment(price),
                }
            }
        }
    }
}

/// Itemized pricing of a contract, as quoted to the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceBreakdown {
    Sale {
        vehicle_price: f64,
        sales_tax_amount: f64,
        recording_fee: f64,
        processing_fee: f64,
        total_price: f64,
        financed: bool,
        annual_rate: Option<f64>,
        term_months: Option<u32>,
        monthly_payment: f64,
    },
    Lease {
        vehicle_price: f64,
        expected_ending_value: f64,
        lease_fee: f64,
        total_price: f64,
        annual_rate: f64,
        term_months: u32,
        monthly_payment: f64,
    },
}

impl PriceBreakdown {
    pub fn total_price(&self) -> f64 {
        match self {
            PriceBreakdown::Sale { total_price, .. } | PriceBreakdown::Lease { total_price, .. } => *total_price,
        }
    }

    pub fn monthly_payment(&self) -> f64 {
        match self {
            PriceBreakdown::Sale { monthly_payment, .. } | PriceBreakdown::Lease { monthly_payment, .. } => {
                *monthly_payment
            }
        }
    }
}
