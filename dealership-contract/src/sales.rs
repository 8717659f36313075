use serde::{Deserialize, Serialize};

use crate::finance::FinancingTerms;

/// Fees and loan terms that apply on one side of the price threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesTier {
    pub processing_fee: f64,
    pub financing: FinancingTerms,
}

/// Pricing rules for outright sales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesSchedule {
    /// Fraction of the vehicle price charged as sales tax
    pub sales_tax_rate: f64,

    /// Flat fee for recording the title
    pub recording_fee: f64,

    /// Prices strictly below this use `lower_tier`, everything else `upper_tier`
    pub tier_threshold: f64,

    pub lower_tier: SalesTier,
    pub upper_tier: SalesTier,
}

impl Default for SalesSchedule {
    fn default() -> Self {
        Self {
            sales_tax_rate: 0.05,
            recording_fee: 100.00,
            tier_threshold: 10_000.00,
            lower_tier: SalesTier {
                processing_fee: 295.00,
                financing: FinancingTerms::new(0.0525, 24),
            },
            upper_tier: SalesTier {
                processing_fee: 495.00,
                financing: FinancingTerms::new(0.0425, 48),
            },
        }
    }
}

impl SalesSchedule {
    pub fn tier(&self, price: f64) -> &SalesTier {
        if price < self.tier_threshold {
            &self.lower_tier
        } else {
            &self.upper_tier
        }
    }
}

/// Sale-specific half of a contract.
///
/// Every amount is derived from the vehicle price on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesContract {
    pub financed: bool,
    pub schedule: SalesSchedule,
}

impl SalesContract {
    pub fn new(financed: bool) -> Self {
        Self::with_schedule(financed, SalesSchedule::default())
    }

    pub fn with_schedule(financed: bool, schedule: SalesSchedule) -> Self {
        Self { financed, schedule }
    }

    pub fn sales_tax_amount(&self, price: f64) -> f64 {
        price * self.schedule.sales_tax_rate
    }

    pub fn recording_fee(&self) -> f64 {
        self.schedule.recording_fee
    }

    pub fn processing_fee(&self, price: f64) -> f64 {
        self.schedule.tier(price).processing_fee
    }

    pub fn total_price(&self, price: f64) -> f64 {
        price + self.sales_tax_amount(price) + self.recording_fee() + self.processing_fee(price)
    }

    /// Loan terms, or `None` for a cash sale
    pub fn financing(&self, price: f64) -> Option<FinancingTerms> {
        self.financed.then(|| self.schedule.tier(price).financing)
    }

    /// Zero for a cash sale; otherwise the total price amortized over the tier's term.
    pub fn monthly_payment(&self, price: f64) -> f64 {
        match self.financing(price) {
            Some(terms) => terms.monthly_payment(self.total_price(price)),
            None => 0.0,
        }
    }
}
