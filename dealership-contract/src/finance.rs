use serde::{Deserialize, Serialize};

/// Interest rate and term of a level-payment loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingTerms {
    /// Annual rate as a fraction (0.0425 is 4.25%)
    pub annual_rate: f64,
    pub term_months: u32,
}

impl FinancingTerms {
    pub const fn new(annual_rate: f64, term_months: u32) -> Self {
        Self { annual_rate, term_months }
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Level monthly payment that retires `principal` over the term.
    pub fn monthly_payment(&self, principal: f64) -> f64 {
        amortized_payment(principal, self.monthly_rate(), self.term_months)
    }

    /// Principal that `payment` per month retires over the term.
    pub fn principal_for(&self, payment: f64) -> f64 {
        present_value(payment, self.monthly_rate(), self.term_months)
    }
}

/// `P * r / (1 - (1 + r)^-n)`. Full precision, no rounding.
///
/// A zero rate degrades to straight-line repayment.
pub fn amortized_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return principal;
    }
    if monthly_rate == 0.0 {
        return principal / months as f64;
    }

    (principal * monthly_rate) / (1.0 - (1.0 + monthly_rate).powf(-(months as f64)))
}

/// Inverse of [`amortized_payment`].
pub fn present_value(payment: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return payment;
    }
    if monthly_rate == 0.0 {
        return payment * months as f64;
    }

    payment * (1.0 - (1.0 + monthly_rate).powf(-(months as f64))) / monthly_rate
}
