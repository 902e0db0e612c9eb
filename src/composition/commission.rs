//! Optional commission strategies added on top of a contract.

use std::fmt;

use rust_decimal::Decimal;

/// An additive pay-computation strategy owned by an employee.
pub trait Commission: fmt::Debug {
    /// Computes how much to pay under this commission.
    ///
    /// # Panics
    ///
    /// Panics if the amount overflows `Decimal`. Roster loading rejects such
    /// commissions; [`Commission::checked_compute_pay`] checks directly.
    fn compute_pay(&self) -> Decimal;

    /// Computes the pay, or `None` if the amount overflows.
    fn checked_compute_pay(&self) -> Option<Decimal>;
}

/// A commission paid per contract landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCommission {
    /// Amount paid for each contract.
    pub commission: Decimal,
    /// Contracts landed this period.
    pub contracts_landed: Decimal,
}

impl ContractCommission {
    /// Creates a commission at the default $100 per contract.
    ///
    /// # Panics
    ///
    /// Never panics itself, but no range check is made here:
    /// [`Commission::compute_pay`] panics if the product overflows.
    pub fn new(contracts_landed: Decimal) -> Self {
        Self {
            contracts_landed,
            ..Self::default()
        }
    }

    /// Overrides the amount paid per contract.
    pub fn with_commission(mut self, commission: Decimal) -> Self {
        self.commission = commission;
        self
    }
}

impl Default for ContractCommission {
    fn default() -> Self {
        Self {
            commission: Decimal::new(100, 0),
            contracts_landed: Decimal::ZERO,
        }
    }
}

impl Commission for ContractCommission {
    fn compute_pay(&self) -> Decimal {
        self.commission * self.contracts_landed
    }

    fn checked_compute_pay(&self) -> Option<Decimal> {
        self.commission.checked_mul(self.contracts_landed)
    }
}
