//! Freelancers.
//!
//! A freelancer carries a contract like any employee, but its pay repeats
//! the hourly and commission formulas on its own fields and never consults
//! that contract. The contract's employer cost is therefore never paid.

use rust_decimal::Decimal;
use tracing::debug;

use super::contract::Contract;
use super::employee::Payee;

/// A freelancer paid by the hour plus a per-contract commission.
#[derive(Debug)]
pub struct Freelancer {
    /// Display name.
    pub name: String,
    /// Numeric identifier.
    pub id: u64,
    contract: Box<dyn Contract>,
    /// Amount paid for each contract landed.
    pub commission: Decimal,
    /// Contracts landed this period.
    pub contracts_landed: Decimal,
    /// Pay per hour.
    pub pay_rate: Decimal,
    /// Hours worked this period.
    pub hours_worked: Decimal,
}

impl Freelancer {
    /// Creates a freelancer with zero rate and hours and a $100 commission.
    ///
    /// # Panics
    ///
    /// Never panics itself, but unlike roster loading the builders below do
    /// not check amounts: [`Freelancer::compute_pay`] panics on overflow.
    pub fn new(name: impl Into<String>, id: u64, contract: impl Contract + 'static) -> Self {
        Self::from_boxed(name, id, Box::new(contract))
    }

    /// Creates a freelancer from an already-boxed contract.
    pub fn from_boxed(name: impl Into<String>, id: u64, contract: Box<dyn Contract>) -> Self {
        Self {
            name: name.into(),
            id,
            contract,
            commission: Decimal::new(100, 0),
            contracts_landed: Decimal::ZERO,
            pay_rate: Decimal::ZERO,
            hours_worked: Decimal::ZERO,
        }
    }

    /// Sets the hourly rate and hours worked.
    pub fn with_hours(mut self, pay_rate: Decimal, hours_worked: Decimal) -> Self {
        self.pay_rate = pay_rate;
        self.hours_worked = hours_worked;
        self
    }

    /// Sets the contracts landed.
    pub fn with_contracts_landed(mut self, contracts_landed: Decimal) -> Self {
        self.contracts_landed = contracts_landed;
        self
    }

    /// Overrides the amount paid per contract.
    pub fn with_commission(mut self, commission: Decimal) -> Self {
        self.commission = commission;
        self
    }

    /// The carried contract. It plays no part in [`Freelancer::compute_pay`].
    pub fn contract(&self) -> &dyn Contract {
        self.contract.as_ref()
    }

    /// `pay_rate × hours_worked + commission × contracts_landed`, or `None`
    /// on overflow.
    pub fn checked_compute_pay(&self) -> Option<Decimal> {
        let hourly = self.pay_rate.checked_mul(self.hours_worked)?;
        let commission = self.commission.checked_mul(self.contracts_landed)?;
        hourly.checked_add(commission)
    }

    /// `pay_rate × hours_worked + commission × contracts_landed`.
    ///
    /// # Panics
    ///
    /// Panics if any product or the sum overflows `Decimal`.
    pub fn compute_pay(&self) -> Decimal {
        let total = self.pay_rate * self.hours_worked + self.commission * self.contracts_landed;
        debug!(freelancer = %self.name, id = self.id, total = %total, "Computed freelancer pay");
        total
    }
}

impl Payee for Freelancer {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn compute_pay(&self) -> Decimal {
        Freelancer::compute_pay(self)
    }

    fn checked_compute_pay(&self) -> Option<Decimal> {
        Freelancer::checked_compute_pay(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::{ContractCommission, Employee, HourlyContract};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// FL-001: hourly plus commission, computed inline
    #[test]
    fn test_freelancer_pay() {
        let freelancer = Freelancer::new("Rita", 900, HourlyContract::default())
            .with_hours(dec("50"), dec("100"))
            .with_contracts_landed(dec("10"));

        assert_eq!(freelancer.compute_pay(), dec("6000"));
    }

    #[test]
    fn test_default_freelancer_pays_nothing() {
        let freelancer = Freelancer::new("Rita", 900, HourlyContract::default());
        assert_eq!(freelancer.commission, dec("100"));
        assert_eq!(freelancer.compute_pay(), Decimal::ZERO);
    }

    /// FL-002: the carried contract is ignored. Flags the divergence from
    /// `Employee`, which would pay the same inputs 1000 more.
    #[test]
    fn test_freelancer_ignores_carried_contract() {
        let contract = HourlyContract::new(dec("50"), dec("100"));
        let freelancer = Freelancer::new("Rita", 900, contract.clone())
            .with_hours(dec("50"), dec("100"))
            .with_contracts_landed(dec("10"));

        let employee = Employee::new("Rita", 900, contract)
            .with_commission(ContractCommission::new(dec("10")));

        assert_eq!(freelancer.contract().compute_pay(), dec("6000"));
        assert_eq!(freelancer.compute_pay(), dec("6000"));
        assert_eq!(employee.compute_pay(), dec("7000"));
        assert_ne!(freelancer.compute_pay(), employee.compute_pay());
    }

    #[test]
    fn test_checked_pay_detects_overflow() {
        let freelancer = Freelancer::new("Rita", 900, HourlyContract::default())
            .with_hours(Decimal::MAX, dec("3"));
        assert_eq!(freelancer.checked_compute_pay(), None);

        let freelancer = Freelancer::new("Rita", 900, HourlyContract::default())
            .with_hours(dec("40"), dec("20"))
            .with_contracts_landed(dec("3"));
        assert_eq!(freelancer.checked_compute_pay(), Some(dec("1100")));
    }

    #[test]
    fn test_freelancer_as_payee() {
        let freelancer = Freelancer::new("Rita", 900, HourlyContract::default())
            .with_hours(dec("10"), dec("2"));
        let payee: Box<dyn Payee> = Box::new(freelancer);

        assert_eq!(payee.id(), 900);
        assert_eq!(payee.compute_pay(), dec("20"));
    }
}
