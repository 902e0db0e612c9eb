//! The composition-style employee.
//!
//! An [`Employee`] owns exactly one [`Contract`] and at most one
//! [`Commission`]; its pay is the sum of the two.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::commission::Commission;
use super::contract::Contract;

/// Anyone the company pays.
///
/// Lets employees and freelancers share one workforce listing.
pub trait Payee: fmt::Debug {
    /// Display name.
    fn name(&self) -> &str;

    /// Numeric identifier.
    fn id(&self) -> u64;

    /// Computes how much to pay this period.
    ///
    /// # Panics
    ///
    /// Panics if the amount overflows `Decimal`.
    fn compute_pay(&self) -> Decimal;

    /// Computes the pay, or `None` if the amount overflows.
    fn checked_compute_pay(&self) -> Option<Decimal>;
}

/// The components making up an employee's pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayBreakdown {
    /// Amount from the contract.
    pub contract: Decimal,
    /// Amount from the commission, if the employee has one.
    pub commission: Option<Decimal>,
    /// Contract plus commission.
    pub total: Decimal,
}

/// An employee whose pay rule is delegated to owned strategies.
///
/// # Examples
///
/// ```
/// use payroll_patterns::composition::{ContractCommission, Employee, SalariedContract};
/// use rust_decimal::Decimal;
///
/// let sarah = Employee::new("Sarah", 47832, SalariedContract::new(Decimal::from(5000)))
///     .with_commission(ContractCommission::new(Decimal::from(10)));
///
/// assert_eq!(sarah.compute_pay(), Decimal::from(6000));
/// ```
#[derive(Debug)]
pub struct Employee {
    /// Display name.
    pub name: String,
    /// Numeric identifier.
    pub id: u64,
    contract: Box<dyn Contract>,
    commission: Option<Box<dyn Commission>>,
}

impl Employee {
    /// Creates an employee paid under `contract` with no commission.
    ///
    /// # Panics
    ///
    /// Never panics itself, but unlike roster loading it does not check the
    /// strategies' amounts: [`Employee::compute_pay`] panics on overflow.
    pub fn new(name: impl Into<String>, id: u64, contract: impl Contract + 'static) -> Self {
        Self::from_boxed(name, id, Box::new(contract), None)
    }

    /// Creates an employee from already-boxed strategies.
    pub fn from_boxed(
        name: impl Into<String>,
        id: u64,
        contract: Box<dyn Contract>,
        commission: Option<Box<dyn Commission>>,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            contract,
            commission,
        }
    }

    /// Attaches a commission, replacing any existing one.
    pub fn with_commission(mut self, commission: impl Commission + 'static) -> Self {
        self.commission = Some(Box::new(commission));
        self
    }

    /// The owned contract.
    pub fn contract(&self) -> &dyn Contract {
        self.contract.as_ref()
    }

    /// The owned commission, if any.
    pub fn commission(&self) -> Option<&dyn Commission> {
        self.commission.as_deref()
    }

    /// Contract pay plus commission pay when a commission is present.
    ///
    /// # Panics
    ///
    /// Panics if either component or their sum overflows `Decimal`.
    pub fn compute_pay(&self) -> Decimal {
        self.pay_breakdown().total
    }

    /// Like [`Employee::compute_pay`], but `None` on overflow.
    pub fn checked_compute_pay(&self) -> Option<Decimal> {
        let contract = self.contract.checked_compute_pay()?;
        match &self.commission {
            Some(commission) => contract.checked_add(commission.checked_compute_pay()?),
            None => Some(contract),
        }
    }

    /// Computes pay and keeps each component.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Employee::compute_pay`].
    pub fn pay_breakdown(&self) -> PayBreakdown {
        let contract = self.contract.compute_pay();
        let commission = self.commission.as_ref().map(|c| c.compute_pay());
        let total = contract + commission.unwrap_or(Decimal::ZERO);

        debug!(employee = %self.name, id = self.id, total = %total, "Computed employee pay");

        PayBreakdown {
            contract,
            commission,
            total,
        }
    }
}

impl Payee for Employee {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn compute_pay(&self) -> Decimal {
        Employee::compute_pay(self)
    }

    fn checked_compute_pay(&self) -> Option<Decimal> {
        Employee::checked_compute_pay(self)
    }
}
