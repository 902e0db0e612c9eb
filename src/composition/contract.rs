//! Pay contracts owned by a composition-style employee.

use std::fmt;

use rust_decimal::Decimal;

/// A pay-computation strategy owned by an employee.
pub trait Contract: fmt::Debug {
    /// Computes how much to pay under this contract.
    ///
    /// # Panics
    ///
    /// Panics if the amount overflows `Decimal`. Roster loading rejects such
    /// contracts; [`Contract::checked_compute_pay`] checks directly.
    fn compute_pay(&self) -> Decimal;

    /// Computes the pay, or `None` if the amount overflows.
    fn checked_compute_pay(&self) -> Option<Decimal>;
}

/// A contract paid by the hour, plus a fixed employer cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyContract {
    /// Pay per hour.
    pub pay_rate: Decimal,
    /// Hours worked this period.
    pub hours_worked: Decimal,
    /// Fixed cost added on top of the hourly amount.
    pub employer_cost: Decimal,
}

impl HourlyContract {
    /// Creates an hourly contract with the default $1000 employer cost.
    ///
    /// # Panics
    ///
    /// Never panics itself, but no range check is made here:
    /// [`Contract::compute_pay`] panics if rate, hours and cost overflow.
    pub fn new(pay_rate: Decimal, hours_worked: Decimal) -> Self {
        Self {
            pay_rate,
            hours_worked,
            ..Self::default()
        }
    }

    /// Overrides the employer cost.
    pub fn with_employer_cost(mut self, employer_cost: Decimal) -> Self {
        self.employer_cost = employer_cost;
        self
    }
}

impl Default for HourlyContract {
    fn default() -> Self {
        Self {
            pay_rate: Decimal::ZERO,
            hours_worked: Decimal::ZERO,
            employer_cost: Decimal::new(1000, 0),
        }
    }
}

impl Contract for HourlyContract {
    fn compute_pay(&self) -> Decimal {
        self.pay_rate * self.hours_worked + self.employer_cost
    }

    fn checked_compute_pay(&self) -> Option<Decimal> {
        self.pay_rate
            .checked_mul(self.hours_worked)?
            .checked_add(self.employer_cost)
    }
}

/// A contract paid as a share of a monthly salary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalariedContract {
    /// Full monthly salary.
    pub monthly_salary: Decimal,
    /// Fraction of the salary paid; 1 means full time.
    pub percentage: Decimal,
}

impl SalariedContract {
    /// Creates a full-time salaried contract.
    ///
    /// # Panics
    ///
    /// Never panics itself, but no range check is made here:
    /// [`Contract::compute_pay`] panics if salary times percentage overflows.
    pub fn new(monthly_salary: Decimal) -> Self {
        Self {
            monthly_salary,
            ..Self::default()
        }
    }

    /// Overrides the salary fraction.
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = percentage;
        self
    }
}

impl Default for SalariedContract {
    fn default() -> Self {
        Self {
            monthly_salary: Decimal::ZERO,
            percentage: Decimal::ONE,
        }
    }
}

impl Contract for SalariedContract {
    fn compute_pay(&self) -> Decimal {
        self.monthly_salary * self.percentage
    }

    fn checked_compute_pay(&self) -> Option<Decimal> {
        self.monthly_salary.checked_mul(self.percentage)
    }
}
