//! The inheritance-style employee model.
//!
//! Every variant embeds an [`EmployeeProfile`] and implements [`Employee`],
//! which supplies holiday accounting as provided methods and leaves only the
//! pay rule ([`Employee::pay`] and its checked amount) to the variant.

use std::fmt;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::PayrollResult;

use super::holiday::{DEFAULT_VACATION_DAYS, HolidayOutcome, HolidayRequest};
use super::role::Role;

/// Identity and vacation balance shared by all employee variants.
///
/// The balance can only shrink through a granted holiday request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfile {
    /// The employee's name.
    pub name: String,
    /// The employee's role in the company.
    pub role: Role,
    pub(crate) vacation_days: u32,
}

impl EmployeeProfile {
    /// Creates a profile with the default balance of 25 vacation days.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            vacation_days: DEFAULT_VACATION_DAYS,
        }
    }

    /// Overrides the starting vacation balance.
    pub fn with_vacation_days(mut self, vacation_days: u32) -> Self {
        self.vacation_days = vacation_days;
        self
    }

    /// Remaining vacation days.
    pub fn vacation_days(&self) -> u32 {
        self.vacation_days
    }
}

/// The amount an employee was paid, with a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayResult {
    /// The computed pay amount.
    pub amount: Decimal,
    /// How the amount was arrived at.
    pub reasoning: String,
}

/// An employee whose pay rule depends on its variant.
///
/// # Examples
///
/// ```
/// use payroll_patterns::inheritance::{Employee, HourlyEmployee, Role};
/// use rust_decimal::Decimal;
///
/// let mut brenda = HourlyEmployee::new("Brenda", Role::VicePresident);
/// assert_eq!(brenda.pay().amount, Decimal::from(500));
///
/// let outcome = brenda.take_a_holiday(true).unwrap();
/// assert_eq!(outcome.remaining, 20);
/// ```
pub trait Employee: fmt::Debug {
    /// Shared identity and balance.
    fn profile(&self) -> &EmployeeProfile;

    /// Mutable access for holiday accounting.
    fn profile_mut(&mut self) -> &mut EmployeeProfile;

    /// Computes this period's pay. Never mutates.
    ///
    /// # Panics
    ///
    /// Panics if the amount overflows `Decimal`. Roster loading rejects such
    /// employees; [`Employee::checked_pay_amount`] checks directly.
    fn pay(&self) -> PayResult;

    /// The amount [`Employee::pay`] would report, or `None` on overflow.
    fn checked_pay_amount(&self) -> Option<Decimal>;

    /// The employee's name.
    fn name(&self) -> &str {
        &self.profile().name
    }

    /// The employee's role.
    fn role(&self) -> Role {
        self.profile().role
    }

    /// Remaining vacation days.
    fn vacation_days(&self) -> u32 {
        self.profile().vacation_days()
    }

    /// Grants `request` if the balance covers it.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientHolidayBalance` when the balance is too small;
    /// the balance is left unchanged in that case.
    fn request_holiday(&mut self, request: HolidayRequest) -> PayrollResult<HolidayOutcome> {
        self.profile_mut().request_holiday(request)
    }

    /// Takes a single holiday, or pays out a fixed block of days when
    /// `payout` is true.
    fn take_a_holiday(&mut self, payout: bool) -> PayrollResult<HolidayOutcome> {
        self.request_holiday(HolidayRequest::from_payout(payout))
    }
}

/// Employee paid for the hours they worked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyEmployee {
    /// Shared identity and balance.
    pub profile: EmployeeProfile,
    /// Pay per hour, in dollars.
    pub hourly_rate: Decimal,
    /// Hours worked this period.
    pub hours_worked: Decimal,
}

impl HourlyEmployee {
    /// Creates an hourly employee at $50 for 10 hours.
    ///
    /// # Panics
    ///
    /// Never panics itself, but unlike roster loading the builders below do
    /// not check amounts: [`Employee::pay`] panics if rate times hours
    /// overflows.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            profile: EmployeeProfile::new(name, role),
            hourly_rate: Decimal::new(50, 0),
            hours_worked: Decimal::new(10, 0),
        }
    }

    /// Sets the hourly rate.
    pub fn with_hourly_rate(mut self, hourly_rate: Decimal) -> Self {
        self.hourly_rate = hourly_rate;
        self
    }

    /// Sets the hours worked.
    pub fn with_hours_worked(mut self, hours_worked: Decimal) -> Self {
        self.hours_worked = hours_worked;
        self
    }

    /// Sets the starting vacation balance.
    pub fn with_vacation_days(mut self, vacation_days: u32) -> Self {
        self.profile = self.profile.with_vacation_days(vacation_days);
        self
    }
}

impl Employee for HourlyEmployee {
    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut EmployeeProfile {
        &mut self.profile
    }

    fn pay(&self) -> PayResult {
        let amount = self.hourly_rate * self.hours_worked;
        info!(employee = %self.profile.name, amount = %amount, "Paying hourly employee");

        PayResult {
            amount,
            reasoning: format!(
                "Paying employee {} a hourly rate of ${} for {} hours.",
                self.profile.name, self.hourly_rate, self.hours_worked
            ),
        }
    }

    fn checked_pay_amount(&self) -> Option<Decimal> {
        self.hourly_rate.checked_mul(self.hours_worked)
    }
}

/// Employee paid a fixed monthly salary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalariedEmployee {
    /// Shared identity and balance.
    pub profile: EmployeeProfile,
    /// Fixed monthly salary, in dollars.
    pub monthly_salary: Decimal,
}

impl SalariedEmployee {
    /// Creates a salaried employee on $5000 a month.
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            profile: EmployeeProfile::new(name, role),
            monthly_salary: Decimal::new(5000, 0),
        }
    }

    /// Sets the monthly salary.
    pub fn with_monthly_salary(mut self, monthly_salary: Decimal) -> Self {
        self.monthly_salary = monthly_salary;
        self
    }

    /// Sets the starting vacation balance.
    pub fn with_vacation_days(mut self, vacation_days: u32) -> Self {
        self.profile = self.profile.with_vacation_days(vacation_days);
        self
    }
}

impl Employee for SalariedEmployee {
    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut EmployeeProfile {
        &mut self.profile
    }

    fn pay(&self) -> PayResult {
        info!(employee = %self.profile.name, amount = %self.monthly_salary, "Paying salaried employee");

        PayResult {
            amount: self.monthly_salary,
            reasoning: format!(
                "Paying employee {} a monthly salary of ${}.",
                self.profile.name, self.monthly_salary
            ),
        }
    }

    fn checked_pay_amount(&self) -> Option<Decimal> {
        Some(self.monthly_salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// PAY-001: hourly pay is rate times hours
    #[test]
    fn test_hourly_employee_default_pay() {
        let employee = HourlyEmployee::new("Brenda", Role::VicePresident);
        let result = employee.pay();

        assert_eq!(result.amount, dec("500"));
        assert_eq!(
            result.reasoning,
            "Paying employee Brenda a hourly rate of $50 for 10 hours."
        );
    }

    /// PAY-002: salaried pay is the monthly salary
    #[test]
    fn test_salaried_employee_default_pay() {
        let employee = SalariedEmployee::new("Louis", Role::Manager);
        let result = employee.pay();

        assert_eq!(result.amount, dec("5000"));
        assert_eq!(
            result.reasoning,
            "Paying employee Louis a monthly salary of $5000."
        );
    }

    /// PAY-003: fractional rates keep decimal precision
    #[test]
    fn test_hourly_pay_with_fractional_rate() {
        let employee = HourlyEmployee::new("Tim", Role::Intern)
            .with_hourly_rate(dec("28.54"))
            .with_hours_worked(dec("7.5"));

        assert_eq!(employee.pay().amount, dec("214.05"));
    }

    /// PAY-004: negative inputs are not validated
    #[test]
    fn test_negative_inputs_produce_negative_pay() {
        let hourly = HourlyEmployee::new("Tim", Role::Intern).with_hours_worked(dec("-4"));
        assert_eq!(hourly.pay().amount, dec("-200"));

        let salaried =
            SalariedEmployee::new("Louis", Role::Manager).with_monthly_salary(dec("-1"));
        assert_eq!(salaried.pay().amount, dec("-1"));
    }

    #[test]
    fn test_checked_pay_amount_detects_overflow() {
        let huge = HourlyEmployee::new("Brenda", Role::VicePresident)
            .with_hourly_rate(dec("100000000000000000000"))
            .with_hours_worked(dec("100000000000000000000"));
        assert_eq!(huge.checked_pay_amount(), None);

        let brenda = HourlyEmployee::new("Brenda", Role::VicePresident);
        assert_eq!(brenda.checked_pay_amount(), Some(brenda.pay().amount));

        let louis = SalariedEmployee::new("Louis", Role::Manager).with_monthly_salary(Decimal::MAX);
        assert_eq!(louis.checked_pay_amount(), Some(Decimal::MAX));
    }

    #[test]
    fn test_new_employee_has_default_vacation_days() {
        let employee = SalariedEmployee::new("Louis", Role::Manager);
        assert_eq!(employee.vacation_days(), 25);
        assert_eq!(employee.name(), "Louis");
        assert_eq!(employee.role(), Role::Manager);
    }

    #[test]
    fn test_pay_does_not_mutate_employee() {
        let employee = HourlyEmployee::new("Brenda", Role::VicePresident);
        let before = employee.clone();
        let _ = employee.pay();
        assert_eq!(employee, before);
    }

    #[test]
    fn test_take_a_holiday_through_trait_object() {
        let mut employee: Box<dyn Employee> =
            Box::new(SalariedEmployee::new("Louis", Role::Manager).with_vacation_days(6));

        let payout = employee.take_a_holiday(true).unwrap();
        assert_eq!(payout.remaining, 1);

        let refused = employee.take_a_holiday(true);
        assert!(matches!(
            refused,
            Err(PayrollError::InsufficientHolidayBalance { remaining: 1, .. })
        ));

        let single = employee.take_a_holiday(false).unwrap();
        assert_eq!(single.remaining, 0);
        assert_eq!(employee.vacation_days(), 0);
    }

    proptest! {
        #[test]
        fn prop_hourly_pay_is_rate_times_hours(rate in -10_000i64..10_000, hours in -500i64..500) {
            let employee = HourlyEmployee::new("Brenda", Role::VicePresident)
                .with_hourly_rate(Decimal::from(rate))
                .with_hours_worked(Decimal::from(hours));

            prop_assert_eq!(employee.pay().amount, Decimal::from(rate * hours));
        }
    }
}
