//! Payroll modelled through shared trait behaviour.
//!
//! [`Employee`] supplies holiday accounting to every variant; each variant
//! only decides how it is paid. [`Company`] is a plain directory over them.

mod company;
mod employee;
mod holiday;
mod role;

pub use company::Company;
pub use employee::{Employee, EmployeeProfile, HourlyEmployee, PayResult, SalariedEmployee};
pub use holiday::{
    DEFAULT_VACATION_DAYS, FIXED_VACATION_DAYS_PAYOUT, HolidayOutcome, HolidayRequest,
};
pub use role::Role;
