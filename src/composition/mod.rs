//! Payroll modelled through owned pay strategies.
//!
//! An [`Employee`] owns a [`Contract`] and optionally a [`Commission`].
//! [`Freelancer`] is the odd one out: it repeats the formulas inline.

mod commission;
mod contract;
mod employee;
mod freelancer;

pub use commission::{Commission, ContractCommission};
pub use contract::{Contract, HourlyContract, SalariedContract};
pub use employee::{Employee, PayBreakdown, Payee};
pub use freelancer::Freelancer;
