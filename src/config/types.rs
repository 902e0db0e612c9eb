//! Roster types deserialized from YAML.
//!
//! Every pay field is optional; omitted values take the same defaults as the
//! corresponding constructors. Building from an entry computes its pay once
//! with checked arithmetic, so amounts that would overflow are rejected here
//! rather than panicking at payday.

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::composition::{
    Commission, Contract, ContractCommission, Employee, Freelancer, HourlyContract, Payee,
    SalariedContract,
};
use crate::error::{PayrollError, PayrollResult};
use crate::inheritance::{Company, Employee as StaffMember, HourlyEmployee, Role, SalariedEmployee};

/// File holding the company metadata and directory.
pub(crate) const COMPANY_FILE: &str = "company.yaml";

/// File holding the contracted workforce.
pub(crate) const WORKFORCE_FILE: &str = "workforce.yaml";

fn overflow(file: &str, what: impl fmt::Display) -> PayrollError {
    PayrollError::ConfigParseError {
        path: file.to_string(),
        message: format!("{what} overflows"),
    }
}

/// Prefixes a parse error's message with the member it came from.
fn for_member(error: PayrollError, id: u64, name: &str) -> PayrollError {
    match error {
        PayrollError::ConfigParseError { path, message } => PayrollError::ConfigParseError {
            path,
            message: format!("member #{id} '{name}': {message}"),
        },
        other => other,
    }
}

/// Metadata about the company.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// The company's display name.
    pub name: String,
}

/// Contents of `company.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    /// Company metadata.
    pub company: CompanyMetadata,
    /// Directory entries, in the order they are added.
    #[serde(default)]
    pub employees: Vec<StaffEntry>,
}

/// One employee of the directory.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffEntry {
    /// The employee's name.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Starting vacation balance; 25 when omitted.
    pub vacation_days: Option<u32>,
    /// How the employee is paid.
    pub pay: StaffPay,
}

/// Pay scheme of a directory entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StaffPay {
    /// Paid per hour worked.
    Hourly {
        /// Pay per hour; 50 when omitted.
        hourly_rate: Option<Decimal>,
        /// Hours worked; 10 when omitted.
        hours_worked: Option<Decimal>,
    },
    /// Paid a fixed monthly salary.
    Salaried {
        /// Monthly salary; 5000 when omitted.
        monthly_salary: Option<Decimal>,
    },
}

impl StaffEntry {
    /// Adds the employee described by this entry to `company`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the entry's pay overflows; `company` is
    /// left unchanged in that case.
    pub fn add_to(&self, company: &mut Company) -> PayrollResult<()> {
        match &self.pay {
            StaffPay::Hourly {
                hourly_rate,
                hours_worked,
            } => {
                let mut employee = HourlyEmployee::new(self.name.clone(), self.role);
                if let Some(rate) = hourly_rate {
                    employee = employee.with_hourly_rate(*rate);
                }
                if let Some(hours) = hours_worked {
                    employee = employee.with_hours_worked(*hours);
                }
                if let Some(days) = self.vacation_days {
                    employee = employee.with_vacation_days(days);
                }
                self.check_pay(&employee)?;
                company.add_employee(employee);
            }
            StaffPay::Salaried { monthly_salary } => {
                let mut employee = SalariedEmployee::new(self.name.clone(), self.role);
                if let Some(salary) = monthly_salary {
                    employee = employee.with_monthly_salary(*salary);
                }
                if let Some(days) = self.vacation_days {
                    employee = employee.with_vacation_days(days);
                }
                self.check_pay(&employee)?;
                company.add_employee(employee);
            }
        }
        Ok(())
    }

    fn check_pay(&self, employee: &dyn StaffMember) -> PayrollResult<()> {
        employee
            .checked_pay_amount()
            .map(|_| ())
            .ok_or_else(|| overflow(COMPANY_FILE, format!("pay for '{}'", self.name)))
    }
}

/// Contents of `workforce.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkforceConfig {
    /// Everyone paid through contracts, in listing order.
    #[serde(default)]
    pub members: Vec<MemberEntry>,
}

/// A contract as written in the roster.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContractEntry {
    /// See [`HourlyContract`].
    Hourly {
        /// Pay per hour; 0 when omitted.
        pay_rate: Option<Decimal>,
        /// Hours worked; 0 when omitted.
        hours_worked: Option<Decimal>,
        /// Fixed employer cost; 1000 when omitted.
        employer_cost: Option<Decimal>,
    },
    /// See [`SalariedContract`].
    Salaried {
        /// Monthly salary; 0 when omitted.
        monthly_salary: Option<Decimal>,
        /// Salary fraction; 1 when omitted.
        percentage: Option<Decimal>,
    },
}

impl ContractEntry {
    /// Builds the owned contract.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the contract's pay overflows.
    pub fn to_contract(&self) -> PayrollResult<Box<dyn Contract>> {
        let contract: Box<dyn Contract> = match self {
            ContractEntry::Hourly {
                pay_rate,
                hours_worked,
                employer_cost,
            } => {
                let defaults = HourlyContract::default();
                Box::new(HourlyContract {
                    pay_rate: pay_rate.unwrap_or(defaults.pay_rate),
                    hours_worked: hours_worked.unwrap_or(defaults.hours_worked),
                    employer_cost: employer_cost.unwrap_or(defaults.employer_cost),
                })
            }
            ContractEntry::Salaried {
                monthly_salary,
                percentage,
            } => {
                let defaults = SalariedContract::default();
                Box::new(SalariedContract {
                    monthly_salary: monthly_salary.unwrap_or(defaults.monthly_salary),
                    percentage: percentage.unwrap_or(defaults.percentage),
                })
            }
        };
        match contract.checked_compute_pay() {
            Some(_) => Ok(contract),
            None => Err(overflow(WORKFORCE_FILE, "contract pay")),
        }
    }
}

/// A per-contract commission as written in the roster.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionEntry {
    /// Amount per contract; 100 when omitted.
    pub commission: Option<Decimal>,
    /// Contracts landed; 0 when omitted.
    pub contracts_landed: Option<Decimal>,
}

impl CommissionEntry {
    /// Builds the owned commission.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the commission's pay overflows.
    pub fn to_commission(&self) -> PayrollResult<Box<dyn Commission>> {
        let defaults = ContractCommission::default();
        let commission = ContractCommission {
            commission: self.commission.unwrap_or(defaults.commission),
            contracts_landed: self.contracts_landed.unwrap_or(defaults.contracts_landed),
        };
        match commission.checked_compute_pay() {
            Some(_) => Ok(Box::new(commission)),
            None => Err(overflow(WORKFORCE_FILE, "commission pay")),
        }
    }
}

/// One member of the workforce.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberEntry {
    /// An [`Employee`] delegating to its contract and commission.
    Employee {
        /// Numeric identifier.
        id: u64,
        /// Display name.
        name: String,
        /// The owned contract.
        contract: ContractEntry,
        /// The optional commission.
        commission: Option<CommissionEntry>,
    },
    /// A [`Freelancer`] with inline pay fields.
    Freelancer {
        /// Numeric identifier.
        id: u64,
        /// Display name.
        name: String,
        /// The carried (and ignored) contract.
        contract: ContractEntry,
        /// Pay per hour; 0 when omitted.
        pay_rate: Option<Decimal>,
        /// Hours worked; 0 when omitted.
        hours_worked: Option<Decimal>,
        /// Amount per contract; 100 when omitted.
        commission: Option<Decimal>,
        /// Contracts landed; 0 when omitted.
        contracts_landed: Option<Decimal>,
    },
}

impl MemberEntry {
    /// The member's identifier.
    pub fn id(&self) -> u64 {
        match self {
            MemberEntry::Employee { id, .. } | MemberEntry::Freelancer { id, .. } => *id,
        }
    }

    /// The member's name.
    pub fn name(&self) -> &str {
        match self {
            MemberEntry::Employee { name, .. } | MemberEntry::Freelancer { name, .. } => name,
        }
    }

    /// Builds the payee described by this entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if the contract, the commission, or the
    /// member's total pay overflows.
    pub fn to_payee(&self) -> PayrollResult<Box<dyn Payee>> {
        self.build_payee()
            .map_err(|e| for_member(e, self.id(), self.name()))
    }

    fn build_payee(&self) -> PayrollResult<Box<dyn Payee>> {
        let payee: Box<dyn Payee> = match self {
            MemberEntry::Employee {
                id,
                name,
                contract,
                commission,
            } => Box::new(Employee::from_boxed(
                name.clone(),
                *id,
                contract.to_contract()?,
                commission
                    .as_ref()
                    .map(CommissionEntry::to_commission)
                    .transpose()?,
            )),
            MemberEntry::Freelancer {
                id,
                name,
                contract,
                pay_rate,
                hours_worked,
                commission,
                contracts_landed,
            } => {
                let mut freelancer =
                    Freelancer::from_boxed(name.clone(), *id, contract.to_contract()?);
                if let Some(rate) = pay_rate {
                    freelancer.pay_rate = *rate;
                }
                if let Some(hours) = hours_worked {
                    freelancer.hours_worked = *hours;
                }
                if let Some(amount) = commission {
                    freelancer.commission = *amount;
                }
                if let Some(landed) = contracts_landed {
                    freelancer.contracts_landed = *landed;
                }
                Box::new(freelancer)
            }
        };
        match payee.checked_compute_pay() {
            Some(_) => Ok(payee),
            None => Err(overflow(WORKFORCE_FILE, "total pay")),
        }
    }
}
