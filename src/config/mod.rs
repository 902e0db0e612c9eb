//! Roster loading for the payroll models.
//!
//! This module loads a company roster from YAML files: the directory
//! employees of the inheritance model and the contracted workforce of the
//! composition model.
//!
//! # Example
//!
//! ```no_run
//! use payroll_patterns::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/acme").unwrap();
//! println!("Loaded roster for {}", loader.company_name());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CommissionEntry, CompanyConfig, CompanyMetadata, ContractEntry, MemberEntry, StaffEntry,
    StaffPay, WorkforceConfig,
};
