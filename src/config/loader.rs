//! Roster loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a company
//! roster from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::composition::Payee;
use crate::error::{PayrollError, PayrollResult};
use crate::inheritance::Company;

use super::types::{COMPANY_FILE, CompanyConfig, MemberEntry, WORKFORCE_FILE, WorkforceConfig};

/// Loads and provides access to a company roster.
///
/// # Directory Structure
///
/// ```text
/// config/acme/
/// ├── company.yaml    # Company name and directory employees
/// └── workforce.yaml  # Contracted employees and freelancers
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_patterns::config::ConfigLoader;
/// use payroll_patterns::inheritance::Role;
///
/// let loader = ConfigLoader::load("./config/acme")?;
/// let company = loader.build_company()?;
/// println!("{} managers", company.find_employees(Role::Manager).len());
/// # Ok::<(), payroll_patterns::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    company: CompanyConfig,
    workforce: WorkforceConfig,
}

impl ConfigLoader {
    /// Loads the roster from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if either file is missing and
    /// `ConfigParseError` if either file is not a valid roster, including
    /// one whose pay amounts overflow.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let company_path = path.join(COMPANY_FILE);
        let workforce_path = path.join(WORKFORCE_FILE);

        let company = Self::load_yaml::<CompanyConfig>(&company_path)?;
        let workforce = Self::load_yaml::<WorkforceConfig>(&workforce_path)?;
        let loader = Self { company, workforce };

        loader
            .build_company()
            .map_err(|e| Self::located(e, &company_path))?;
        loader
            .build_workforce()
            .map_err(|e| Self::located(e, &workforce_path))?;

        info!(
            path = %path.display(),
            company = %loader.company.company.name,
            employees = loader.company.employees.len(),
            members = loader.workforce.members.len(),
            "Loaded roster"
        );

        Ok(loader)
    }

    /// Points a parse error at the file it came from.
    fn located(error: PayrollError, path: &Path) -> PayrollError {
        match error {
            PayrollError::ConfigParseError { message, .. } => PayrollError::ConfigParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// The company's display name.
    pub fn company_name(&self) -> &str {
        &self.company.company.name
    }

    /// The parsed `company.yaml`.
    pub fn company_config(&self) -> &CompanyConfig {
        &self.company
    }

    /// The parsed `workforce.yaml`.
    pub fn workforce_config(&self) -> &WorkforceConfig {
        &self.workforce
    }

    /// Builds a fresh directory from the roster, in file order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if an entry's pay overflows.
    /// [`ConfigLoader::load`] already builds once to check, so a loaded
    /// roster does not fail here.
    pub fn build_company(&self) -> PayrollResult<Company> {
        let mut company = Company::new();
        for entry in &self.company.employees {
            entry.add_to(&mut company)?;
        }
        Ok(company)
    }

    /// Builds every workforce member, in file order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if a member's pay overflows.
    pub fn build_workforce(&self) -> PayrollResult<Vec<Box<dyn Payee>>> {
        self.workforce
            .members
            .iter()
            .map(MemberEntry::to_payee)
            .collect()
    }

    /// Finds a workforce member by id.
    pub fn find_member(&self, id: u64) -> Option<&MemberEntry> {
        self.workforce.members.iter().find(|m| m.id() == id)
    }
}
