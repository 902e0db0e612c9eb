//! Payroll demo.
//!
//! Loads the bundled Acme roster, queries the directory, pays and sends the
//! first employee on holiday, then pays the contracted workforce.

use tracing::{Level, warn};

use payroll_patterns::config::{ConfigLoader, ContractEntry, MemberEntry};
use payroll_patterns::error::PayrollResult;
use payroll_patterns::inheritance::{Employee, Role};

const ROSTER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/acme");

fn main() -> PayrollResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let loader = ConfigLoader::load(ROSTER_PATH)?;
    println!("{}", loader.company_name());

    let mut company = loader.build_company()?;
    for role in [Role::VicePresident, Role::Manager, Role::Intern] {
        let names: Vec<&str> = company
            .find_employees(role)
            .into_iter()
            .map(|employee| employee.name())
            .collect();
        println!("{}: [{}]", role, names.join(", "));
    }

    if let Some(first) = company.employee_mut(0) {
        println!("{}", first.pay().reasoning);
        match first.take_a_holiday(false) {
            Ok(outcome) => println!("{}", outcome.message),
            Err(err) => warn!(error = %err, "Holiday refused"),
        }
    }

    for entry in &loader.workforce_config().members {
        let pay = entry.to_payee()?.compute_pay();
        match entry {
            MemberEntry::Employee {
                name,
                commission: Some(commission),
                ..
            } => println!(
                "{} landed {} contracts and earned ${}.",
                name,
                commission.contracts_landed.unwrap_or_default(),
                pay
            ),
            MemberEntry::Employee {
                name,
                contract: ContractEntry::Hourly { hours_worked, .. },
                ..
            } => println!(
                "{} worked for {} hours and earned ${}.",
                name,
                hours_worked.unwrap_or_default(),
                pay
            ),
            _ => println!("#{} {} earned ${}.", entry.id(), entry.name(), pay),
        }
    }

    Ok(())
}
