//! The company directory.

use tracing::debug;

use super::employee::Employee;
use super::role::Role;

/// An ordered directory of employees.
///
/// Insertion order is preserved and nothing is deduplicated: two employees
/// with the same name and role are both kept.
#[derive(Debug, Default)]
pub struct Company {
    employees: Vec<Box<dyn Employee>>,
}

impl Company {
    /// Creates an empty company.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee to the directory.
    pub fn add_employee(&mut self, employee: impl Employee + 'static) {
        self.employees.push(Box::new(employee));
    }

    /// Returns every employee whose role equals `role`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_patterns::inheritance::{Company, Employee, HourlyEmployee, Role, SalariedEmployee};
    ///
    /// let mut company = Company::new();
    /// company.add_employee(SalariedEmployee::new("Louis", Role::Manager));
    /// company.add_employee(HourlyEmployee::new("Brenda", Role::VicePresident));
    ///
    /// let managers = company.find_employees(Role::Manager);
    /// assert_eq!(managers.len(), 1);
    /// assert_eq!(managers[0].name(), "Louis");
    /// assert!(company.find_employees(Role::Intern).is_empty());
    /// ```
    pub fn find_employees(&self, role: Role) -> Vec<&dyn Employee> {
        let matches: Vec<&dyn Employee> = self
            .employees
            .iter()
            .filter(|employee| employee.role() == role)
            .map(|employee| &**employee)
            .collect();

        debug!(role = %role, matches = matches.len(), "Directory query");
        matches
    }

    /// All employees in insertion order.
    pub fn employees(&self) -> &[Box<dyn Employee>] {
        &self.employees
    }

    /// Mutable access to the employee at `index`.
    pub fn employee_mut(&mut self, index: usize) -> Option<&mut (dyn Employee + 'static)> {
        self.employees.get_mut(index).map(|employee| &mut **employee)
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if nobody has been added yet.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inheritance::{HourlyEmployee, SalariedEmployee};

    fn names(employees: &[&dyn Employee]) -> Vec<String> {
        employees.iter().map(|e| e.name().to_string()).collect()
    }

    fn create_test_company() -> Company {
        let mut company = Company::new();
        company.add_employee(SalariedEmployee::new("Louis", Role::Manager));
        company.add_employee(HourlyEmployee::new("Brenda", Role::VicePresident));
        company.add_employee(HourlyEmployee::new("Tim", Role::Intern));
        company.add_employee(SalariedEmployee::new("Ana", Role::Manager));
        company
    }

    /// DIR-001: matches are returned in insertion order
    #[test]
    fn test_find_employees_preserves_insertion_order() {
        let company = create_test_company();
        let managers = company.find_employees(Role::Manager);

        assert_eq!(names(&managers), vec!["Louis", "Ana"]);
    }

    /// DIR-002: no matches yields an empty result
    #[test]
    fn test_find_employees_with_no_matches() {
        let mut company = Company::new();
        company.add_employee(SalariedEmployee::new("Louis", Role::Manager));

        assert!(company.find_employees(Role::Intern).is_empty());
    }

    /// DIR-003: duplicates are kept
    #[test]
    fn test_duplicates_are_allowed() {
        let mut company = Company::new();
        company.add_employee(HourlyEmployee::new("Tim", Role::Intern));
        company.add_employee(HourlyEmployee::new("Tim", Role::Intern));

        assert_eq!(company.len(), 2);
        assert_eq!(names(&company.find_employees(Role::Intern)), vec!["Tim", "Tim"]);
    }

    #[test]
    fn test_query_is_non_destructive() {
        let company = create_test_company();
        let _ = company.find_employees(Role::VicePresident);

        assert_eq!(company.len(), 4);
        assert_eq!(company.employees()[1].name(), "Brenda");
    }

    #[test]
    fn test_empty_company() {
        let company = Company::new();
        assert!(company.is_empty());
        assert!(company.find_employees(Role::Manager).is_empty());
    }

    #[test]
    fn test_employee_mut_allows_holiday() {
        let mut company = create_test_company();

        let louis = company.employee_mut(0).unwrap();
        louis.take_a_holiday(false).unwrap();

        assert_eq!(company.employees()[0].vacation_days(), 24);
        assert!(company.employee_mut(10).is_none());
    }
}
