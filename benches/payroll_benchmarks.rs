//! Benchmarks for directory queries and pay computation.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_patterns::composition::{
    ContractCommission, Employee as ContractEmployee, HourlyContract, SalariedContract,
};
use payroll_patterns::inheritance::{Company, Employee, HourlyEmployee, Role, SalariedEmployee};

/// Creates a company cycling through every role.
fn create_company(size: usize) -> Company {
    let roles = [Role::Manager, Role::VicePresident, Role::Intern];
    let mut company = Company::new();
    for i in 0..size {
        let role = roles[i % roles.len()];
        if i % 2 == 0 {
            company.add_employee(HourlyEmployee::new(format!("hourly_{}", i), role));
        } else {
            company.add_employee(SalariedEmployee::new(format!("salaried_{}", i), role));
        }
    }
    company
}

fn bench_find_employees(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_employees");

    for size in [10usize, 1_000, 10_000] {
        let company = create_company(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &company, |b, company| {
            b.iter(|| company.find_employees(black_box(Role::Intern)).len())
        });
    }

    group.finish();
}

fn bench_directory_pay(c: &mut Criterion) {
    let company = create_company(1_000);

    c.bench_function("directory_pay_1000", |b| {
        b.iter(|| {
            company
                .employees()
                .iter()
                .map(|e| e.pay().amount)
                .sum::<Decimal>()
        })
    });
}

fn bench_composed_pay(c: &mut Criterion) {
    let employees: Vec<ContractEmployee> = (0..1_000u64)
        .map(|i| {
            if i % 2 == 0 {
                ContractEmployee::new(
                    "hourly",
                    i,
                    HourlyContract::new(Decimal::from(50), Decimal::from(100)),
                )
            } else {
                ContractEmployee::new("salaried", i, SalariedContract::new(Decimal::from(5000)))
                    .with_commission(ContractCommission::new(Decimal::from(10)))
            }
        })
        .collect();

    c.bench_function("composed_pay_1000", |b| {
        b.iter(|| {
            black_box(&employees)
                .iter()
                .map(ContractEmployee::compute_pay)
                .sum::<Decimal>()
        })
    });
}

criterion_group!(
    benches,
    bench_find_employees,
    bench_directory_pay,
    bench_composed_pay
);
criterion_main!(benches);
