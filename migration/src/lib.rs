//! Database migrations for the Customer Directory service.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_07_10_090000_create_companies;
mod m2025_07_10_090100_create_employees;
mod m2025_07_10_090200_create_customers;
mod m2025_07_10_090300_create_employee_customers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_07_10_090000_create_companies::Migration),
            Box::new(m2025_07_10_090100_create_employees::Migration),
            Box::new(m2025_07_10_090200_create_customers::Migration),
            Box::new(m2025_07_10_090300_create_employee_customers::Migration),
        ]
    }
}
