//! # Data Models
//!
//! SeaORM entity models for the four tables the directory works with.

pub mod company;
pub mod customer;
pub mod employee;
pub mod employee_customer;

pub use company::Entity as Company;
pub use customer::Entity as Customer;
pub use employee::Entity as Employee;
pub use employee_customer::Entity as EmployeeCustomer;
