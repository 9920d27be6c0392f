//! # Repository Layer
//!
//! Repositories encapsulate the SeaORM operations for each aggregate. They
//! borrow the shared connection pool and are constructed per request, which
//! keeps handlers free of query details and lets tests swap in an in-memory
//! SQLite database.

pub mod company;
pub mod customer;
pub mod employee;

pub use company::CompanyRepository;
pub use customer::{CustomerRepository, CustomerUpdate, NewCustomer};
pub use employee::EmployeeRepository;
